use super::components::GoalRoot;
use super::settings::SceneSettings;
use super::types::{ACTION_ORDER, SceneAction, SceneKeybinds, SceneToggles};
use bevy::pbr::wireframe::Wireframe;
use bevy::prelude::*;
use tracing::{debug, info};

pub(super) fn handle_scene_keys(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<SceneKeybinds>,
    settings: Res<SceneSettings>,
    mut toggles: ResMut<SceneToggles>,
) {
    for action in ACTION_ORDER {
        if !bindings.action_just_pressed(&keys, action) {
            continue;
        }

        if !toggles.apply(action, &settings) {
            debug!(action = action.label(), "ignored while orbit control is off");
            continue;
        }

        match action {
            SceneAction::ToggleOrbit => info!(enabled = toggles.orbit_enabled, "orbit control"),
            SceneAction::ToggleWireframe => info!(enabled = toggles.wireframe, "wireframe"),
            SceneAction::SlowDown | SceneAction::SpeedUp => {
                debug!(speed = toggles.animation_speed, "animation speed")
            }
            SceneAction::ToggleSpinX | SceneAction::ToggleSpinY => {
                debug!(x = toggles.spin_x, y = toggles.spin_y, "ball spin")
            }
            SceneAction::ShrinkGoal => debug!(scale = toggles.goal_scale, "goal scale"),
        }
    }
}

pub(super) fn apply_goal_scale(
    toggles: Res<SceneToggles>,
    mut goals: Query<&mut Transform, With<GoalRoot>>,
) {
    if !toggles.is_changed() {
        return;
    }

    let scale = Vec3::splat(toggles.goal_scale);
    for mut transform in &mut goals {
        if transform.scale != scale {
            transform.scale = scale;
        }
    }
}

/// Keeps every mesh in the scene in step with the wireframe toggle.
pub(super) fn sync_wireframe(
    toggles: Res<SceneToggles>,
    mut commands: Commands,
    solid: Query<Entity, (With<Mesh3d>, Without<Wireframe>)>,
    wired: Query<Entity, (With<Mesh3d>, With<Wireframe>)>,
) {
    if !toggles.is_changed() {
        return;
    }

    if toggles.wireframe {
        for entity in &solid {
            commands.entity(entity).insert(Wireframe);
        }
    } else {
        for entity in &wired {
            commands.entity(entity).remove::<Wireframe>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<SceneKeybinds>()
            .init_resource::<SceneSettings>()
            .init_resource::<SceneToggles>()
            .add_systems(
                Update,
                (handle_scene_keys, apply_goal_scale, sync_wireframe).chain(),
            );
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release_all();
        input.clear();
        input.press(key);
        app.update();
    }

    fn toggles(app: &App) -> &SceneToggles {
        app.world().resource::<SceneToggles>()
    }

    #[test]
    fn o_toggles_orbit_and_gates_spin_keys() {
        let mut app = test_app();

        press(&mut app, KeyCode::KeyO);
        assert!(!toggles(&app).orbit_enabled);

        press(&mut app, KeyCode::Digit1);
        press(&mut app, KeyCode::Digit2);
        assert!(!toggles(&app).spin_x);
        assert!(!toggles(&app).spin_y);

        press(&mut app, KeyCode::KeyO);
        press(&mut app, KeyCode::Digit1);
        assert!(toggles(&app).spin_x);
        assert!(!toggles(&app).spin_y);
    }

    #[test]
    fn arrow_and_sign_keys_scale_speed() {
        let mut app = test_app();

        press(&mut app, KeyCode::ArrowUp);
        press(&mut app, KeyCode::Equal);
        assert_relative_eq!(toggles(&app).animation_speed, 2.0 * 1.1 * 1.1, epsilon = 1e-5);

        press(&mut app, KeyCode::Minus);
        press(&mut app, KeyCode::ArrowDown);
        assert_relative_eq!(toggles(&app).animation_speed, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn holding_a_key_applies_once() {
        let mut app = test_app();

        press(&mut app, KeyCode::ArrowUp);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
        app.update();

        assert_relative_eq!(toggles(&app).animation_speed, 2.2, epsilon = 1e-5);
    }

    #[test]
    fn digit_three_shrinks_goal_root() {
        let mut app = test_app();
        let goal = app
            .world_mut()
            .spawn((GoalRoot, Transform::default()))
            .id();

        press(&mut app, KeyCode::Digit3);
        press(&mut app, KeyCode::Digit3);

        let scale = app.world().get::<Transform>(goal).unwrap().scale;
        assert_relative_eq!(scale.x, 0.9025, epsilon = 1e-6);
        assert_relative_eq!(scale.y, 0.9025, epsilon = 1e-6);
        assert_relative_eq!(scale.z, 0.9025, epsilon = 1e-6);
    }

    #[test]
    fn w_toggles_wireframe_on_every_mesh() {
        let mut app = test_app();
        let meshes = (0..3)
            .map(|_| app.world_mut().spawn(Mesh3d(Handle::default())).id())
            .collect::<Vec<_>>();
        let group = app.world_mut().spawn(Transform::default()).id();

        press(&mut app, KeyCode::KeyW);
        for mesh in &meshes {
            assert!(app.world().get::<Wireframe>(*mesh).is_some());
        }
        assert!(app.world().get::<Wireframe>(group).is_none());

        press(&mut app, KeyCode::KeyW);
        for mesh in &meshes {
            assert!(app.world().get::<Wireframe>(*mesh).is_none());
        }
    }
}
