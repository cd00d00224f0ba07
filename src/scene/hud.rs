use super::components::{HudRoot, HudStatusText};
use super::settings::SceneSettings;
use super::types::{ACTION_ORDER, SceneKeybinds, SceneToggles};
use bevy::prelude::*;

fn on_off(value: bool) -> &'static str {
    if value { "On" } else { "Off" }
}

pub(super) fn help_text(bindings: &SceneKeybinds) -> String {
    let mut lines = ACTION_ORDER
        .iter()
        .map(|action| format!("{}: {}", bindings.display_keys(*action), action.label()))
        .collect::<Vec<_>>();
    lines.push("Mouse: left drag orbit, right drag pan, wheel zoom".to_string());
    lines.join("\n")
}

pub(super) fn status_text(toggles: &SceneToggles) -> String {
    format!(
        "Orbit: {}\nSpin X: {}  Spin Y: {}\nSpeed: {:.2} deg/frame\nWireframe: {}\nGoal scale: {:.3}",
        on_off(toggles.orbit_enabled),
        on_off(toggles.spin_x),
        on_off(toggles.spin_y),
        toggles.animation_speed,
        on_off(toggles.wireframe),
        toggles.goal_scale,
    )
}

pub(super) fn spawn_hud(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    bindings: Res<SceneKeybinds>,
    toggles: Res<SceneToggles>,
) {
    let visibility = if settings.show_hud {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    commands
        .spawn((
            HudRoot,
            visibility,
            Node {
                position_type: PositionType::Absolute,
                top: px(12),
                left: px(12),
                padding: UiRect::all(px(10)),
                flex_direction: FlexDirection::Column,
                row_gap: px(8),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.45)),
        ))
        .with_children(|hud| {
            hud.spawn((
                Text::new(help_text(&bindings)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
            ));
            hud.spawn((
                HudStatusText,
                Text::new(status_text(&toggles)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.92, 0.55)),
            ));
        });
}

pub(super) fn update_hud_status(
    toggles: Res<SceneToggles>,
    mut texts: Query<&mut Text, With<HudStatusText>>,
) {
    if !toggles.is_changed() {
        return;
    }

    for mut text in &mut texts {
        text.0 = status_text(&toggles);
    }
}
