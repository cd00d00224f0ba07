use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::pbr::wireframe::WireframePlugin;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{WgpuFeatures, WgpuSettings};
use bevy::window::{PresentMode, WindowResolution};
use std::env;
use std::time::Duration;
use tracing::{debug, info, warn};

mod animation;
mod camera;
mod components;
mod controls;
mod figures;
mod geometry;
mod goal;
mod hud;
mod io;
mod parts;
mod settings;
mod stadium;
mod types;

use animation::spin_ball;
use camera::{OrbitCameraState, orbit_camera_system};
use components::{Ball, GoalRoot, PlayerFigure, SceneCamera, StadiumRoot, StadiumRow, Trophy};
use controls::{apply_goal_scale, handle_scene_keys, sync_wireframe};
use figures::{ball_layout, player_layout, player_position, trophy_layout, trophy_position};
use geometry::GoalDimensions;
use goal::goal_layout;
use hud::{spawn_hud, update_hud_status};
use io::{CLI_HELP, CliCommand, ConfigReport, ConfigSource, load_scene_config, parse_cli_options};
use parts::{MeshCache, Palette, PartAssets, spawn_group};
use settings::SceneSettings;
use stadium::{STADIUM_OFFSET, stadium_layout};
use types::SceneToggles;

pub fn run() -> anyhow::Result<()> {
    let options = match parse_cli_options(env::args().skip(1))? {
        CliCommand::Run(options) => options,
        CliCommand::Help => {
            println!("{CLI_HELP}");
            return Ok(());
        }
    };

    let (persisted, report) = load_scene_config(&options.config_path);
    let initial_settings = persisted.settings;
    let initial_keybinds = persisted.keybinds.to_runtime();
    let present_mode = if initial_settings.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: initial_settings.window_title.clone(),
                    resolution: WindowResolution::new(
                        initial_settings.resolution_width,
                        initial_settings.resolution_height,
                    ),
                    present_mode,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: WgpuSettings {
                    features: WgpuFeatures::POLYGON_MODE_LINE,
                    ..default()
                }
                .into(),
                ..default()
            }),
        WireframePlugin::default(),
    ));

    if initial_settings.log_frame_diagnostics {
        app.add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin {
                wait_duration: Duration::from_secs(2),
                ..default()
            },
        ));
    }

    app.insert_resource(ClearColor(initial_settings.background_color()))
        .insert_resource(SceneToggles::from_settings(&initial_settings))
        .insert_resource(OrbitCameraState::looking_at_origin(
            initial_settings.camera_distance,
        ))
        .insert_resource(initial_settings)
        .insert_resource(initial_keybinds)
        .insert_resource(report)
        .add_systems(
            Startup,
            (report_config, setup_camera, spawn_scene, spawn_hud).chain(),
        )
        .add_systems(
            Update,
            (
                handle_scene_keys,
                apply_goal_scale,
                sync_wireframe,
                spin_ball,
                orbit_camera_system,
                update_hud_status,
            )
                .chain(),
        );

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("scene exited with code {code}"),
    }
}

fn report_config(report: Res<ConfigReport>) {
    let path = report.path.display();
    match &report.source {
        ConfigSource::Loaded => info!(%path, "loaded scene config"),
        ConfigSource::WroteDefaults => info!(%path, "wrote default scene config"),
        ConfigSource::Defaults { reason } => {
            warn!(%path, %reason, "using default scene config")
        }
    }

    for field in &report.sanitized {
        warn!(field = *field, "config value out of range, reset to default");
    }
}

fn setup_camera(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    orbit: Res<OrbitCameraState>,
) {
    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.camera_fov_deg.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        orbit.transform(),
    ));
}

fn spawn_scene(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let dims = GoalDimensions::default();
    let mut assets = PartAssets {
        meshes: &mut meshes,
        cache: MeshCache::default(),
        palette: Palette::new(&mut materials),
    };

    spawn_group(
        &mut commands,
        &mut assets,
        (GoalRoot, Name::new("goal"), Transform::default()),
        &goal_layout(&dims),
    );

    commands.spawn((Ball, assets.bundle(&ball_layout(&dims))));

    let rows = stadium_layout(settings.stadium_rows, settings.seats_per_row);
    commands
        .spawn((
            StadiumRoot,
            Name::new("stadium"),
            Transform::from_translation(STADIUM_OFFSET),
            Visibility::default(),
        ))
        .with_children(|stadium| {
            for (index, row) in rows.iter().enumerate() {
                stadium
                    .spawn((
                        StadiumRow,
                        Name::new(format!("row {index}")),
                        Transform::default(),
                        Visibility::default(),
                    ))
                    .with_children(|seats| {
                        for part in row {
                            seats.spawn(assets.bundle(part));
                        }
                    });
            }
        });

    spawn_group(
        &mut commands,
        &mut assets,
        (
            PlayerFigure,
            Name::new("player"),
            Transform::from_translation(player_position(&dims)),
        ),
        &player_layout(&dims),
    );

    spawn_group(
        &mut commands,
        &mut assets,
        (
            Trophy,
            Name::new("trophy"),
            Transform::from_translation(trophy_position(&dims)),
        ),
        &trophy_layout(),
    );

    debug!(
        unique_meshes = assets.cache.len(),
        rows = settings.stadium_rows,
        seats_per_row = settings.seats_per_row,
        "scene spawned"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scene_app(settings: SceneSettings) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<OrbitCameraState>()
            .insert_resource(settings)
            .add_systems(Startup, (setup_camera, spawn_scene));
        app.update();
        app
    }

    fn small_stadium() -> SceneSettings {
        SceneSettings {
            stadium_rows: 2,
            seats_per_row: 3,
            ..SceneSettings::default()
        }
    }

    fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, F>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn spawns_every_part_of_the_scene() {
        let mut app = scene_app(small_stadium());

        // goal 12, ball 1, stadium 2 * 3 * 2, player 6, trophy 4
        assert_eq!(count::<With<Mesh3d>>(&mut app), 12 + 1 + 12 + 6 + 4);
        assert_eq!(count::<With<GoalRoot>>(&mut app), 1);
        assert_eq!(count::<With<Ball>>(&mut app), 1);
        assert_eq!(count::<With<StadiumRow>>(&mut app), 2);
        assert_eq!(count::<With<PlayerFigure>>(&mut app), 1);
        assert_eq!(count::<With<Trophy>>(&mut app), 1);
        assert_eq!(count::<With<SceneCamera>>(&mut app), 1);
    }

    #[test]
    fn shares_materials_across_parts() {
        let app = scene_app(small_stadium());

        assert_eq!(
            app.world().resource::<Assets<StandardMaterial>>().len(),
            parts::Paint::ALL.len()
        );
    }

    #[test]
    fn ball_starts_in_front_of_the_goal() {
        let mut app = scene_app(small_stadium());

        let ball = *app
            .world_mut()
            .query_filtered::<&Transform, With<Ball>>()
            .single(app.world())
            .unwrap();
        let dims = GoalDimensions::default();
        assert_eq!(ball.translation, Vec3::new(0.0, 0.0, dims.ball_distance()));
    }

    #[test]
    fn stadium_sits_behind_the_goal() {
        let mut app = scene_app(small_stadium());

        let stadium = *app
            .world_mut()
            .query_filtered::<&Transform, With<StadiumRoot>>()
            .single(app.world())
            .unwrap();
        assert_eq!(stadium.translation, STADIUM_OFFSET);
    }

    #[test]
    fn camera_uses_configured_field_of_view() {
        let mut app = scene_app(SceneSettings {
            camera_fov_deg: 60.0,
            ..small_stadium()
        });

        let projection = app
            .world_mut()
            .query_filtered::<&Projection, With<SceneCamera>>()
            .single(app.world())
            .unwrap()
            .clone();
        match projection {
            Projection::Perspective(perspective) => {
                approx::assert_relative_eq!(perspective.fov, 60.0_f32.to_radians());
                approx::assert_relative_eq!(perspective.far, 1000.0);
            }
            other => panic!("unexpected projection {other:?}"),
        }
    }
}
