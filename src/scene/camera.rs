use super::components::SceneCamera;
use super::types::SceneToggles;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

const ROTATE_SENSITIVITY: f32 = 0.006;
const PAN_SENSITIVITY: f32 = 0.0018;
const ZOOM_SENSITIVITY: f32 = 0.10;
const PITCH_LIMIT: f32 = 1.45;

/// Camera orbiting `target`, Y up. Yaw 0 / pitch 0 looks down -Z.
#[derive(Resource, Debug, Clone, PartialEq)]
pub(super) struct OrbitCameraState {
    pub(super) target: Vec3,
    pub(super) distance: f32,
    pub(super) yaw: f32,
    pub(super) pitch: f32,
    pub(super) min_distance: f32,
    pub(super) max_distance: f32,
}

impl Default for OrbitCameraState {
    fn default() -> Self {
        Self::looking_at_origin(5.0)
    }
}

impl OrbitCameraState {
    pub(super) fn looking_at_origin(distance: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance,
            yaw: 0.0,
            pitch: 0.0,
            min_distance: 0.5,
            max_distance: 200.0,
        }
    }

    pub(super) fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub(super) fn pan(&mut self, delta: Vec2) {
        let forward = -camera_offset(self.yaw, self.pitch);
        let mut right = forward.cross(Vec3::Y);
        if right.length_squared() < 1e-6 {
            right = Vec3::X;
        }
        right = right.normalize();
        let up = right.cross(forward).normalize_or_zero();

        let pan_scale = self.distance * PAN_SENSITIVITY;
        self.target += (-delta.x * right + delta.y * up) * pan_scale;
    }

    pub(super) fn zoom(&mut self, scroll: f32) {
        let zoom_factor = (1.0 - scroll * ZOOM_SENSITIVITY).clamp(0.2, 5.0);
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    pub(super) fn transform(&self) -> Transform {
        let position = self.target + camera_offset(self.yaw, self.pitch) * self.distance;
        Transform::from_translation(position).looking_at(self.target, Vec3::Y)
    }
}

/// Unit vector from the target towards the camera.
fn camera_offset(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        pitch.cos() * yaw.cos(),
    )
    .normalize_or_zero()
}

pub(super) fn orbit_camera_system(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    toggles: Res<SceneToggles>,
    mut orbit: ResMut<OrbitCameraState>,
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
) {
    if !toggles.orbit_enabled {
        return;
    }

    let pointer_in_window = windows
        .single()
        .ok()
        .and_then(|w| w.cursor_position())
        .is_some();
    if !pointer_in_window {
        return;
    }

    let mouse_delta = Vec2::new(mouse_motion.delta.x, -mouse_motion.delta.y);
    let scroll_delta = mouse_scroll.delta.y;
    let mut moved = false;

    if mouse_buttons.pressed(MouseButton::Left) && mouse_delta.length_squared() > 0.0 {
        orbit.rotate(mouse_delta);
        moved = true;
    }

    if mouse_buttons.pressed(MouseButton::Right) && mouse_delta.length_squared() > 0.0 {
        orbit.pan(mouse_delta);
        moved = true;
    }

    if scroll_delta.abs() > f32::EPSILON {
        orbit.zoom(scroll_delta);
        moved = true;
    }

    if !moved {
        return;
    }

    for mut transform in &mut camera_query {
        *transform = orbit.transform();
    }
}
