use super::components::Ball;
use super::types::SceneToggles;
use bevy::prelude::*;

/// Animation speed is expressed in degrees per frame at this rate.
pub(super) const REFERENCE_FRAME_RATE: f32 = 60.0;

pub(super) fn spin_step_radians(speed_deg: f32, delta_secs: f32) -> f32 {
    (speed_deg * delta_secs * REFERENCE_FRAME_RATE).to_radians()
}

/// Rotates about the world axes through the origin, X before Y, so the ball
/// swings around the goal rather than spinning in place.
pub(super) fn apply_spin(transform: &mut Transform, toggles: &SceneToggles, angle: f32) {
    if toggles.spin_x {
        transform.rotate_around(Vec3::ZERO, Quat::from_rotation_x(angle));
    }
    if toggles.spin_y {
        transform.rotate_around(Vec3::ZERO, Quat::from_rotation_y(angle));
    }
}

pub(super) fn spin_ball(
    time: Res<Time>,
    toggles: Res<SceneToggles>,
    mut balls: Query<&mut Transform, With<Ball>>,
) {
    if !toggles.spin_x && !toggles.spin_y {
        return;
    }

    let angle = spin_step_radians(toggles.animation_speed, time.delta_secs());
    for mut transform in &mut balls {
        apply_spin(&mut transform, &toggles, angle);
    }
}
