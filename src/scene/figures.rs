use super::geometry::GoalDimensions;
use super::parts::{Paint, PartLayout, PartShape};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_4;

pub(super) const PLAYER_X: f32 = 2.0;
pub(super) const TROPHY_LIFT: f32 = 0.5;

pub(super) fn ball_layout(dims: &GoalDimensions) -> PartLayout {
    PartLayout::new(
        "ball",
        PartShape::Sphere {
            radius: dims.ball_radius(),
        },
        Paint::Ball,
        Transform::from_xyz(0.0, 0.0, dims.ball_distance()),
    )
}

/// Body part sizes of the player figure, all derived from the goal height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PlayerProportions {
    pub(super) body_height: f32,
    pub(super) leg_height: f32,
    pub(super) arm_height: f32,
    pub(super) head_radius: f32,
}

impl PlayerProportions {
    pub(super) fn from_goal(dims: &GoalDimensions) -> Self {
        let player_height = dims.front_post_length() * 0.6;
        let body_height = player_height * 0.5;
        Self {
            body_height,
            leg_height: player_height * 0.4,
            arm_height: body_height * 0.8,
            head_radius: body_height * 0.3,
        }
    }
}

pub(super) fn player_layout(dims: &GoalDimensions) -> Vec<PartLayout> {
    let p = PlayerProportions::from_goal(dims);
    let limb = |height| PartShape::Cylinder {
        radius: 0.1,
        height,
    };
    let leg_y = -p.body_height / 2.0 - p.leg_height / 2.0;
    let arm_y = p.body_height / 4.0;

    vec![
        PartLayout::new(
            "body",
            PartShape::Cylinder {
                radius: 0.2,
                height: p.body_height,
            },
            Paint::Kit,
            Transform::IDENTITY,
        ),
        PartLayout::new(
            "head",
            PartShape::Sphere {
                radius: p.head_radius,
            },
            Paint::Skin,
            Transform::from_xyz(0.0, p.body_height / 2.0 + p.head_radius, 0.0),
        ),
        PartLayout::new(
            "left leg",
            limb(p.leg_height),
            Paint::Kit,
            Transform::from_xyz(-0.15, leg_y, 0.0),
        ),
        PartLayout::new(
            "right leg",
            limb(p.leg_height),
            Paint::Kit,
            Transform::from_xyz(0.15, leg_y, 0.0),
        ),
        PartLayout::new(
            "left arm",
            limb(p.arm_height),
            Paint::Kit,
            Transform::from_xyz(-0.35, arm_y, 0.0)
                .with_rotation(Quat::from_rotation_z(FRAC_PI_4)),
        ),
        PartLayout::new(
            "right arm",
            limb(p.arm_height),
            Paint::Kit,
            Transform::from_xyz(0.35, arm_y, 0.0)
                .with_rotation(Quat::from_rotation_z(-FRAC_PI_4)),
        ),
    ]
}

pub(super) fn player_position(dims: &GoalDimensions) -> Vec3 {
    Vec3::new(PLAYER_X, 0.0, dims.ball_distance())
}

pub(super) fn trophy_layout() -> Vec<PartLayout> {
    let handle = PartShape::Torus {
        major_radius: 0.15,
        minor_radius: 0.05,
    };

    vec![
        PartLayout::new(
            "trophy base",
            PartShape::Cylinder {
                radius: 0.5,
                height: 0.2,
            },
            Paint::TrophyBase,
            Transform::IDENTITY,
        ),
        PartLayout::new(
            "trophy cup",
            PartShape::Cylinder {
                radius: 0.3,
                height: 0.6,
            },
            Paint::Gold,
            Transform::from_xyz(0.0, 0.4, 0.0),
        ),
        // Handles lie flat around the cup rim.
        PartLayout::new(
            "trophy handle",
            handle,
            Paint::Gold,
            Transform::from_xyz(-0.3, 0.4, 0.0),
        ),
        PartLayout::new(
            "trophy handle",
            handle,
            Paint::Gold,
            Transform::from_xyz(0.3, 0.4, 0.0),
        ),
    ]
}

/// The trophy stands on top of the crossbar.
pub(super) fn trophy_position(dims: &GoalDimensions) -> Vec3 {
    Vec3::new(0.0, dims.front_post_length() / 2.0 + TROPHY_LIFT, 0.0)
}
