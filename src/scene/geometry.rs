use bevy::prelude::{Mat4, Transform};

pub(super) const CROSSBAR_LENGTH: f32 = 6.0;
pub(super) const ANGLE_BETWEEN_POSTS_DEG: f32 = 35.0;
pub(super) const BAR_RADIUS: f32 = 0.05;

pub(super) fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Goal proportions. Everything else in the scene is sized off the front post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct GoalDimensions {
    pub(super) crossbar_length: f32,
    pub(super) angle_between_posts_deg: f32,
    pub(super) bar_radius: f32,
}

impl Default for GoalDimensions {
    fn default() -> Self {
        Self {
            crossbar_length: CROSSBAR_LENGTH,
            angle_between_posts_deg: ANGLE_BETWEEN_POSTS_DEG,
            bar_radius: BAR_RADIUS,
        }
    }
}

impl GoalDimensions {
    pub(super) fn angle_rad(&self) -> f32 {
        degrees_to_radians(self.angle_between_posts_deg)
    }

    pub(super) fn front_post_length(&self) -> f32 {
        self.crossbar_length / 3.0
    }

    pub(super) fn goal_depth(&self) -> f32 {
        self.front_post_length() * self.angle_rad().tan()
    }

    pub(super) fn back_post_length(&self) -> f32 {
        self.front_post_length() / self.angle_rad().cos()
    }

    pub(super) fn half_width(&self) -> f32 {
        self.crossbar_length / 2.0
    }

    pub(super) fn ball_distance(&self) -> f32 {
        self.front_post_length() * 0.8
    }

    pub(super) fn ball_radius(&self) -> f32 {
        self.front_post_length() / 16.0
    }
}

/// Accumulates world-space matrix operations in call order.
///
/// `then(m)` pre-multiplies, so `Placement::new().then(a).then(b)` yields
/// `b * a`: the object is first moved by `a`, then by `b`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Placement(Mat4);

impl Placement {
    pub(super) fn new() -> Self {
        Self(Mat4::IDENTITY)
    }

    pub(super) fn then(self, step: Mat4) -> Self {
        Self(step * self.0)
    }

    pub(super) fn translate(self, x: f32, y: f32, z: f32) -> Self {
        self.then(Mat4::from_translation(bevy::math::Vec3::new(x, y, z)))
    }

    pub(super) fn rotate_x(self, radians: f32) -> Self {
        self.then(Mat4::from_rotation_x(radians))
    }

    pub(super) fn rotate_y(self, radians: f32) -> Self {
        self.then(Mat4::from_rotation_y(radians))
    }

    pub(super) fn rotate_z(self, radians: f32) -> Self {
        self.then(Mat4::from_rotation_z(radians))
    }

    pub(super) fn matrix(&self) -> Mat4 {
        self.0
    }

    pub(super) fn to_transform(self) -> Transform {
        Transform::from_matrix(self.matrix())
    }
}
