use bevy::prelude::{Color, Resource};
use serde::{Deserialize, Serialize};

pub(super) const MAX_STADIUM_ROWS: u32 = 100;
pub(super) const MAX_SEATS_PER_ROW: u32 = 500;

/// ForestGreen.
pub(super) const DEFAULT_BACKGROUND: (u8, u8, u8) = (34, 139, 34);

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct SceneSettings {
    pub(super) window_title: String,
    pub(super) resolution_width: u32,
    pub(super) resolution_height: u32,
    pub(super) vsync: bool,
    pub(super) background_rgb: (u8, u8, u8),
    pub(super) camera_fov_deg: f32,
    pub(super) camera_distance: f32,
    pub(super) initial_animation_speed: f32,
    pub(super) speed_step: f32,
    pub(super) shrink_factor: f32,
    pub(super) stadium_rows: u32,
    pub(super) seats_per_row: u32,
    pub(super) show_hud: bool,
    pub(super) log_frame_diagnostics: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            window_title: "Goal Scene".to_string(),
            resolution_width: 1600,
            resolution_height: 900,
            vsync: true,
            background_rgb: DEFAULT_BACKGROUND,
            camera_fov_deg: 75.0,
            camera_distance: 5.0,
            initial_animation_speed: 2.0,
            speed_step: 1.1,
            shrink_factor: 0.95,
            stadium_rows: 10,
            seats_per_row: 70,
            show_hud: true,
            log_frame_diagnostics: false,
        }
    }
}

impl SceneSettings {
    pub(super) fn background_color(&self) -> Color {
        let (r, g, b) = self.background_rgb;
        Color::srgb_u8(r, g, b)
    }

    /// Replaces values that would break the scene with their defaults.
    /// Returns the names of the fields that were reset.
    pub(super) fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut reset = Vec::new();

        if !(self.speed_step.is_finite() && self.speed_step > 1.0) {
            self.speed_step = defaults.speed_step;
            reset.push("speed_step");
        }
        if !(self.shrink_factor.is_finite() && self.shrink_factor > 0.0 && self.shrink_factor < 1.0)
        {
            self.shrink_factor = defaults.shrink_factor;
            reset.push("shrink_factor");
        }
        if !(self.initial_animation_speed.is_finite() && self.initial_animation_speed > 0.0) {
            self.initial_animation_speed = defaults.initial_animation_speed;
            reset.push("initial_animation_speed");
        }
        if !(1.0..=170.0).contains(&self.camera_fov_deg) {
            self.camera_fov_deg = defaults.camera_fov_deg;
            reset.push("camera_fov_deg");
        }
        if !(self.camera_distance.is_finite() && self.camera_distance > 0.0) {
            self.camera_distance = defaults.camera_distance;
            reset.push("camera_distance");
        }
        if self.resolution_width == 0 || self.resolution_height == 0 {
            self.resolution_width = defaults.resolution_width;
            self.resolution_height = defaults.resolution_height;
            reset.push("resolution");
        }
        if self.stadium_rows > MAX_STADIUM_ROWS {
            self.stadium_rows = defaults.stadium_rows;
            reset.push("stadium_rows");
        }
        if self.seats_per_row > MAX_SEATS_PER_ROW {
            self.seats_per_row = defaults.seats_per_row;
            reset.push("seats_per_row");
        }

        reset
    }
}
