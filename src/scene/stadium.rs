use super::parts::{Paint, PartLayout, PartShape};
use bevy::prelude::*;

pub(super) const SEAT_SIZE: f32 = 0.5;
pub(super) const SEAT_SPACING: f32 = 0.6;
pub(super) const ROW_RISE: f32 = 0.7;
pub(super) const FAN_RADIUS: f32 = 0.2;
pub(super) const FAN_HEIGHT_ABOVE_SEAT: f32 = 0.4;
pub(super) const STANDS_Z: f32 = -5.0;
pub(super) const STADIUM_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -10.0);

fn seat_origin(row: u32, seat: u32, seats_per_row: u32) -> Vec3 {
    Vec3::new(
        seat as f32 * SEAT_SPACING - seats_per_row as f32 * SEAT_SPACING * 0.5,
        row as f32 * ROW_RISE,
        STANDS_Z,
    )
}

/// A seat with a fan sitting on it, for every seat in the row.
pub(super) fn row_layout(row: u32, seats_per_row: u32) -> Vec<PartLayout> {
    let mut parts = Vec::with_capacity(seats_per_row as usize * 2);
    for seat in 0..seats_per_row {
        let origin = seat_origin(row, seat, seats_per_row);
        parts.push(PartLayout::new(
            "seat",
            PartShape::Cuboid { size: SEAT_SIZE },
            Paint::Seat,
            Transform::from_translation(origin),
        ));
        parts.push(PartLayout::new(
            "fan",
            PartShape::Sphere { radius: FAN_RADIUS },
            Paint::Skin,
            Transform::from_translation(origin + Vec3::Y * FAN_HEIGHT_ABOVE_SEAT),
        ));
    }
    parts
}

pub(super) fn stadium_layout(rows: u32, seats_per_row: u32) -> Vec<Vec<PartLayout>> {
    (0..rows)
        .map(|row| row_layout(row, seats_per_row))
        .collect()
}
