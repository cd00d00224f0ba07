use super::geometry::{GoalDimensions, Placement, degrees_to_radians};
use super::parts::{Paint, PartLayout, PartShape};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
}

impl Side {
    pub(super) const BOTH: [Side; 2] = [Side::Right, Side::Left];

    pub(super) fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

fn bar(dims: &GoalDimensions, length: f32) -> PartShape {
    PartShape::Cylinder {
        radius: dims.bar_radius,
        height: length,
    }
}

fn ring(dims: &GoalDimensions) -> PartShape {
    PartShape::Torus {
        major_radius: dims.bar_radius,
        minor_radius: dims.bar_radius,
    }
}

fn crossbar(dims: &GoalDimensions) -> PartLayout {
    let placement = Placement::new()
        .rotate_z(degrees_to_radians(90.0))
        .translate(0.0, dims.front_post_length() / 2.0, 0.0);
    PartLayout::new(
        "crossbar",
        bar(dims, dims.crossbar_length),
        Paint::GoalFrame,
        placement.to_transform(),
    )
}

fn side_post_placement(dims: &GoalDimensions, side: Side) -> Placement {
    Placement::new().translate(side.sign() * dims.half_width(), 0.0, 0.0)
}

fn side_post(dims: &GoalDimensions, side: Side) -> PartLayout {
    PartLayout::new(
        "side post",
        bar(dims, dims.front_post_length()),
        Paint::GoalFrame,
        side_post_placement(dims, side).to_transform(),
    )
}

fn back_post(dims: &GoalDimensions, side: Side) -> PartLayout {
    let placement = side_post_placement(dims, side)
        .rotate_x(dims.angle_rad())
        .translate(0.0, 0.0, -dims.goal_depth() / 2.0);
    PartLayout::new(
        "back post",
        bar(dims, dims.back_post_length()),
        Paint::GoalFrame,
        placement.to_transform(),
    )
}

fn front_ring_placement(dims: &GoalDimensions, side: Side) -> Placement {
    Placement::new().translate(
        side.sign() * dims.half_width(),
        -dims.front_post_length() / 2.0,
        0.0,
    )
}

fn front_ring(dims: &GoalDimensions, side: Side) -> PartLayout {
    PartLayout::new(
        "front ring",
        ring(dims),
        Paint::GoalFrame,
        front_ring_placement(dims, side).to_transform(),
    )
}

fn back_ring(dims: &GoalDimensions, side: Side) -> PartLayout {
    let placement = front_ring_placement(dims, side).translate(0.0, 0.0, -dims.goal_depth());
    PartLayout::new(
        "back ring",
        ring(dims),
        Paint::GoalFrame,
        placement.to_transform(),
    )
}

fn back_net(dims: &GoalDimensions) -> PartLayout {
    let placement = Placement::new()
        .rotate_x(dims.angle_rad())
        .translate(0.0, 0.0, -dims.goal_depth() / 2.0);
    PartLayout::new(
        "back net",
        PartShape::Plane {
            width: dims.crossbar_length,
            height: dims.back_post_length(),
        },
        Paint::Net,
        placement.to_transform(),
    )
}

fn side_net(dims: &GoalDimensions, side: Side) -> PartLayout {
    let placement = Placement::new().rotate_y(degrees_to_radians(90.0)).translate(
        side.sign() * dims.half_width(),
        -dims.front_post_length() / 2.0,
        0.0,
    );
    PartLayout::new(
        "side net",
        PartShape::Triangle {
            a: Vec3::ZERO,
            b: Vec3::new(0.0, dims.front_post_length(), 0.0),
            c: Vec3::new(dims.goal_depth(), 0.0, 0.0),
        },
        Paint::Net,
        placement.to_transform(),
    )
}

/// Frame, rings and net of the goal, relative to the goal root.
pub(super) fn goal_layout(dims: &GoalDimensions) -> Vec<PartLayout> {
    let mut parts = vec![crossbar(dims)];
    parts.extend(Side::BOTH.map(|side| side_post(dims, side)));
    parts.extend(Side::BOTH.map(|side| back_post(dims, side)));
    parts.extend(Side::BOTH.map(|side| front_ring(dims, side)));
    parts.extend(Side::BOTH.map(|side| back_ring(dims, side)));
    parts.push(back_net(dims));
    parts.extend(Side::BOTH.map(|side| side_net(dims, side)));
    parts
}

#[cfg(test)]
mod tests {
    use super::super::geometry::test_support::assert_vec3_near;
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn cylinder_ends(part: &PartLayout) -> (Vec3, Vec3) {
        let PartShape::Cylinder { height, .. } = part.shape else {
            panic!("{} is not a cylinder", part.label);
        };
        (
            part.transform.transform_point(Vec3::Y * height / 2.0),
            part.transform.transform_point(-Vec3::Y * height / 2.0),
        )
    }

    #[test]
    fn goal_has_every_part_once_per_side() {
        let labels = goal_layout(&GoalDimensions::default())
            .iter()
            .map(|part| part.label)
            .collect::<Vec<_>>();

        assert_eq!(
            labels,
            vec![
                "crossbar",
                "side post",
                "side post",
                "back post",
                "back post",
                "front ring",
                "front ring",
                "back ring",
                "back ring",
                "back net",
                "side net",
                "side net",
            ]
        );
    }

    #[test]
    fn crossbar_spans_the_goal_mouth_at_post_height() {
        let dims = GoalDimensions::default();
        let (a, b) = cylinder_ends(&crossbar(&dims));

        assert_vec3_near(a.max(b), Vec3::new(3.0, 1.0, 0.0));
        assert_vec3_near(a.min(b), Vec3::new(-3.0, 1.0, 0.0));
    }

    #[rstest]
    #[case(Side::Right)]
    #[case(Side::Left)]
    fn back_post_meets_crossbar_end_and_back_ring(#[case] side: Side) {
        let dims = GoalDimensions::default();
        let (top, bottom) = cylinder_ends(&back_post(&dims, side));
        let x = side.sign() * 3.0;

        assert_vec3_near(top, Vec3::new(x, 1.0, 0.0));
        assert_vec3_near(bottom, Vec3::new(x, -1.0, -dims.goal_depth()));
        assert_vec3_near(back_ring(&dims, side).transform.translation, bottom);
    }

    #[rstest]
    #[case(Side::Right)]
    #[case(Side::Left)]
    fn front_ring_sits_under_side_post(#[case] side: Side) {
        let dims = GoalDimensions::default();
        let (_, post_bottom) = cylinder_ends(&side_post(&dims, side));
        let ring = front_ring(&dims, side);

        assert_vec3_near(ring.transform.translation, post_bottom);
        assert!(ring.transform.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[rstest]
    #[case(Side::Right)]
    #[case(Side::Left)]
    fn side_net_fills_the_triangle_between_posts(#[case] side: Side) {
        let dims = GoalDimensions::default();
        let net = side_net(&dims, side);
        let PartShape::Triangle { a, b, c } = net.shape else {
            panic!("side net should be a triangle");
        };
        let x = side.sign() * 3.0;

        assert_vec3_near(net.transform.transform_point(a), Vec3::new(x, -1.0, 0.0));
        assert_vec3_near(net.transform.transform_point(b), Vec3::new(x, 1.0, 0.0));
        assert_vec3_near(
            net.transform.transform_point(c),
            Vec3::new(x, -1.0, -dims.goal_depth()),
        );
    }

    #[test]
    fn back_net_leans_between_crossbar_and_back_rings() {
        let dims = GoalDimensions::default();
        let net = back_net(&dims);
        let PartShape::Plane { width, height } = net.shape else {
            panic!("back net should be a plane");
        };

        assert_relative_eq!(width, 6.0);
        assert_relative_eq!(height, dims.back_post_length());
        assert_vec3_near(
            net.transform.transform_point(Vec3::new(0.0, height / 2.0, 0.0)),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_vec3_near(
            net.transform.transform_point(Vec3::new(0.0, -height / 2.0, 0.0)),
            Vec3::new(0.0, -1.0, -dims.goal_depth()),
        );
    }

    #[test]
    fn wider_goal_moves_posts_outward() {
        let dims = GoalDimensions {
            crossbar_length: 9.0,
            ..GoalDimensions::default()
        };

        assert_vec3_near(
            side_post(&dims, Side::Left).transform.translation,
            Vec3::new(-4.5, 0.0, 0.0),
        );
        assert_relative_eq!(dims.front_post_length(), 3.0);
    }
}
