use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use std::collections::HashMap;

/// Columns of the net plane. The net is split along its width only.
pub(super) const NET_COLUMNS: u32 = 32;

/// Primitive a scene part is built from. Dimensions follow the Bevy primitive
/// conventions: cylinders stand along Y, toruses lie in the XZ plane, planes
/// face +Z and triangles are given in local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum PartShape {
    Cylinder { radius: f32, height: f32 },
    Torus { major_radius: f32, minor_radius: f32 },
    Sphere { radius: f32 },
    Cuboid { size: f32 },
    Plane { width: f32, height: f32 },
    Triangle { a: Vec3, b: Vec3, c: Vec3 },
}

impl PartShape {
    fn build_mesh(self) -> Mesh {
        match self {
            Self::Cylinder { radius, height } => {
                Cylinder::new(radius, height).mesh().resolution(32).into()
            }
            Self::Torus {
                major_radius,
                minor_radius,
            } => Torus {
                minor_radius,
                major_radius,
            }
            .mesh()
            .minor_resolution(16)
            .major_resolution(100)
            .into(),
            Self::Sphere { radius } => Sphere::new(radius).mesh().uv(32, 32).into(),
            Self::Cuboid { size } => Cuboid::new(size, size, size).mesh().into(),
            Self::Plane { width, height } => plane_strip_mesh(width, height, NET_COLUMNS),
            Self::Triangle { a, b, c } => Triangle3d::new(a, b, c).mesh().into(),
        }
    }
}

/// Plane facing +Z, centred on the origin, cut into `columns` vertical strips.
fn plane_strip_mesh(width: f32, height: f32, columns: u32) -> Mesh {
    let columns = columns.max(1);
    let vertex_count = (columns as usize + 1) * 2;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for column in 0..=columns {
        let u = column as f32 / columns as f32;
        let x = (u - 0.5) * width;
        for (y, v) in [(-0.5 * height, 1.0), (0.5 * height, 0.0)] {
            positions.push([x, y, 0.0]);
            normals.push([0.0, 0.0, 1.0]);
            uvs.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity(columns as usize * 6);
    for column in 0..columns {
        let bottom_left = column * 2;
        let top_left = bottom_left + 1;
        let bottom_right = bottom_left + 2;
        let top_right = bottom_left + 3;
        indices.extend_from_slice(&[
            bottom_left,
            bottom_right,
            top_right,
            bottom_left,
            top_right,
            top_left,
        ]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum Paint {
    GoalFrame,
    Net,
    Ball,
    Seat,
    Skin,
    Kit,
    TrophyBase,
    Gold,
}

impl Paint {
    pub(super) const ALL: [Paint; 8] = [
        Paint::GoalFrame,
        Paint::Net,
        Paint::Ball,
        Paint::Seat,
        Paint::Skin,
        Paint::Kit,
        Paint::TrophyBase,
        Paint::Gold,
    ];

    pub(super) fn color(self) -> Color {
        match self {
            Self::GoalFrame | Self::Seat | Self::Kit => Color::srgb_u8(0xff, 0xff, 0xff),
            Self::Net => Color::srgb_u8(0xd3, 0xd3, 0xd3),
            Self::Ball => Color::BLACK,
            Self::Skin => Color::srgb_u8(0xff, 0xe0, 0xbd),
            Self::TrophyBase => Color::srgb_u8(0x8b, 0x45, 0x13),
            Self::Gold => Color::srgb_u8(0xff, 0xd7, 0x00),
        }
    }

    fn double_sided(self) -> bool {
        matches!(self, Self::GoalFrame | Self::Net | Self::Ball)
    }
}

/// One leaf mesh of a group, positioned relative to the group root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PartLayout {
    pub(super) label: &'static str,
    pub(super) shape: PartShape,
    pub(super) paint: Paint,
    pub(super) transform: Transform,
}

impl PartLayout {
    pub(super) fn new(
        label: &'static str,
        shape: PartShape,
        paint: Paint,
        transform: Transform,
    ) -> Self {
        Self {
            label,
            shape,
            paint,
            transform,
        }
    }
}

/// Shared material per paint. All scene materials are unlit flat colours.
pub(super) struct Palette {
    materials: HashMap<Paint, Handle<StandardMaterial>>,
}

impl Palette {
    pub(super) fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        let materials = Paint::ALL
            .into_iter()
            .map(|paint| {
                let handle = materials.add(StandardMaterial {
                    base_color: paint.color(),
                    unlit: true,
                    double_sided: paint.double_sided(),
                    cull_mode: if paint.double_sided() {
                        None
                    } else {
                        Some(Face::Back)
                    },
                    ..default()
                });
                (paint, handle)
            })
            .collect();
        Self { materials }
    }

    pub(super) fn get(&self, paint: Paint) -> Handle<StandardMaterial> {
        self.materials[&paint].clone()
    }
}

/// Reuses one mesh asset per distinct shape so repeated parts (stadium seats,
/// posts, rings) share GPU buffers.
#[derive(Default)]
pub(super) struct MeshCache {
    entries: Vec<(PartShape, Handle<Mesh>)>,
}

impl MeshCache {
    pub(super) fn get_or_add(
        &mut self,
        shape: PartShape,
        meshes: &mut Assets<Mesh>,
    ) -> Handle<Mesh> {
        if let Some((_, handle)) = self.entries.iter().find(|(known, _)| *known == shape) {
            return handle.clone();
        }

        let handle = meshes.add(shape.build_mesh());
        self.entries.push((shape, handle.clone()));
        handle
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Everything a spawn function needs to turn layouts into entities.
pub(super) struct PartAssets<'a> {
    pub(super) meshes: &'a mut Assets<Mesh>,
    pub(super) cache: MeshCache,
    pub(super) palette: Palette,
}

impl PartAssets<'_> {
    pub(super) fn bundle(&mut self, part: &PartLayout) -> impl Bundle + use<> {
        (
            Name::new(part.label),
            Mesh3d(self.cache.get_or_add(part.shape, self.meshes)),
            MeshMaterial3d(self.palette.get(part.paint)),
            part.transform,
        )
    }
}

/// Spawns `root` with every part as a direct child and returns the root.
pub(super) fn spawn_group(
    commands: &mut Commands,
    assets: &mut PartAssets<'_>,
    root: impl Bundle,
    parts: &[PartLayout],
) -> Entity {
    commands
        .spawn((root, Visibility::default()))
        .with_children(|group| {
            for part in parts {
                group.spawn(assets.bundle(part));
            }
        })
        .id()
}
