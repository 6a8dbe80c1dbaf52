use bevy::math::primitives::{Cuboid, Sphere};
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy)]
pub enum VisualShape {
    Cuboid(Vec3),
    Sphere(f32),
}

/// Mesh description for a logic entity; turned into a mesh and its own
/// material when rendering is enabled.
#[derive(Component, Debug, Clone, Copy)]
pub struct Visual {
    pub shape: VisualShape,
    pub color: Color,
}

impl Visual {
    pub fn new(shape: VisualShape, color: Color) -> Self {
        Self { shape, color }
    }
}

pub fn dress_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<(Entity, &Visual), Added<Visual>>,
) {
    for (entity, visual) in &q {
        let mesh = match visual.shape {
            VisualShape::Cuboid(size) => meshes.add(Mesh::from(Cuboid::new(size.x, size.y, size.z))),
            VisualShape::Sphere(radius) => meshes.add(Mesh::from(Sphere::new(radius))),
        };
        // Per-entity material so button tints and the LED can change independently.
        let material = materials.add(StandardMaterial {
            base_color: visual.color,
            perceptual_roughness: 0.8,
            metallic: 0.1,
            alpha_mode: if visual.color.alpha() < 1.0 { AlphaMode::Blend } else { AlphaMode::Opaque },
            ..Default::default()
        });
        commands.entity(entity).insert((Mesh3d(mesh), MeshMaterial3d(material)));
    }
}

pub fn setup_lighting_and_camera(mut commands: Commands) {
    commands.insert_resource(ClearColor(Color::srgb(0.55, 0.6, 0.65)));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..Default::default()
        },
        Transform::from_xyz(6.0, 14.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Bay Light"),
    ));

    // Operator's eye, framing the pendant and the analyzer on the bench.
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.25, 1.55, -0.6).looking_at(Vec3::new(0.25, 1.15, -2.0), Vec3::Y),
        Name::new("Operator Camera"),
    ));

    commands.spawn((
        Transform::default(),
        Visual::new(VisualShape::Cuboid(Vec3::new(24.0, 0.1, 24.0)), Color::srgb(0.35, 0.35, 0.33)),
        Name::new("Bay Floor"),
    ));
}
