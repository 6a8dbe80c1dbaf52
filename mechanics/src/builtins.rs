use crate::motion::AxisPositions;
use crate::Vec3f;

/// One control on the crane's hand pendant.
#[derive(Debug, Clone)]
pub struct PendantButtonSpec {
    pub label: &'static str,
    pub direction: Vec3f,
    /// Position on the pendant face (pendant-local).
    pub offset: Vec3f,
}

/// Static layout of the training bay.
#[derive(Debug, Clone)]
pub struct BayLayout {
    /// World position of the runway the beam hangs from.
    pub crane_root: Vec3f,
    pub crane_start: AxisPositions,
    pub pendant_pos: Vec3f,
    pub pendant: Vec<PendantButtonSpec>,
    pub danger_zones: Vec<Vec3f>,
    pub analyzer_pos: Vec3f,
    /// Probe position relative to the analyzer body.
    pub probe_offset: Vec3f,
}

pub fn pendant_buttons() -> Vec<PendantButtonSpec> {
    let row = |i: usize| 0.06 - 0.04 * i as f32;
    vec![
        PendantButtonSpec { label: "North", direction: Vec3f::Z, offset: Vec3f::new(-0.025, row(0), 0.0) },
        PendantButtonSpec { label: "South", direction: Vec3f::NEG_Z, offset: Vec3f::new(0.025, row(0), 0.0) },
        PendantButtonSpec { label: "East", direction: Vec3f::X, offset: Vec3f::new(-0.025, row(1), 0.0) },
        PendantButtonSpec { label: "West", direction: Vec3f::NEG_X, offset: Vec3f::new(0.025, row(1), 0.0) },
        PendantButtonSpec { label: "Up", direction: Vec3f::Y, offset: Vec3f::new(-0.025, row(2), 0.0) },
        PendantButtonSpec { label: "Down", direction: Vec3f::NEG_Y, offset: Vec3f::new(0.025, row(2), 0.0) },
    ]
}

// Mirrors the workshop bay used in the training scene.
pub fn training_bay() -> BayLayout {
    let runway_height = 8.0;
    BayLayout {
        crane_root: Vec3f::new(0.0, runway_height, 0.0),
        crane_start: AxisPositions { beam: 0.0, carriage: 0.0, hook: -2.0 },
        pendant_pos: Vec3f::new(1.5, 1.2, -2.0),
        pendant: pendant_buttons(),
        danger_zones: vec![Vec3f::new(-4.0, 0.5, 6.0), Vec3f::new(3.0, 0.2, -7.5)],
        analyzer_pos: Vec3f::new(-1.0, 1.1, -2.0),
        probe_offset: Vec3f::new(0.0, -0.4, 0.3),
    }
}
