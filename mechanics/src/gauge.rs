use crate::math::Vec3f;

/// Maps the distance to the nearest hazard onto a meter fill in [0,1].
///
/// Under 1 unit reads full scale, from 1 to 10 it steps down by a tenth per
/// whole unit, and 10 or more reads zero.
pub fn concentration_for_distance(distance: f32) -> f32 {
    if distance < 1.0 {
        1.0
    } else if distance < 10.0 {
        (10.0 - distance.floor()) / 10.0
    } else {
        0.0
    }
}

pub fn nearest_distance(probe: Vec3f, zones: &[Vec3f]) -> Option<f32> {
    zones
        .iter()
        .map(|z| probe.distance(*z))
        .min_by(|a, b| a.total_cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GaugeReadout {
    NoZones,
    Reading { distance: f32, fill: f32 },
}

impl GaugeReadout {
    pub fn fill(&self) -> f32 {
        match self {
            GaugeReadout::NoZones => 0.0,
            GaugeReadout::Reading { fill, .. } => *fill,
        }
    }

    pub fn display_text(&self) -> String {
        match self {
            GaugeReadout::NoZones => "NO ZONES".to_string(),
            GaugeReadout::Reading { distance, .. } => format!("{distance:.1}"),
        }
    }
}

pub fn read_gauge(probe: Vec3f, zones: &[Vec3f]) -> GaugeReadout {
    match nearest_distance(probe, zones) {
        None => GaugeReadout::NoZones,
        Some(distance) => GaugeReadout::Reading {
            distance,
            fill: concentration_for_distance(distance),
        },
    }
}
