use serde::{Deserialize, Serialize};

use crate::math::Vec3f;
use crate::ConfigError;

pub const MIN_SEGMENTS: usize = 3;
pub const MAX_SEGMENTS: usize = 20;

/// Shape of the decorative sagging cable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CableSpec {
    /// Number of sample points, including both endpoints.
    pub segments: usize,
    /// Downward offset of the two inner control points.
    pub sag: f32,
}

impl Default for CableSpec {
    fn default() -> Self {
        Self { segments: 10, sag: 0.5 }
    }
}

impl CableSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segments) {
            return Err(ConfigError::SegmentCount(self.segments));
        }
        if !self.sag.is_finite() {
            return Err(ConfigError::InvalidSag(self.sag));
        }
        Ok(())
    }
}

/// Point at `t` on the cubic Bézier through `p0..p3`.
pub fn cubic_bezier(t: f32, p0: Vec3f, p1: Vec3f, p2: Vec3f, p3: Vec3f) -> Vec3f {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
}

/// Samples the cable between two world positions. The result is a pure
/// function of the endpoints; nothing carries over between frames.
pub fn sample_cable(start: Vec3f, end: Vec3f, spec: &CableSpec) -> Vec<Vec3f> {
    let mut out = Vec::with_capacity(spec.segments);
    sample_cable_into(start, end, spec, &mut out);
    out
}

/// Like [`sample_cable`] but reuses `out`.
pub fn sample_cable_into(start: Vec3f, end: Vec3f, spec: &CableSpec, out: &mut Vec<Vec3f>) {
    out.clear();
    let n = spec.segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
    let c1 = start + Vec3f::NEG_Y * spec.sag;
    let c2 = end + Vec3f::NEG_Y * spec.sag;
    let last = (n - 1) as f32;
    out.extend((0..n).map(|i| cubic_bezier(i as f32 / last, start, c1, c2, end)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_sags_by_three_quarters() {
        let p = cubic_bezier(0.5, Vec3f::ZERO, Vec3f::NEG_Y, Vec3f::new(4.0, -1.0, 0.0), Vec3f::new(4.0, 0.0, 0.0));
        assert!((p.x - 2.0).abs() < 1e-6);
        assert!((p.y + 0.75).abs() < 1e-6);
    }

    #[test]
    fn segment_bounds_are_validated() {
        assert!(CableSpec { segments: 2, sag: 0.5 }.validate().is_err());
        assert!(CableSpec { segments: 21, sag: 0.5 }.validate().is_err());
        assert!(CableSpec { segments: 3, sag: 0.0 }.validate().is_ok());
        assert!(CableSpec { segments: 10, sag: f32::INFINITY }.validate().is_err());
    }

    #[test]
    fn reuses_buffer() {
        let mut buf = vec![Vec3f::ONE; 32];
        sample_cable_into(Vec3f::ZERO, Vec3f::X, &CableSpec::default(), &mut buf);
        assert_eq!(buf.len(), 10);
    }
}
