use serde::{Deserialize, Serialize};

// Vec3f is the same type as Bevy's Vec3 (re-exported from bevy_math).
pub use bevy_math::Vec3 as Vec3f;

/// Linear RGBA color in [0,1], kept separate from Bevy's `Color` so configs
/// and tests stay engine-free.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 0.92, 0.016);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const GREY: Self = Self::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Componentwise lerp; `t` is clamped to [0,1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_clamps_progress() {
        let c = Rgba::rgb(0.0, 0.0, 0.0).lerp(Rgba::WHITE, 2.0);
        assert_eq!(c, Rgba::WHITE);
        let half = Rgba::rgb(0.0, 0.0, 0.0).lerp(Rgba::rgb(1.0, 0.5, 0.0), 0.5);
        assert!((half.r - 0.5).abs() < 1e-6);
        assert!((half.g - 0.25).abs() < 1e-6);
    }
}
