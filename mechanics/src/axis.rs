use serde::{Deserialize, Serialize};

use crate::math::Vec3f;
use crate::ConfigError;

/// Inclusive travel range along one local axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f32,
    pub max: f32,
}

impl AxisLimits {
    pub fn new(min: f32, max: f32) -> Result<Self, ConfigError> {
        let limits = Self { min, max };
        limits.validate("axis")?;
        Ok(limits)
    }

    pub(crate) fn validate(&self, axis: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidLimits { axis, min: self.min, max: self.max });
        }
        Ok(())
    }

    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Local direction a mover travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalAxis {
    X,
    Y,
    Z,
}

impl LocalAxis {
    #[inline]
    pub fn get(self, v: Vec3f) -> f32 {
        match self {
            LocalAxis::X => v.x,
            LocalAxis::Y => v.y,
            LocalAxis::Z => v.z,
        }
    }

    /// Returns `v` with only this axis' component replaced.
    #[inline]
    pub fn with(self, mut v: Vec3f, value: f32) -> Vec3f {
        match self {
            LocalAxis::X => v.x = value,
            LocalAxis::Y => v.y = value,
            LocalAxis::Z => v.z = value,
        }
        v
    }
}

/// One clamped, speed-limited degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    pub position: f32,
    pub limits: AxisLimits,
    pub speed: f32,
}

impl AxisState {
    /// Starting positions outside the limits are pulled in immediately.
    pub fn new(position: f32, limits: AxisLimits, speed: f32) -> Self {
        Self { position: limits.clamp(position), limits, speed }
    }

    /// Move by `input * speed * dt`, then clamp. Returns the applied delta.
    pub fn integrate(&mut self, input: f32, dt: f32) -> f32 {
        let before = self.position;
        self.position += input * self.speed * dt;
        self.clamp();
        self.position - before
    }

    #[inline]
    pub fn clamp(&mut self) {
        self.position = self.limits.clamp(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_after_integration() {
        let mut a = AxisState::new(0.0, AxisLimits { min: -1.0, max: 1.0 }, 2.0);
        let d = a.integrate(1.0, 1.0);
        assert_eq!(a.position, 1.0);
        assert_eq!(d, 1.0);
        a.integrate(-1.0, 0.25);
        assert!((a.position - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rejects_inverted_limits() {
        assert!(AxisLimits::new(2.0, 1.0).is_err());
        assert!(AxisLimits::new(f32::NAN, 1.0).is_err());
        assert!(AxisLimits::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn local_axis_replaces_single_component() {
        let v = LocalAxis::Y.with(Vec3f::new(1.0, 2.0, 3.0), 9.0);
        assert_eq!(v, Vec3f::new(1.0, 9.0, 3.0));
        assert_eq!(LocalAxis::Z.get(v), 3.0);
    }
}
