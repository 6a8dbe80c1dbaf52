use serde::{Deserialize, Serialize};

use crate::axis::AxisLimits;
use crate::math::Rgba;
use crate::ConfigError;

/// Tuning for the overhead crane: per-axis speeds and local-space travel limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CraneSpec {
    /// Beam travel along the bay (local Z), units/s.
    pub speed_north_south: f32,
    /// Carriage travel across the bay (local X), units/s.
    pub speed_east_west: f32,
    /// Hook travel (local Y), units/s.
    pub speed_up_down: f32,
    /// Reel spin in degrees per second per unit of vertical input.
    pub reel_rotation_speed: f32,
    pub z_limits: AxisLimits,
    pub x_limits: AxisLimits,
    pub y_limits: AxisLimits,
}

impl Default for CraneSpec {
    fn default() -> Self {
        Self {
            speed_north_south: 2.0,
            speed_east_west: 3.0,
            speed_up_down: 1.0,
            reel_rotation_speed: 100.0,
            z_limits: AxisLimits { min: -9.5, max: 8.5 },
            x_limits: AxisLimits { min: -5.1, max: 3.3 },
            y_limits: AxisLimits { min: -6.1, max: -0.35 },
        }
    }
}

impl CraneSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.z_limits.validate("north-south")?;
        self.x_limits.validate("east-west")?;
        self.y_limits.validate("up-down")?;
        for (axis, speed) in [
            ("north-south", self.speed_north_south),
            ("east-west", self.speed_east_west),
            ("up-down", self.speed_up_down),
            ("reel", self.reel_rotation_speed),
        ] {
            if !speed.is_finite() || speed < 0.0 {
                return Err(ConfigError::InvalidSpeed { axis, speed });
            }
        }
        Ok(())
    }
}

/// Colors and travel for the pendant buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonPalette {
    pub normal: Rgba,
    pub hover: Rgba,
    pub pressed: Rgba,
    /// How far the cap sinks along its local −Z when pressed.
    pub pressed_depth: f32,
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self {
            normal: Rgba::WHITE,
            hover: Rgba::YELLOW,
            pressed: Rgba::GREEN,
            pressed_depth: 0.002,
        }
    }
}

/// Gas analyzer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSpec {
    /// Seconds the trigger must be held to flip power.
    pub hold_duration: f32,
    /// Tag identifying hazard-zone objects in the scene.
    pub danger_zone_tag: String,
    /// Indicator color when powered and at full hold progress.
    pub progress_color: Rgba,
    /// Indicator color when powered off.
    pub idle_color: Rgba,
    /// Power button travel along local −Z while the trigger is held.
    pub button_depth: f32,
}

impl Default for AnalyzerSpec {
    fn default() -> Self {
        Self {
            hold_duration: 3.0,
            danger_zone_tag: "DangerZone".to_string(),
            progress_color: Rgba::GREEN,
            idle_color: Rgba::GREY,
            button_depth: 0.005,
        }
    }
}

impl AnalyzerSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hold_duration.is_finite() || self.hold_duration < 0.0 {
            return Err(ConfigError::HoldDuration(self.hold_duration));
        }
        if self.danger_zone_tag.trim().is_empty() {
            return Err(ConfigError::EmptyZoneTag);
        }
        Ok(())
    }
}
