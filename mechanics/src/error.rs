use thiserror::Error;

/// Configuration problems detected when a component is constructed. Nothing
/// in this crate fails per tick; everything that can go wrong is caught here.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{axis} limits are invalid: min {min} > max {max} or not finite")]
    InvalidLimits { axis: &'static str, min: f32, max: f32 },
    #[error("{axis} speed must be finite and non-negative, got {speed}")]
    InvalidSpeed { axis: &'static str, speed: f32 },
    #[error("cable segment count {0} outside 3..=20")]
    SegmentCount(usize),
    #[error("cable sag must be finite, got {0}")]
    InvalidSag(f32),
    #[error("hold duration must be finite and non-negative, got {0}")]
    HoldDuration(f32),
    #[error("danger zone tag must not be empty")]
    EmptyZoneTag,
}
