//! Engine-free mechanics for the crane and gas analyzer trainer.
//!
//! This crate intentionally avoids any Bevy app types. It only borrows the
//! vector types from `bevy_math` so the host can hand positions across without
//! conversion. Everything here is plain per-tick arithmetic driven by an
//! external scheduler.

mod math;
pub use math::{Rgba, Vec3f};

mod error;
pub use error::ConfigError;

mod spec;
pub use spec::{AnalyzerSpec, ButtonPalette, CraneSpec};

pub mod axis;
pub use axis::{AxisLimits, AxisState, LocalAxis};

pub mod motion;
pub use motion::{AxisPositions, MotionController, MotionStep, ReelCue};

pub mod button;
pub use button::{ButtonLook, ButtonSignal, ButtonState, ButtonTint, RemoteButton, SignalKind};

pub mod pointer;
pub use pointer::{HoverArbiter, PointerAction, PointerFrame};

pub mod cable;
pub use cable::{cubic_bezier, sample_cable, CableSpec};

pub mod gauge;
pub use gauge::{concentration_for_distance, nearest_distance, read_gauge, GaugeReadout};

pub mod power;
pub use power::{HoldProgress, HoldToggle};

pub mod analyzer;
pub use analyzer::{GasAnalyzer, Hand};

pub mod builtins;
