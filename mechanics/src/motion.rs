use crate::axis::{AxisState, LocalAxis};
use crate::math::Vec3f;
use crate::spec::CraneSpec;
use crate::ConfigError;

/// Below this squared input magnitude the movers are left alone.
const INPUT_DEADZONE_SQ: f32 = 0.001;
/// Vertical input above which the reel counts as running.
const REEL_ACTIVE_THRESHOLD: f32 = 0.01;

/// Beam travels along its local Z, carriage along X, hook along Y.
pub const BEAM_AXIS: LocalAxis = LocalAxis::Z;
pub const CARRIAGE_AXIS: LocalAxis = LocalAxis::X;
pub const HOOK_AXIS: LocalAxis = LocalAxis::Y;

/// Positions of the three movers along their own local axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisPositions {
    pub beam: f32,
    pub carriage: f32,
    pub hook: f32,
}

/// Edge-triggered winch sound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelCue {
    Start,
    Stop,
}

/// Result of one integration tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionStep {
    pub positions: AxisPositions,
    /// Degrees to rotate the reel about its local X this tick, if it spins.
    pub reel_rotation_deg: Option<f32>,
    pub reel_cue: Option<ReelCue>,
}

/// Accumulates directional input and drives the beam, carriage and hook.
///
/// The accumulator is the running sum of every asserted signal: buttons add
/// their vector on press and the negation on release, so it settles back to
/// zero once every held button is let go.
#[derive(Debug, Clone)]
pub struct MotionController {
    beam: AxisState,
    carriage: AxisState,
    hook: AxisState,
    reel_rotation_speed: f32,
    input: Vec3f,
    reel_active: bool,
}

impl MotionController {
    pub fn new(spec: &CraneSpec, start: AxisPositions) -> Result<Self, ConfigError> {
        spec.validate()?;
        Ok(Self {
            beam: AxisState::new(start.beam, spec.z_limits, spec.speed_north_south),
            carriage: AxisState::new(start.carriage, spec.x_limits, spec.speed_east_west),
            hook: AxisState::new(start.hook, spec.y_limits, spec.speed_up_down),
            reel_rotation_speed: spec.reel_rotation_speed,
            input: Vec3f::ZERO,
            reel_active: false,
        })
    }

    /// Adds `direction` to this tick's input. Any vector is accepted.
    pub fn add_movement(&mut self, direction: Vec3f) {
        self.input += direction;
    }

    pub fn clear_input(&mut self) {
        self.input = Vec3f::ZERO;
    }

    pub fn input(&self) -> Vec3f {
        self.input
    }

    pub fn positions(&self) -> AxisPositions {
        AxisPositions {
            beam: self.beam.position,
            carriage: self.carriage.position,
            hook: self.hook.position,
        }
    }

    pub fn beam(&self) -> &AxisState {
        &self.beam
    }

    pub fn carriage(&self) -> &AxisState {
        &self.carriage
    }

    pub fn hook(&self) -> &AxisState {
        &self.hook
    }

    pub fn reel_active(&self) -> bool {
        self.reel_active
    }

    /// Integrate one tick. Must run after every `add_movement` for the tick.
    pub fn tick(&mut self, dt: f32) -> MotionStep {
        if dt <= 0.0 {
            return MotionStep { positions: self.positions(), ..Default::default() };
        }

        if self.input.length_squared() >= INPUT_DEADZONE_SQ {
            self.carriage.integrate(self.input.x, dt);
            self.hook.integrate(self.input.y, dt);
            self.beam.integrate(self.input.z, dt);
        }
        // Limits hold even when no input arrived this tick.
        self.beam.clamp();
        self.carriage.clamp();
        self.hook.clamp();

        let vertical = self.input.y;
        let active = vertical.abs() > REEL_ACTIVE_THRESHOLD;
        let reel_rotation_deg = active.then(|| -vertical * self.reel_rotation_speed * dt);
        let reel_cue = match (active, self.reel_active) {
            (true, false) => Some(ReelCue::Start),
            (false, true) => Some(ReelCue::Stop),
            _ => None,
        };
        self.reel_active = active;

        MotionStep { positions: self.positions(), reel_rotation_deg, reel_cue }
    }
}
