use bevy::prelude::*;
use mechanics::motion::{BEAM_AXIS, CARRIAGE_AXIS, HOOK_AXIS};
use mechanics::{MotionController, MotionStep, ReelCue};

use crate::audio::SoundCue;
use crate::sim_pause::{sim_dt, SimPause};
use crate::FrameSet;

/// Direction contribution from a pendant button, addressed to one crane.
#[derive(Event, Debug, Clone, Copy)]
pub struct MovementSignal {
    pub crane: Entity,
    pub direction: Vec3,
}

/// Crane root. Owns the motion controller and the movers it drives.
#[derive(Component, Debug)]
pub struct CraneRig {
    pub controller: MotionController,
    pub beam: Entity,
    pub carriage: Entity,
    pub hook: Entity,
    /// Spinning drum on the carriage; purely visual.
    pub reel: Option<Entity>,
    /// Result of the most recent integration, consumed by the effects pass.
    pub last_step: MotionStep,
}

impl CraneRig {
    pub fn new(controller: MotionController, beam: Entity, carriage: Entity, hook: Entity) -> Self {
        let last_step = MotionStep { positions: controller.positions(), ..Default::default() };
        Self { controller, beam, carriage, hook, reel: None, last_step }
    }

    pub fn with_reel(mut self, reel: Entity) -> Self {
        self.reel = Some(reel);
        self
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraneMover {
    Beam,
    Carriage,
    Hook,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Reel;

pub struct CranePlugin;

impl Plugin for CranePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MovementSignal>()
            .add_event::<SoundCue>()
            .add_systems(PostStartup, validate_crane_rigs)
            .add_systems(Update, accumulate_movement.in_set(FrameSet::Input))
            .add_systems(Update, integrate_crane.in_set(FrameSet::Integrate))
            .add_systems(Update, (spin_reel, emit_reel_cues).in_set(FrameSet::Effects));
    }
}

/// Movers are required; a rig pointing at anything else is a scene error.
pub fn validate_crane_rigs(
    q_rig: Query<(Entity, &CraneRig)>,
    q_movers: Query<&CraneMover, With<Transform>>,
) {
    for (crane, rig) in &q_rig {
        for (entity, expected) in [
            (rig.beam, CraneMover::Beam),
            (rig.carriage, CraneMover::Carriage),
            (rig.hook, CraneMover::Hook),
        ] {
            if q_movers.get(entity).ok() != Some(&expected) {
                tracing::error!(?crane, ?entity, ?expected, "crane mover missing or mislabeled");
            }
        }
        if rig.reel.is_none() {
            tracing::debug!(?crane, "crane has no reel; reel animation disabled");
        }
    }
}

pub fn accumulate_movement(mut signals: EventReader<MovementSignal>, mut q_rig: Query<&mut CraneRig>) {
    for signal in signals.read() {
        let Ok(mut rig) = q_rig.get_mut(signal.crane) else {
            tracing::debug!(crane = ?signal.crane, "movement signal for unknown crane dropped");
            continue;
        };
        rig.controller.add_movement(signal.direction);
    }
}

pub fn integrate_crane(
    time: Res<Time>,
    paused: Res<SimPause>,
    mut q_rig: Query<&mut CraneRig>,
    mut q_movers: Query<&mut Transform, With<CraneMover>>,
) {
    let dt = sim_dt(&time, &paused);
    for mut rig in &mut q_rig {
        let step = rig.controller.tick(dt);
        rig.last_step = step;
        for (entity, axis, value) in [
            (rig.beam, BEAM_AXIS, step.positions.beam),
            (rig.carriage, CARRIAGE_AXIS, step.positions.carriage),
            (rig.hook, HOOK_AXIS, step.positions.hook),
        ] {
            if let Ok(mut transform) = q_movers.get_mut(entity) {
                transform.translation = axis.with(transform.translation, value);
            }
        }
    }
}

fn spin_reel(q_rig: Query<&CraneRig>, mut q_reel: Query<&mut Transform, With<Reel>>) {
    for rig in &q_rig {
        let (Some(reel), Some(deg)) = (rig.reel, rig.last_step.reel_rotation_deg) else {
            continue;
        };
        if let Ok(mut transform) = q_reel.get_mut(reel) {
            transform.rotate_local_x(deg.to_radians());
        }
    }
}

fn emit_reel_cues(q_rig: Query<(Entity, &CraneRig)>, mut cues: EventWriter<SoundCue>) {
    for (entity, rig) in &q_rig {
        match rig.last_step.reel_cue {
            Some(ReelCue::Start) => {
                cues.write(SoundCue::ReelStart { crane: entity });
            }
            Some(ReelCue::Stop) => {
                cues.write(SoundCue::ReelStop { crane: entity });
            }
            None => {}
        }
    }
}
