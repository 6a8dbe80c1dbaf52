use bevy::prelude::*;

/// When set, integration and hold timers stop advancing. Input is still
/// collected so button signals stay balanced across a pause.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimPause(pub bool);

/// Frame time as seen by the simulation; zero while paused.
pub fn sim_dt(time: &Time, paused: &SimPause) -> f32 {
    if paused.0 {
        0.0
    } else {
        time.delta_secs()
    }
}
