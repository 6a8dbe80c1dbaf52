use bevy::prelude::*;

pub mod dressing;
pub mod setup;

pub use dressing::{Visual, VisualShape};

/// Spawns the training bay. With `dressing` set, meshes, lights and the
/// camera are added on top of the logic entities.
pub struct ScenePlugin {
    pub dressing: bool,
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup::spawn_training_bay);
        if self.dressing {
            app.add_systems(Startup, dressing::setup_lighting_and_camera)
                .add_systems(Update, dressing::dress_visuals);
        }
    }
}
