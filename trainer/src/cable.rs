use bevy::prelude::*;
use bevy::transform::TransformSystem;
use mechanics::cable::sample_cable_into;
use mechanics::CableSpec;

/// Decorative sagging cable between two entities.
#[derive(Component, Debug, Clone)]
pub struct Cable {
    pub start: Option<Entity>,
    pub end: Option<Entity>,
    pub spec: CableSpec,
    pub color: Color,
}

/// Latest sampled curve; empty when the cable is hidden.
#[derive(Component, Debug, Clone, Default, Deref, DerefMut)]
pub struct CablePath(pub Vec<Vec3>);

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CableSet;

pub struct CablePlugin;

impl Plugin for CablePlugin {
    fn build(&self, app: &mut App) {
        // Sample after propagation so the curve follows this frame's motion.
        app.configure_sets(PostUpdate, CableSet.after(TransformSystem::TransformPropagate))
            .add_systems(PostUpdate, sample_cables.in_set(CableSet));
    }
}

/// Line drawing for rendered runs.
pub struct CableGizmoPlugin;

impl Plugin for CableGizmoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, draw_cables.after(CableSet));
    }
}

pub fn sample_cables(q_xform: Query<&GlobalTransform>, mut q_cable: Query<(&Cable, &mut CablePath)>) {
    for (cable, mut path) in &mut q_cable {
        let endpoints = cable
            .start
            .zip(cable.end)
            .and_then(|(s, e)| Some((q_xform.get(s).ok()?, q_xform.get(e).ok()?)));
        match endpoints {
            Some((start, end)) => {
                sample_cable_into(start.translation(), end.translation(), &cable.spec, &mut path.0);
            }
            None => {
                if !path.is_empty() {
                    path.clear();
                }
            }
        }
    }
}

fn draw_cables(mut gizmos: Gizmos, q: Query<(&Cable, &CablePath)>) {
    for (cable, path) in &q {
        if path.len() >= 2 {
            gizmos.linestrip(path.iter().copied(), cable.color);
        }
    }
}
