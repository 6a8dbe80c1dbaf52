//! Pointer service: resolves which control each pointer is over and turns
//! that into hover/press/release actions.
//!
//! Each pointing device keeps its own hover owner, so a mouse and two hands
//! can hover different controls at once. The desktop plugin feeds the mouse
//! through a simple ray/sphere pick and adds keyboard shortcuts.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use mechanics::{Hand, HoverArbiter, PointerAction, PointerFrame};

use crate::analyzer::{AnalyzerDevice, AnalyzerInputSet, AnalyzerTrigger, GrabRequest, PowerButton};
use crate::buttons::{apply_control_actions, ControlAction};
use crate::FrameSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    LeftHand,
    RightHand,
}

impl PointerId {
    pub fn hand(self) -> Hand {
        match self {
            PointerId::Mouse => Hand::Unknown,
            PointerId::LeftHand => Hand::Left,
            PointerId::RightHand => Hand::Right,
        }
    }
}

/// One pointer's view of the scene for this frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerSample {
    pub pointer: PointerId,
    pub frame: PointerFrame<Entity>,
}

#[derive(Resource, Debug, Default)]
pub struct PointerHover {
    arbiters: HashMap<PointerId, HoverArbiter<Entity>>,
}

impl PointerHover {
    pub fn hovered(&self, pointer: PointerId) -> Option<Entity> {
        self.arbiters.get(&pointer).and_then(|a| a.hovered())
    }
}

/// Pick volume for a control.
#[derive(Component, Debug, Clone, Copy)]
pub struct PickSphere {
    pub radius: f32,
}

/// Keyboard shortcut that presses a control while held.
#[derive(Component, Debug, Clone, Copy)]
pub struct KeyBinding(pub KeyCode);

pub const TRIGGER_KEY: KeyCode = KeyCode::Space;
pub const GRAB_KEY: KeyCode = KeyCode::KeyG;

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerSample>()
            .init_resource::<PointerHover>()
            .add_systems(
                Update,
                arbitrate_pointers
                    .in_set(FrameSet::Input)
                    .before(apply_control_actions),
            );
    }
}

/// Mouse picking and keyboard shortcuts for desktop runs.
pub struct DesktopPointerPlugin;

impl Plugin for DesktopPointerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (pick_with_mouse, keyboard_controls)
                .in_set(FrameSet::Input)
                .before(arbitrate_pointers)
                .before(AnalyzerInputSet),
        );
    }
}

pub fn arbitrate_pointers(
    mut samples: EventReader<PointerSample>,
    mut hover: ResMut<PointerHover>,
    mut actions: EventWriter<ControlAction>,
) {
    for sample in samples.read() {
        let arbiter = hover.arbiters.entry(sample.pointer).or_default();
        for action in arbiter.update(sample.frame) {
            actions.write(ControlAction(action));
        }
    }
}

/// Nearest pick sphere along the ray, if any.
pub fn pick_along_ray(
    origin: Vec3,
    dir: Vec3,
    targets: impl IntoIterator<Item = (Entity, Vec3, f32)>,
) -> Option<Entity> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, center, radius) in targets {
        let to_center = center - origin;
        let along = to_center.dot(dir);
        if along < 0.0 {
            continue;
        }
        let miss_sq = to_center.length_squared() - along * along;
        let r_sq = radius * radius;
        if miss_sq > r_sq {
            continue;
        }
        let t = along - (r_sq - miss_sq).sqrt();
        if best.is_none_or(|(_, bt)| t < bt) {
            best = Some((entity, t));
        }
    }
    best.map(|(e, _)| e)
}

fn pick_with_mouse(
    q_window: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Camera, &GlobalTransform)>,
    q_targets: Query<(Entity, &GlobalTransform, &PickSphere)>,
    q_power: Query<(), With<PowerButton>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut trigger: ResMut<AnalyzerTrigger>,
    mut samples: EventWriter<PointerSample>,
) {
    let ray = q_window
        .single()
        .ok()
        .and_then(|w| w.cursor_position())
        .and_then(|cursor| {
            let (camera, cam_xform) = q_camera.iter().find(|(c, _)| c.is_active)?;
            camera.viewport_to_world(cam_xform, cursor).ok()
        });
    let hit = ray.and_then(|ray| {
        pick_along_ray(
            ray.origin,
            *ray.direction,
            q_targets.iter().map(|(e, xf, s)| (e, xf.translation(), s.radius)),
        )
    });

    trigger.pointer_held =
        mouse.pressed(MouseButton::Left) && hit.is_some_and(|e| q_power.contains(e));
    samples.write(PointerSample {
        pointer: PointerId::Mouse,
        frame: PointerFrame {
            hit,
            trigger_pressed: mouse.just_pressed(MouseButton::Left),
            trigger_released: mouse.just_released(MouseButton::Left),
        },
    });
}

pub fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    q_bindings: Query<(Entity, &KeyBinding)>,
    q_analyzer: Query<(Entity, &AnalyzerDevice)>,
    mut trigger: ResMut<AnalyzerTrigger>,
    mut actions: EventWriter<ControlAction>,
    mut grabs: EventWriter<GrabRequest>,
) {
    for (entity, binding) in &q_bindings {
        if keys.just_pressed(binding.0) {
            actions.write(ControlAction(PointerAction::Press(entity)));
        }
        if keys.just_released(binding.0) {
            actions.write(ControlAction(PointerAction::Release(entity)));
        }
    }

    let Ok((analyzer, device)) = q_analyzer.single() else {
        trigger.key_held = false;
        return;
    };
    let mut in_hand = device.device.held_by().is_some();
    if keys.just_pressed(GRAB_KEY) {
        let request = if in_hand {
            GrabRequest { analyzer, hand: None }
        } else {
            GrabRequest::by_pointer(analyzer, PointerId::Mouse)
        };
        grabs.write(request);
        // The request lands later this frame; judge the trigger against it.
        in_hand = !in_hand;
    }
    // The trigger only works on a device in hand.
    trigger.key_held = keys.pressed(TRIGGER_KEY) && in_hand;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_nearest_sphere_in_front() {
        let near = Entity::from_raw(1);
        let far = Entity::from_raw(2);
        let behind = Entity::from_raw(3);
        let targets = vec![
            (far, Vec3::new(0.0, 0.0, -10.0), 0.5),
            (near, Vec3::new(0.1, 0.0, -4.0), 0.5),
            (behind, Vec3::new(0.0, 0.0, 3.0), 0.5),
        ];
        assert_eq!(pick_along_ray(Vec3::ZERO, Vec3::NEG_Z, targets), Some(near));
    }

    #[test]
    fn misses_return_none() {
        let targets = vec![(Entity::from_raw(1), Vec3::new(2.0, 0.0, -4.0), 0.5)];
        assert_eq!(pick_along_ray(Vec3::ZERO, Vec3::NEG_Z, targets), None);
    }
}
