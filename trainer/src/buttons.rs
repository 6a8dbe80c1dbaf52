use bevy::prelude::*;
use mechanics::{ButtonPalette, ButtonTint, PointerAction, RemoteButton, Rgba, SignalKind};

use crate::audio::SoundCue;
use crate::crane::{accumulate_movement, MovementSignal};
use crate::config::TrainerConfig;
use crate::FrameSet;

/// Hover/press request addressed to a control, produced by a pointer or a
/// key binding.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAction(pub PointerAction<Entity>);

/// A directional button on the crane pendant.
#[derive(Component, Debug)]
pub struct PendantButton {
    pub label: String,
    /// Crane that receives this button's signals.
    pub crane: Entity,
    pub machine: RemoteButton,
}

impl PendantButton {
    pub fn new(label: impl Into<String>, crane: Entity, direction: Vec3) -> Self {
        Self { label: label.into(), crane, machine: RemoteButton::new(direction) }
    }
}

/// Resting pose of the movable cap; pressed caps sink along local −Z.
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonCap {
    pub rest: Vec3,
}

pub struct PendantPlugin;

impl Plugin for PendantPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ControlAction>()
            .add_systems(
                Update,
                apply_control_actions
                    .in_set(FrameSet::Input)
                    .before(accumulate_movement),
            )
            .add_systems(Update, refresh_button_caps.in_set(FrameSet::Effects));
    }
}

pub fn apply_control_actions(
    mut actions: EventReader<ControlAction>,
    mut q_buttons: Query<&mut PendantButton>,
    mut signals: EventWriter<MovementSignal>,
    mut cues: EventWriter<SoundCue>,
) {
    for ControlAction(action) in actions.read().copied() {
        let (target, signal) = match action {
            PointerAction::HoverEnter(e) => {
                if let Ok(mut b) = q_buttons.get_mut(e) {
                    b.machine.hover_enter();
                }
                continue;
            }
            PointerAction::HoverExit(e) => {
                (e, q_buttons.get_mut(e).ok().and_then(|mut b| b.machine.hover_exit()))
            }
            PointerAction::Press(e) => {
                (e, q_buttons.get_mut(e).ok().and_then(|mut b| b.machine.press()))
            }
            PointerAction::Release(e) => {
                (e, q_buttons.get_mut(e).ok().and_then(|mut b| b.machine.release()))
            }
        };
        let Some(signal) = signal else { continue };
        let Ok(button) = q_buttons.get(target) else { continue };
        tracing::trace!(button = %button.label, kind = ?signal.kind, "pendant signal");
        signals.write(MovementSignal { crane: button.crane, direction: signal.direction });
        if signal.kind == SignalKind::Pressed {
            cues.write(SoundCue::ButtonClick { button: target });
        }
    }
}

fn rgba_to_color(c: Rgba) -> Color {
    Color::srgba(c.r, c.g, c.b, c.a)
}

pub fn tint_color(palette: &ButtonPalette, tint: ButtonTint) -> Color {
    rgba_to_color(match tint {
        ButtonTint::Normal => palette.normal,
        ButtonTint::Hover => palette.hover,
        ButtonTint::Pressed => palette.pressed,
    })
}

fn refresh_button_caps(
    cfg: Res<TrainerConfig>,
    mut q: Query<
        (&PendantButton, &ButtonCap, &mut Transform, Option<&MeshMaterial3d<StandardMaterial>>),
        Changed<PendantButton>,
    >,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    for (button, cap, mut transform, material) in &mut q {
        let look = button.machine.look();
        let depth = if look.depressed { cfg.buttons.pressed_depth } else { 0.0 };
        transform.translation = cap.rest + Vec3::NEG_Z * depth;

        let (Some(material), Some(materials)) = (material, materials.as_mut()) else {
            continue;
        };
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.base_color = tint_color(&cfg.buttons, look.tint);
        }
    }
}
