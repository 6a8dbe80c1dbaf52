//! Logic entities of the training bay: crane rig, pendant, danger zones and
//! the gas analyzer. Nothing here needs a renderer; [`super::dressing`]
//! attaches meshes when one is present.

use bevy::prelude::*;
use mechanics::builtins::training_bay;
use mechanics::motion::{BEAM_AXIS, CARRIAGE_AXIS, HOOK_AXIS};
use mechanics::{ButtonTint, GasAnalyzer, MotionController};

use super::dressing::{Visual, VisualShape};
use crate::analyzer::{AnalyzerDevice, AnalyzerDisplay, PowerButton, PowerIndicator, Probe, SceneTag};
use crate::buttons::{tint_color, ButtonCap, PendantButton};
use crate::cable::{Cable, CablePath};
use crate::config::TrainerConfig;
use crate::crane::{CraneMover, CraneRig, Reel};
use crate::pointer::{KeyBinding, PickSphere};

/// Tag the bay puts on its hazard markers.
pub const DANGER_ZONE_TAG: &str = "DangerZone";

const BUTTON_PICK_RADIUS: f32 = 0.018;
const POWER_PICK_RADIUS: f32 = 0.03;
const PENDANT_FACE: f32 = 0.02;

fn key_for(label: &str) -> Option<KeyCode> {
    match label {
        "North" => Some(KeyCode::ArrowUp),
        "South" => Some(KeyCode::ArrowDown),
        "East" => Some(KeyCode::ArrowRight),
        "West" => Some(KeyCode::ArrowLeft),
        "Up" => Some(KeyCode::PageUp),
        "Down" => Some(KeyCode::PageDown),
        _ => None,
    }
}

pub fn spawn_training_bay(mut commands: Commands, cfg: Res<TrainerConfig>) {
    let bay = training_bay();

    // Crane: root -> beam (Z) -> carriage (X) -> hook (Y), reel on the carriage.
    let controller = match MotionController::new(&cfg.crane, bay.crane_start) {
        Ok(c) => c,
        Err(err) => {
            tracing::error!(%err, "crane spec rejected; crane not spawned");
            return;
        }
    };
    let start = controller.positions();
    let crane = commands
        .spawn((Transform::from_translation(bay.crane_root), Visibility::default(), Name::new("Crane")))
        .id();
    let beam = commands
        .spawn((
            Transform::from_translation(BEAM_AXIS.with(Vec3::ZERO, start.beam)),
            CraneMover::Beam,
            Visual::new(VisualShape::Cuboid(Vec3::new(12.0, 0.4, 0.4)), Color::srgb(0.9, 0.7, 0.1)),
            ChildOf(crane),
            Name::new("Crane Beam"),
        ))
        .id();
    let carriage = commands
        .spawn((
            Transform::from_translation(CARRIAGE_AXIS.with(Vec3::new(0.0, -0.35, 0.0), start.carriage)),
            CraneMover::Carriage,
            Visual::new(VisualShape::Cuboid(Vec3::new(0.6, 0.3, 0.6)), Color::srgb(0.3, 0.3, 0.35)),
            ChildOf(beam),
            Name::new("Crane Carriage"),
        ))
        .id();
    let hook = commands
        .spawn((
            Transform::from_translation(HOOK_AXIS.with(Vec3::ZERO, start.hook)),
            CraneMover::Hook,
            Visual::new(VisualShape::Sphere(0.12), Color::srgb(0.8, 0.2, 0.1)),
            ChildOf(carriage),
            Name::new("Crane Hook"),
        ))
        .id();
    let reel = commands
        .spawn((
            Transform::from_xyz(0.0, -0.2, 0.0),
            Reel,
            Visual::new(VisualShape::Cuboid(Vec3::new(0.4, 0.15, 0.15)), Color::srgb(0.5, 0.5, 0.5)),
            ChildOf(carriage),
            Name::new("Crane Reel"),
        ))
        .id();
    commands
        .entity(crane)
        .insert(CraneRig::new(controller, beam, carriage, hook).with_reel(reel));
    commands.spawn((
        Cable { start: Some(reel), end: Some(hook), spec: cfg.cable.clone(), color: Color::srgb(0.15, 0.15, 0.15) },
        CablePath::default(),
        Name::new("Hoist Cable"),
    ));

    // Pendant
    let pendant = commands
        .spawn((
            Transform::from_translation(bay.pendant_pos),
            Visual::new(VisualShape::Cuboid(Vec3::new(0.1, 0.2, 0.04)), Color::srgb(0.95, 0.75, 0.1)),
            Name::new("Pendant"),
        ))
        .id();
    let normal = tint_color(&cfg.buttons, ButtonTint::Normal);
    for spec in &bay.pendant {
        let rest = spec.offset + Vec3::Z * PENDANT_FACE;
        let mut button = commands.spawn((
            Transform::from_translation(rest),
            PendantButton::new(spec.label, crane, spec.direction),
            ButtonCap { rest },
            PickSphere { radius: BUTTON_PICK_RADIUS },
            Visual::new(VisualShape::Cuboid(Vec3::new(0.03, 0.025, 0.012)), normal),
            ChildOf(pendant),
            Name::new(format!("Pendant {}", spec.label)),
        ));
        if let Some(key) = key_for(spec.label) {
            button.insert(KeyBinding(key));
        }
    }

    for (i, pos) in bay.danger_zones.iter().enumerate() {
        commands.spawn((
            Transform::from_translation(*pos),
            SceneTag(DANGER_ZONE_TAG.to_string()),
            Visual::new(VisualShape::Sphere(0.5), Color::srgba(1.0, 0.1, 0.1, 0.35)),
            Name::new(format!("Danger Zone {i}")),
        ));
    }

    // Analyzer
    let device = match GasAnalyzer::new(&cfg.analyzer) {
        Ok(d) => d,
        Err(err) => {
            tracing::error!(%err, "analyzer spec rejected; analyzer not spawned");
            return;
        }
    };
    let analyzer = commands
        .spawn((
            Transform::from_translation(bay.analyzer_pos),
            Visual::new(VisualShape::Cuboid(Vec3::new(0.12, 0.2, 0.06)), Color::srgb(0.2, 0.25, 0.3)),
            Name::new("Gas Analyzer"),
        ))
        .id();
    let probe = commands
        .spawn((
            Transform::from_translation(bay.probe_offset),
            Probe,
            Visual::new(VisualShape::Sphere(0.015), Color::srgb(0.7, 0.7, 0.7)),
            ChildOf(analyzer),
            Name::new("Analyzer Probe"),
        ))
        .id();
    commands
        .entity(analyzer)
        .insert((AnalyzerDevice { device, probe }, AnalyzerDisplay::default()));
    let rest = Vec3::new(0.0, 0.06, 0.035);
    commands.spawn((
        Transform::from_translation(rest),
        PowerButton { analyzer, rest },
        PickSphere { radius: POWER_PICK_RADIUS },
        Visual::new(VisualShape::Cuboid(Vec3::new(0.03, 0.03, 0.015)), Color::srgb(0.8, 0.1, 0.1)),
        ChildOf(analyzer),
        Name::new("Analyzer Power Button"),
    ));
    let idle = cfg.analyzer.idle_color;
    commands.spawn((
        Transform::from_xyz(0.0, 0.09, 0.035),
        PowerIndicator { analyzer },
        Visual::new(VisualShape::Sphere(0.008), Color::srgba(idle.r, idle.g, idle.b, idle.a)),
        ChildOf(analyzer),
        Name::new("Analyzer Power LED"),
    ));
    commands.spawn((
        Cable { start: Some(analyzer), end: Some(probe), spec: cfg.cable.clone(), color: Color::BLACK },
        CablePath::default(),
        Name::new("Probe Cable"),
    ));

    tracing::info!(buttons = bay.pendant.len(), zones = bay.danger_zones.len(), "training bay spawned");
}
