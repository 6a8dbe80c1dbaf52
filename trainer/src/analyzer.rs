use bevy::prelude::*;
use mechanics::{GasAnalyzer, Hand, Rgba};

use crate::config::TrainerConfig;
use crate::pointer::PointerId;
use crate::sim_pause::{sim_dt, SimPause};
use crate::FrameSet;

/// Handheld gas analyzer body.
#[derive(Component, Debug)]
pub struct AnalyzerDevice {
    pub device: GasAnalyzer,
    /// Sensor tip the distance is measured from.
    pub probe: Entity,
}

/// What the analyzer screen currently shows.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnalyzerDisplay {
    pub powered: bool,
    pub text: String,
    pub fill: f32,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Probe;

/// Physical power button on the analyzer; sinks while the trigger is held.
#[derive(Component, Debug, Clone, Copy)]
pub struct PowerButton {
    pub analyzer: Entity,
    pub rest: Vec3,
}

/// Power LED.
#[derive(Component, Debug, Clone, Copy)]
pub struct PowerIndicator {
    pub analyzer: Entity,
}

/// String tag used to find scene objects at startup.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct SceneTag(pub String);

/// Hazard zones resolved once at startup; the set is fixed afterwards.
#[derive(Resource, Debug, Clone, Default)]
pub struct DangerZones(pub Vec<Entity>);

/// Trigger state from the input sources. Either one holds the trigger.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AnalyzerTrigger {
    pub pointer_held: bool,
    pub key_held: bool,
}

impl AnalyzerTrigger {
    pub fn held(&self) -> bool {
        self.pointer_held || self.key_held
    }
}

/// Pick up (`Some(hand)`) or put down (`None`) an analyzer.
#[derive(Event, Debug, Clone, Copy)]
pub struct GrabRequest {
    pub analyzer: Entity,
    pub hand: Option<Hand>,
}

impl GrabRequest {
    pub fn by_pointer(analyzer: Entity, pointer: PointerId) -> Self {
        Self { analyzer, hand: Some(pointer.hand()) }
    }
}

/// Grab handling and trigger polling. Input sources must run before it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalyzerInputSet;

pub struct AnalyzerPlugin;

impl Plugin for AnalyzerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GrabRequest>()
            .init_resource::<AnalyzerTrigger>()
            .init_resource::<DangerZones>()
            .add_systems(PostStartup, gather_danger_zones)
            .configure_sets(Update, AnalyzerInputSet.in_set(FrameSet::Input))
            .add_systems(
                Update,
                (apply_grab_requests, drive_analyzer).chain().in_set(AnalyzerInputSet),
            )
            .add_systems(
                Update,
                (update_analyzer_display, refresh_power_button, refresh_indicator)
                    .in_set(FrameSet::Effects),
            );
    }
}

pub fn gather_danger_zones(
    cfg: Res<TrainerConfig>,
    q_tagged: Query<(Entity, &SceneTag)>,
    mut zones: ResMut<DangerZones>,
) {
    let tag = cfg.analyzer.danger_zone_tag.as_str();
    zones.0 = q_tagged
        .iter()
        .filter(|(_, t)| t.0 == tag)
        .map(|(e, _)| e)
        .collect();
    if zones.0.is_empty() {
        tracing::error!(%tag, "no danger zones found with tag");
    } else {
        tracing::info!(%tag, count = zones.0.len(), "danger zones registered");
    }
}

fn apply_grab_requests(mut requests: EventReader<GrabRequest>, mut q: Query<&mut AnalyzerDevice>) {
    for req in requests.read() {
        let Ok(mut analyzer) = q.get_mut(req.analyzer) else {
            continue;
        };
        match req.hand {
            Some(hand) => {
                analyzer.device.grab(hand);
                tracing::info!(?hand, "analyzer picked up");
            }
            None => {
                analyzer.device.drop_device();
                tracing::info!("analyzer put down");
            }
        }
    }
}

fn drive_analyzer(
    time: Res<Time>,
    paused: Res<SimPause>,
    trigger: Res<AnalyzerTrigger>,
    mut q: Query<&mut AnalyzerDevice>,
) {
    let dt = sim_dt(&time, &paused);
    let held = trigger.held();
    for mut analyzer in &mut q {
        if !held && !analyzer.device.button_depressed() {
            continue;
        }
        if let Some(progress) = analyzer.device.trigger(held, dt) {
            if progress.toggled {
                tracing::info!(on = analyzer.device.is_on(), "analyzer power toggled");
            }
        }
    }
}

fn update_analyzer_display(
    zones: Res<DangerZones>,
    q_xform: Query<&GlobalTransform>,
    mut q: Query<(&AnalyzerDevice, &mut AnalyzerDisplay)>,
) {
    let zone_positions: Vec<Vec3> = zones
        .0
        .iter()
        .filter_map(|e| q_xform.get(*e).ok())
        .map(|xf| xf.translation())
        .collect();
    for (analyzer, mut display) in &mut q {
        // Without a probe there is nothing to measure from; show the empty reading.
        let readout = match q_xform.get(analyzer.probe) {
            Ok(probe) => analyzer.device.readout(probe.translation(), &zone_positions),
            Err(_) => analyzer.device.readout(Vec3::ZERO, &[]),
        };
        let next = match readout {
            None => AnalyzerDisplay::default(),
            Some(r) => AnalyzerDisplay { powered: true, text: r.display_text(), fill: r.fill() },
        };
        display.set_if_neq(next);
    }
}

fn refresh_power_button(
    cfg: Res<TrainerConfig>,
    q_analyzer: Query<&AnalyzerDevice>,
    mut q_button: Query<(&PowerButton, &mut Transform)>,
) {
    for (button, mut transform) in &mut q_button {
        let Ok(analyzer) = q_analyzer.get(button.analyzer) else { continue };
        let depth = if analyzer.device.button_depressed() { cfg.analyzer.button_depth } else { 0.0 };
        transform.translation = button.rest + Vec3::NEG_Z * depth;
    }
}

fn refresh_indicator(
    q_analyzer: Query<&AnalyzerDevice>,
    q_led: Query<(&PowerIndicator, &MeshMaterial3d<StandardMaterial>)>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let Some(mut materials) = materials else { return };
    for (led, material) in &q_led {
        let Ok(analyzer) = q_analyzer.get(led.analyzer) else { continue };
        let Rgba { r, g, b, a } = analyzer.device.indicator_color();
        if let Some(mat) = materials.get_mut(&material.0) {
            let color = Color::srgba(r, g, b, a);
            mat.base_color = color;
            mat.emissive = LinearRgba::from(color) * 0.5;
        }
    }
}
