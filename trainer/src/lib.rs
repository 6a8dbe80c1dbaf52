use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::transform::TransformPlugin;

pub mod analyzer;
pub mod args;
pub mod audio;
pub mod buttons;
pub mod cable;
pub mod config;
pub mod crane;
#[cfg(feature = "windowing")]
pub mod hud_controls;
pub mod hud_instruments;
pub mod pointer;
pub mod scene;
pub mod sim_pause;

pub use args::Args;
pub use config::{load_config, parse_config, TrainerConfig};

use analyzer::AnalyzerPlugin;
use audio::SoundCuePlugin;
use buttons::PendantPlugin;
use cable::{CableGizmoPlugin, CablePlugin};
use crane::CranePlugin;
use hud_instruments::HudInstrumentsPlugin;
use pointer::{DesktopPointerPlugin, PointerPlugin};
use scene::ScenePlugin;
use sim_pause::SimPause;

/// Per-frame ordering inside `Update`: gather input and button signals, then
/// integrate motion, then derive animation, sound and readouts.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Integrate,
    Effects,
}

#[derive(Clone, Copy)]
struct TrainerAppConfig {
    include_rendering: bool,
    include_ui: bool,
    include_scene: bool,
}

impl TrainerAppConfig {
    fn full(args: &Args) -> Self {
        Self {
            include_rendering: !args.headless,
            include_ui: !args.headless,
            include_scene: true,
        }
    }

    const MINIMAL: Self = Self {
        include_rendering: false,
        include_ui: false,
        include_scene: false,
    };
}

pub fn build_trainer_app(args: Args, cfg: TrainerConfig) -> App {
    let config = TrainerAppConfig::full(&args);
    build_trainer_app_with_config(args, cfg, config)
}

/// Headless app with the simulation plugins only. Callers spawn their own
/// bay (see [`scene::setup::spawn_training_bay`]).
pub fn build_minimal_trainer_app(cfg: TrainerConfig) -> App {
    let args = Args { headless: true, ..Default::default() };
    build_trainer_app_with_config(args, cfg, TrainerAppConfig::MINIMAL)
}

fn build_trainer_app_with_config(args: Args, cfg: TrainerConfig, config: TrainerAppConfig) -> App {
    let mut app = App::new();

    if config.include_rendering {
        app.add_plugins(DefaultPlugins.set(AssetPlugin {
            file_path: "assets".into(),
            ..Default::default()
        }));
        app.add_plugins((SoundCuePlugin, CableGizmoPlugin, DesktopPointerPlugin));
        if config.include_ui {
            app.add_plugins(HudInstrumentsPlugin);
            #[cfg(feature = "windowing")]
            {
                app.add_plugins(bevy_egui::EguiPlugin::default());
                app.add_plugins(bevy_inspector_egui::quick::WorldInspectorPlugin::default());
                app.add_plugins(hud_controls::HudControlsPlugin);
            }
        }
    } else {
        app.add_plugins((MinimalPlugins, TransformPlugin));
    }

    app.insert_resource(args)
        .insert_resource(cfg)
        .init_resource::<SimPause>()
        .configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Integrate, FrameSet::Effects).chain(),
        )
        .add_plugins((PointerPlugin, PendantPlugin, CranePlugin, AnalyzerPlugin, CablePlugin));

    if config.include_scene {
        app.add_plugins(ScenePlugin { dressing: config.include_rendering });
    }

    app
}
