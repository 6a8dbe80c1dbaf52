use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;
use bevy_inspector_egui::bevy_egui::EguiContexts;

use crate::analyzer::{AnalyzerDevice, AnalyzerDisplay};
use crate::crane::CraneRig;
use crate::sim_pause::SimPause;

pub struct HudControlsPlugin;

impl Plugin for HudControlsPlugin {
    fn build(&self, app: &mut App) {
        // Ensure the egui UI runs between BeginPass (PreUpdate) and EndPass (PostUpdate)
        app.add_systems(EguiPrimaryContextPass, ui_trainer_panel);
    }
}

fn ui_trainer_panel(
    mut egui_ctx: EguiContexts,
    mut paused: ResMut<SimPause>,
    q_rig: Query<&CraneRig>,
    q_analyzer: Query<(&AnalyzerDevice, &AnalyzerDisplay)>,
) {
    use bevy_inspector_egui::egui::*;
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    SidePanel::left("trainer_panel")
        .exact_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Trainer");
            ui.add_space(8.0);

            let mut p = paused.0;
            if ui.checkbox(&mut p, "Pause").clicked() {
                paused.0 = p;
            }
            ui.add_space(8.0);

            ui.separator();
            ui.label("Crane");
            for rig in &q_rig {
                let pos = rig.controller.positions();
                let input = rig.controller.input();
                ui.monospace(format!(
                    "beam     {:>6.2}\ncarriage {:>6.2}\nhook     {:>6.2}\ninput {:+.0} {:+.0} {:+.0}",
                    pos.beam, pos.carriage, pos.hook, input.x, input.y, input.z
                ));
            }

            ui.separator();
            ui.label("Gas analyzer");
            for (analyzer, display) in &q_analyzer {
                let held = match analyzer.device.held_by() {
                    Some(hand) => format!("{hand:?}"),
                    None => "bench".to_string(),
                };
                ui.monospace(format!(
                    "power {}\nheld  {held}\nread  {}",
                    if analyzer.device.is_on() { "ON" } else { "OFF" },
                    if display.powered { display.text.as_str() } else { "-" },
                ));
            }

            ui.separator();
            ui.label("Keys");
            ui.monospace(
                "Arrows   N/S/E/W\nPgUp/Dn  hook\nG        grab/drop\nSpace    analyzer power\nLMB      press control",
            );
        });
}
