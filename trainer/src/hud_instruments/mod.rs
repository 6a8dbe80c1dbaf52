use bevy::prelude::*;

pub mod gauge;

use crate::FrameSet;

pub struct HudInstrumentsPlugin;

impl Plugin for HudInstrumentsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, gauge::spawn_analyzer_hud).add_systems(
            Update,
            (gauge::update_analyzer_hud, sanitize_ui_nodes)
                .chain()
                .after(FrameSet::Effects),
        );
    }
}

// Best-effort guard against NaN values slipping into UI nodes which can panic inside bevy_ui.
fn sanitize_ui_nodes(mut q: Query<(Entity, &mut Node, Option<&Name>), Changed<Node>>) {
    fn fix(label: &'static str, v: &mut Val, dirty: &mut Vec<&'static str>) {
        match v {
            Val::Px(x) => {
                if !x.is_finite() || x.abs() > 1.0e7 {
                    *x = 0.0;
                    dirty.push(label);
                }
            }
            Val::Percent(p) => {
                if !p.is_finite() || p.abs() > 1.0e6 {
                    *v = Val::Px(0.0);
                    dirty.push(label);
                }
            }
            _ => {}
        }
    }
    for (e, mut n, name) in &mut q {
        let mut dirty: Vec<&'static str> = Vec::new();
        fix("width", &mut n.width, &mut dirty);
        fix("height", &mut n.height, &mut dirty);
        fix("left", &mut n.left, &mut dirty);
        fix("right", &mut n.right, &mut dirty);
        fix("top", &mut n.top, &mut dirty);
        fix("bottom", &mut n.bottom, &mut dirty);

        if !dirty.is_empty() {
            let label = name
                .map(|n| n.as_str().to_string())
                .unwrap_or_else(|| format!("Entity#{e:?}"));
            tracing::warn!(target: "ui_sanitize", node=%label, fields=?dirty, "Sanitized non-finite UI values");
        }
    }
}
