use bevy::prelude::*;

use crate::analyzer::AnalyzerDisplay;

const GAUGE_W: f32 = 160.0; // px width of the bar interior
const GAUGE_H: f32 = 16.0; // px
const BORDER_THICKNESS: f32 = 2.0; // px

#[derive(Component)]
pub(super) struct AnalyzerHudRoot;

#[derive(Component)]
pub(super) struct AnalyzerFill;

#[derive(Component)]
pub(super) struct AnalyzerText;

pub(super) fn spawn_analyzer_hud(mut commands: Commands) {
    // Bottom-right container
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                right: Val::Px(24.0),
                width: Val::Px(GAUGE_W + 16.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..Default::default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            Visibility::Hidden,
            AnalyzerHudRoot,
            Name::new("Analyzer HUD Root"),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..Default::default()
                },
                TextColor(Color::srgb(0.4, 1.0, 0.4)),
                AnalyzerText,
                Name::new("Analyzer Text"),
            ));
            root.spawn((
                Node {
                    width: Val::Px(GAUGE_W),
                    height: Val::Px(GAUGE_H),
                    border: UiRect::all(Val::Px(BORDER_THICKNESS)),
                    ..Default::default()
                },
                BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
                BackgroundColor(Color::NONE),
                Name::new("Analyzer Gauge"),
            ))
            .with_children(|g| {
                g.spawn((
                    Node {
                        width: Val::Percent(0.0), // updated at runtime
                        height: Val::Percent(100.0),
                        ..Default::default()
                    },
                    BackgroundColor(Color::srgba(1.0, 0.3, 0.2, 0.9)),
                    AnalyzerFill,
                    Name::new("Analyzer Gauge Fill"),
                ));
            });
        });
}

pub(super) fn update_analyzer_hud(
    q_display: Query<&AnalyzerDisplay, Changed<AnalyzerDisplay>>,
    mut q_root: Query<&mut Visibility, With<AnalyzerHudRoot>>,
    mut q_fill: Query<&mut Node, With<AnalyzerFill>>,
    mut q_txt: Query<&mut Text, With<AnalyzerText>>,
) {
    // Only one analyzer in the bay.
    let Some(display) = q_display.iter().next() else {
        return;
    };
    if let Ok(mut vis) = q_root.single_mut() {
        *vis = if display.powered { Visibility::Inherited } else { Visibility::Hidden };
    }
    let fill = if display.fill.is_finite() { display.fill.clamp(0.0, 1.0) } else { 0.0 };
    if let Ok(mut n) = q_fill.single_mut() {
        n.width = Val::Percent(fill * 100.0);
    }
    if let Ok(mut txt) = q_txt.single_mut() {
        txt.0.clone_from(&display.text);
    }
}
