//! Sound cues. Simulation systems only emit [`SoundCue`] events; playback is
//! attached when the app renders, so headless runs stay silent.

use bevy::audio::{AudioPlayer, AudioSink, AudioSinkPlayback, AudioSource, PlaybackSettings};
use bevy::prelude::*;

use crate::FrameSet;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// One-shot click from a pendant button press.
    ButtonClick { button: Entity },
    /// Winch loop should start for this crane.
    ReelStart { crane: Entity },
    /// Winch loop should stop for this crane.
    ReelStop { crane: Entity },
}

#[derive(Resource, Clone)]
pub struct SoundBank {
    pub click: Handle<AudioSource>,
    pub reel_loop: Handle<AudioSource>,
}

/// Looping winch sound owned by a crane.
#[derive(Component, Debug, Clone, Copy)]
pub struct ReelAudio {
    pub crane: Entity,
}

pub struct SoundCuePlugin;

impl Plugin for SoundCuePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_bank)
            .add_systems(Update, play_sound_cues.after(FrameSet::Effects));
    }
}

fn load_sound_bank(mut commands: Commands, assets: Res<AssetServer>) {
    commands.insert_resource(SoundBank {
        click: assets.load("sounds/button_click.ogg"),
        reel_loop: assets.load("sounds/reel_loop.ogg"),
    });
}

fn play_sound_cues(
    mut commands: Commands,
    bank: Option<Res<SoundBank>>,
    mut cues: EventReader<SoundCue>,
    q_reel: Query<(Entity, &ReelAudio, Option<&AudioSink>)>,
) {
    let Some(bank) = bank else {
        cues.clear();
        return;
    };
    for cue in cues.read() {
        match *cue {
            SoundCue::ButtonClick { .. } => {
                commands.spawn((
                    AudioPlayer::new(bank.click.clone()),
                    PlaybackSettings::DESPAWN,
                    Name::new("Button Click"),
                ));
            }
            SoundCue::ReelStart { crane } => {
                let existing = q_reel.iter().find(|(_, r, _)| r.crane == crane);
                match existing {
                    Some((_, _, Some(sink))) => sink.play(),
                    // Spawned earlier but not decoded yet; it starts on its own.
                    Some((_, _, None)) => {}
                    None => {
                        commands.spawn((
                            AudioPlayer::new(bank.reel_loop.clone()),
                            PlaybackSettings::LOOP,
                            ReelAudio { crane },
                            Name::new("Reel Audio"),
                        ));
                    }
                }
            }
            SoundCue::ReelStop { crane } => {
                for (entity, reel, sink) in &q_reel {
                    if reel.crane != crane {
                        continue;
                    }
                    match sink {
                        Some(sink) => sink.pause(),
                        None => commands.entity(entity).despawn(),
                    }
                }
            }
        }
    }
}
