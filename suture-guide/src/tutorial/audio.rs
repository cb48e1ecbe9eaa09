use bevy::audio::{Pitch, PlaybackSettings, Volume};
use bevy::prelude::*;
use constants::tutorial::{TONE_DURATION_MS, TONE_FREQUENCY_HZ, TONE_VOLUME};
use std::time::Duration;

/// Short sine blip confirming a completed pass.
///
/// Audio is optional: without the audio plugin there are no `Pitch` assets and
/// the tone is skipped.
pub fn play_success_tone(commands: &mut Commands, pitches: Option<&mut Assets<Pitch>>) {
    let Some(pitches) = pitches else {
        debug!("Audio unavailable, skipping success tone");
        return;
    };

    let tone = pitches.add(Pitch::new(
        TONE_FREQUENCY_HZ,
        Duration::from_millis(TONE_DURATION_MS),
    ));
    commands.spawn((
        AudioPlayer(tone),
        PlaybackSettings::DESPAWN.with_volume(Volume::Linear(TONE_VOLUME)),
        Name::new("success-tone"),
    ));
}
