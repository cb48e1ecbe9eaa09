use super::audio::play_success_tone;
use super::bindings::{GuideBindings, WorldProbe};
use super::machine::{GuideEffect, GuideMachine};
use super::step::Step;
use crate::tools::desktop_drag::GrabEvent;
use bevy::audio::Pitch;
use bevy::prelude::*;

/// Emitted on every step transition, including the initial one.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChanged {
    pub step: Step,
}

// Initialisation once the scene is loaded and bindings are resolved
pub fn start_guide(mut machine: ResMut<GuideMachine>, bindings: Res<GuideBindings>) {
    machine.bind_needle(bindings.needle);
    machine.start();
}

// Leaving the running state must not leave a resolution queued against a dead scene
pub fn teardown_guide(mut machine: ResMut<GuideMachine>) {
    machine.cancel_pending();
}

pub fn advance_feedback(time: Res<Time>, mut machine: ResMut<GuideMachine>) {
    machine.advance(time.delta());
}

pub fn handle_grab_events(
    mut events: EventReader<GrabEvent>,
    mut machine: ResMut<GuideMachine>,
    bindings: Res<GuideBindings>,
    transforms: Query<&GlobalTransform>,
) {
    let probe = WorldProbe {
        bindings: &bindings,
        transforms: &transforms,
    };

    for event in events.read() {
        match *event {
            GrabEvent::Started { grabbed } => machine.on_grab_started(grabbed),
            GrabEvent::Ended { grabbed } => machine.on_grab_ended(grabbed, &probe),
        }
    }
}

pub fn tick_guide(
    mut machine: ResMut<GuideMachine>,
    bindings: Res<GuideBindings>,
    transforms: Query<&GlobalTransform>,
) {
    let probe = WorldProbe {
        bindings: &bindings,
        transforms: &transforms,
    };
    machine.tick(&probe);
}

pub fn dispatch_guide_effects(
    mut commands: Commands,
    mut machine: ResMut<GuideMachine>,
    mut step_events: EventWriter<StepChanged>,
    mut pitches: Option<ResMut<Assets<Pitch>>>,
) {
    for effect in machine.drain_effects() {
        match effect {
            GuideEffect::StepChanged(step) => {
                step_events.write(StepChanged { step });
            }
            GuideEffect::PlaySuccessTone => {
                play_success_tone(&mut commands, pitches.as_deref_mut());
            }
        }
    }
}
