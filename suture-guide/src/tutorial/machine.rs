use super::probe::{SceneProbe, is_tip_near_zone};
use super::step::Step;
use bevy::prelude::*;
use constants::tutorial::{FEEDBACK_DURATION_MS, PASSES};
use std::time::Duration;

/// Side effects queued by the machine and carried out by the ECS layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideEffect {
    StepChanged(Step),
    PlaySuccessTone,
}

/// Everything the tutorial shows, derived from the machine state.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideView {
    pub prompt: String,
    pub counter: &'static str,
    pub zones_visible: [bool; PASSES],
    pub rings_highlighted: [bool; PASSES],
    pub release_indicator_visible: bool,
    pub tip_near: bool,
}

impl Default for GuideView {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            counter: "",
            zones_visible: [false; PASSES],
            rings_highlighted: [false; PASSES],
            release_indicator_visible: false,
            tip_near: false,
        }
    }
}

/// Pass resolution waiting on the feedback window.
#[derive(Debug)]
struct PendingFeedback {
    timer: Timer,
    pass_num: usize,
}

/// Tutorial state machine.
///
/// Holds the current step, the completed-pass counter, the busy lockout and the
/// currently grabbed entity. Spatial input arrives through a [`SceneProbe`]; all
/// output is either the [`GuideView`] or a queued [`GuideEffect`].
#[derive(Resource, Debug, Default)]
pub struct GuideMachine {
    needle: Option<Entity>,
    step: Step,
    current_pass: usize,
    busy: bool,
    grabbed: Option<Entity>,
    pending: Option<PendingFeedback>,
    view: GuideView,
    effects: Vec<GuideEffect>,
}

impl GuideMachine {
    #[cfg(test)]
    pub fn new(needle: Option<Entity>) -> Self {
        Self {
            needle,
            ..default()
        }
    }

    /// Designate the entity that counts as the needle.
    pub fn bind_needle(&mut self, needle: Option<Entity>) {
        self.needle = needle;
    }

    /// Enter the first step from a clean session. Called once the scene has loaded.
    pub fn start(&mut self) {
        self.pending = None;
        self.busy = false;
        self.current_pass = 0;
        self.grabbed = None;
        self.view = GuideView::default();
        self.transition_to(Step::PickNeedle);
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Number of completed passes; also the index of the active zone while below `PASSES`.
    pub fn current_pass(&self) -> usize {
        self.current_pass
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn grabbed(&self) -> Option<Entity> {
        self.grabbed
    }

    pub fn view(&self) -> &GuideView {
        &self.view
    }

    #[cfg(test)]
    pub fn has_pending_feedback(&self) -> bool {
        self.pending.is_some()
    }

    pub fn drain_effects(&mut self) -> std::vec::Drain<'_, GuideEffect> {
        self.effects.drain(..)
    }

    fn is_needle(&self, object: Entity) -> bool {
        self.needle == Some(object)
    }

    pub fn on_grab_started(&mut self, object: Entity) {
        self.grabbed = Some(object);

        if self.step == Step::PickNeedle && self.is_needle(object) {
            self.transition_to(Step::Pass1Approach);
        }
    }

    /// Release handling. A release from either sub-step of the active pass completes it,
    /// provided the needle tip is inside the active zone and no feedback is playing.
    pub fn on_grab_ended(&mut self, object: Entity, probe: &impl SceneProbe) {
        if !self.busy
            && self.is_needle(object)
            && self.step.pass_index() == Some(self.current_pass)
            && is_tip_near_zone(probe, object, self.current_pass)
        {
            self.complete_pass(self.current_pass + 1);
        }

        if self.grabbed == Some(object) {
            self.grabbed = None;
        }
    }

    /// Per-frame polling: advisory approach -> release transition and the release highlight.
    pub fn tick(&mut self, probe: &impl SceneProbe) {
        if let Some(held) = self.grabbed {
            if self.step.is_approach()
                && self.step.pass_index() == Some(self.current_pass)
                && is_tip_near_zone(probe, held, self.current_pass)
            {
                if let Some(release) = Step::release(self.current_pass) {
                    self.transition_to(release);
                }
            }
        }

        if self.step.is_approach() || self.step.is_release() {
            self.refresh_release_highlight(probe);
        }
    }

    fn refresh_release_highlight(&mut self, probe: &impl SceneProbe) {
        let Some(needle) = self.needle else {
            return;
        };
        let near = is_tip_near_zone(probe, needle, self.current_pass);
        if near != self.view.tip_near {
            debug!("Needle tip near zone {}: {}", self.current_pass + 1, near);
        }
        self.view.release_indicator_visible = near;
        self.view.tip_near = near;
    }

    /// Start the feedback window for `pass_num` (1-based). No-op while busy.
    pub fn complete_pass(&mut self, pass_num: usize) {
        if self.busy {
            return;
        }
        if !(1..=PASSES).contains(&pass_num) {
            warn!("Ignoring completion of unknown pass {}", pass_num);
            return;
        }

        self.busy = true;
        self.effects.push(GuideEffect::PlaySuccessTone);
        self.view.rings_highlighted[pass_num - 1] = true;
        self.view.prompt = format!("Pass {} done!", pass_num);

        self.pending = Some(PendingFeedback {
            timer: Timer::new(
                Duration::from_millis(FEEDBACK_DURATION_MS),
                TimerMode::Once,
            ),
            pass_num,
        });

        info!("Pass {} complete, feedback window started", pass_num);
    }

    /// Advance the feedback timer by one frame's worth of time.
    pub fn advance(&mut self, delta: Duration) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        pending.timer.tick(delta);
        if !pending.timer.finished() {
            return;
        }

        let pass_num = pending.pass_num;
        self.pending = None;
        self.resolve_pass(pass_num);
    }

    fn resolve_pass(&mut self, pass_num: usize) {
        self.busy = false;
        self.view.rings_highlighted[pass_num - 1] = false;
        self.current_pass = pass_num;

        let next = if pass_num >= PASSES {
            Step::Complete
        } else {
            Step::approach(pass_num).unwrap_or(Step::Complete)
        };
        self.transition_to(next);
    }

    /// Drop any pending feedback so nothing fires against a torn-down scene.
    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            debug!("Cancelled pending pass feedback");
        }
        self.busy = false;
        self.view.rings_highlighted = [false; PASSES];
    }

    pub fn transition_to(&mut self, step: Step) {
        let previous = self.step;
        self.step = step;

        let shows_zones = step.is_approach() || step.is_release();
        self.view.prompt = step.label().to_string();
        self.view.counter = step.ordinal();
        for (index, visible) in self.view.zones_visible.iter_mut().enumerate() {
            *visible = shows_zones && index == self.current_pass;
        }
        self.view.release_indicator_visible = false;
        self.view.tip_near = false;

        self.effects.push(GuideEffect::StepChanged(step));
        info!("Tutorial step: {} -> {}", previous, step);
    }
}
