//! Guided suturing tutorial.
//!
//! A fixed sequence of steps walks the user through picking up the needle and
//! placing it in three target zones in turn:
//!
//! ```text
//! pick_needle ──grab needle──> pass_k_approach ──tip near zone──> pass_k_release
//!      ──release in zone──> [feedback window] ──> pass_(k+1)_approach | complete
//! ```
//!
//! The approach -> release transition only changes the prompt; releasing inside
//! the zone completes the pass from either sub-step. After each pass the
//! machine is busy for the feedback window and ignores further completions.
//!
//! ## Frame order
//!
//! All systems live in [`GuideSet`], chained so that grab notifications from
//! the drag provider are handled before the per-frame proximity poll:
//!
//! ```text
//! advance_feedback ─> handle_grab_events ─> tick_guide ─> apply_guide_view ─> dispatch_guide_effects
//! ```
//!
//! [`crate::tools::desktop_drag::GrabEvent`] is registered by the drag
//! provider's plugin, which must be added alongside [`TutorialPlugin`].
//!
//! [`machine::GuideMachine`] is plain state and holds no ECS handles besides
//! entity ids, so its behaviour is tested without an app.

/// Tone playback for completed passes.
pub mod audio;

/// Role bindings resolved from entity names, and the transform-backed probe.
pub mod bindings;

/// The tutorial state machine.
pub mod machine;

/// Proximity test and the scene position seam.
pub mod probe;

/// Writes the machine's view to text, visibility and material components.
pub mod projection;

/// Step table: labels, ordinals and pass classification.
pub mod step;

/// ECS systems driving the machine.
pub mod systems;

use bevy::prelude::*;

pub use bindings::{GuideBindings, GuideConfig, ZoneRing};
pub use machine::GuideMachine;
pub use step::Step;
pub use systems::StepChanged;

use projection::apply_guide_view;
use systems::{advance_feedback, dispatch_guide_effects, handle_grab_events, tick_guide};

/// Per-frame tutorial systems. Order after the drag provider's set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuideSet;

pub struct TutorialPlugin;

impl Plugin for TutorialPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GuideConfig>()
            .init_resource::<GuideBindings>()
            .init_resource::<GuideMachine>()
            .add_event::<StepChanged>()
            .add_systems(
                Update,
                (
                    advance_feedback,
                    handle_grab_events,
                    tick_guide,
                    apply_guide_view,
                    dispatch_guide_effects,
                )
                    .chain()
                    .in_set(GuideSet),
            );
    }
}
