//! Desktop pointer drag for grabbable scene objects.
//!
//! Left press raycasts the cursor against every [`Draggable`] entity's
//! [`GrabBounds`] and grabs the closest hit. While held, the entity is moved to
//! where the cursor ray crosses the drag plane. Releasing the button anywhere
//! ends the grab. Start and end are announced as [`GrabEvent`]s; nothing else
//! about the drag is shared.
//!
//! ```text
//! ButtonInput<MouseButton>
//!   ├─> begin_grab    ──> GrabEvent::Started
//!   ├─> end_grab      ──> GrabEvent::Ended
//!   └─> follow_cursor ──> Transform of the held entity
//! ```
//!
//! Only one entity can be held at a time; a press while holding is ignored.

/// Grab, release and follow systems.
pub mod manipulation;

/// Ray intersection helpers: oriented boxes for picking, plane for dragging.
pub mod ray;

/// Drag resources, components and the grab notification event.
pub mod state;

use bevy::prelude::*;

pub use state::{DragState, Draggable, GrabBounds, GrabEvent};

use manipulation::{begin_grab, end_grab, follow_cursor};

/// Systems of the drag provider; grab events are written here.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragSet;

pub struct DesktopDragPlugin;

impl Plugin for DesktopDragPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            .add_event::<GrabEvent>()
            .add_systems(
                Update,
                (begin_grab, end_grab, follow_cursor)
                    .chain()
                    .in_set(DragSet),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_owns_grab_events() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, DesktopDragPlugin));
        assert!(app.world().contains_resource::<Events<GrabEvent>>());
        assert!(app.world().contains_resource::<DragState>());
    }
}
