use bevy::prelude::*;
use constants::render_settings::{DRAG_PLANE_NORMAL, DRAG_PLANE_POINT};

// Resources
#[derive(Resource, Debug)]
pub struct DragState {
    pub grabbed: Option<Entity>,
    pub plane_point: Vec3,
    pub plane_normal: Vec3,
}
impl Default for DragState {
    fn default() -> Self {
        Self {
            grabbed: None,
            plane_point: DRAG_PLANE_POINT,
            plane_normal: DRAG_PLANE_NORMAL,
        }
    }
}

// Components
#[derive(Component)]
pub struct Draggable;

/// Box used for pointer hit tests, in the entity's local space.
#[derive(Component, Debug, Clone, Copy)]
pub struct GrabBounds(pub Vec3);

// Events
/// Grab notifications. Exactly one `Ended` follows each `Started` for the same entity.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabEvent {
    Started { grabbed: Entity },
    Ended { grabbed: Entity },
}
