use bevy::prelude::*;

/// Needle tip colour when away from the active zone.
pub const TIP_NEUTRAL_COLOUR: Color = Color::srgb(0.91, 0.91, 0.91);

/// Needle tip colour while inside the placement distance.
pub const TIP_NEAR_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);

/// Zone ring colour right after its pass completes.
pub const RING_HIGHLIGHT_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);

/// Zone ring resting colour.
pub const RING_DIM_COLOUR: Color = Color::srgb(0.0, 0.8, 0.0);

pub const PROMPT_COLOUR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const COUNTER_COLOUR: Color = Color::srgb(0.75, 0.78, 0.82);
pub const RELEASE_BANNER_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);

/// Fallback drag plane: everything grabbed is held on this plane.
pub const DRAG_PLANE_POINT: Vec3 = Vec3::new(0.0, 0.55, -1.15);
pub const DRAG_PLANE_NORMAL: Vec3 = Vec3::new(0.0, 0.0, -1.0);

pub const NEEDLE_LENGTH: f32 = 0.18;
pub const NEEDLE_RADIUS: f32 = 0.006;
pub const NEEDLE_TIP_RADIUS: f32 = 0.012;
pub const ZONE_RING_RADIUS: f32 = 0.08;
pub const ZONE_RING_THICKNESS: f32 = 0.008;

/// Half-width padding added around the needle mesh for pointer hit tests.
pub const GRAB_PADDING: f32 = 0.03;

pub const PROMPT_FONT_SIZE: f32 = 24.0;
pub const COUNTER_FONT_SIZE: f32 = 16.0;
