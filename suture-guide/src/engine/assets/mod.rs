//! Static scene description for the tutorial.
//!
//! The layout is a JSON asset so placements can be tuned without rebuilding.

/// Camera, needle, zone, drag plane and anatomy placements with validation.
pub mod scene_layout;
