use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub layout_ready: bool,
    /// Set when the built-in layout had to stand in for the bundled one.
    pub used_fallback: bool,
}
