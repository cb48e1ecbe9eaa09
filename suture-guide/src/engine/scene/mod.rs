//! Tutorial scene construction.
//!
//! Spawns the camera, lighting, anatomy block, draggable needle, the three
//! target zones and the UI text, all named so the tutorial can bind to them.

/// Scene spawning from the loaded [`crate::engine::assets::scene_layout::SceneLayout`].
pub mod tutorial_scene;
