//! Scene layout loading.
//!
//! The layout asset is requested at startup and polled each frame until it is
//! either loaded or has failed. A failed or invalid layout is replaced by the
//! built-in one so the tutorial always starts.

/// Scene layout request, polling and fallback.
pub mod layout_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
