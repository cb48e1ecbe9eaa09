//! Pointer interaction tools.
//!
//! The tutorial only needs to know when a grab starts and ends; the desktop
//! drag tool is the provider of those notifications. Other providers (touch,
//! XR controllers) would publish the same [`desktop_drag::GrabEvent`].

/// Mouse-driven grab and drag of [`desktop_drag::Draggable`] entities on a fixed plane.
pub mod desktop_drag;
