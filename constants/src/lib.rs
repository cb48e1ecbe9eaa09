//! Fixed behaviour and presentation constants for the suturing tutorial.

/// Visual settings: colours, mesh sizes and the drag interaction plane.
pub mod render_settings;

/// Tutorial behaviour constants and default scene identifiers.
pub mod tutorial;
