/// Number of passes (and target zones) in one suturing exercise.
pub const PASSES: usize = 3;

/// Tip-to-anchor distance below which the needle counts as placed in a zone.
/// The comparison is strict: exactly this distance is outside.
pub const PLACEMENT_DISTANCE: f32 = 0.22;

/// Length of the post-pass feedback window, during which further passes are locked out.
pub const FEEDBACK_DURATION_MS: u64 = 1200;

/// Zone identifiers in pass order.
pub const ZONE_IDS: [&str; PASSES] = ["zone-1", "zone-2", "zone-3"];

/// Default entity names bound to the tutorial roles at start-up.
pub const NEEDLE_ID: &str = "needle";
pub const NEEDLE_TIP_ID: &str = "needle-point";
pub const ANATOMY_ID: &str = "anatomy";
pub const PROMPT_ID: &str = "step-prompt";
pub const COUNTER_ID: &str = "step-counter";
pub const RELEASE_ZONE_ID: &str = "release-zone";

/// Success tone: short sine blip.
pub const TONE_FREQUENCY_HZ: f32 = 880.0;
pub const TONE_DURATION_MS: u64 = 150;
pub const TONE_VOLUME: f32 = 0.15;

/// Scene layout asset, relative to the asset root.
pub const SCENE_LAYOUT_PATH: &str = "scene_layout.json";
