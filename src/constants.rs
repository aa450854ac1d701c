/// Web frontend tuning constants.
///
/// Scene tunables live in `sphere_core::constants`; these only cover the
/// browser side (element ids, frame pacing and diagnostics).
// Canvas element the WebGPU surface attaches to
pub const CANVAS_ID: &str = "app-canvas";

// Seconds between stats log lines
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;

// Frame deltas above this are treated as a tab resume, not slow frames
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Backing-store pixels are capped so 4K+ hiDPI screens stay cheap
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
