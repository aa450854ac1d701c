use std::f32::consts::PI;

// Shared scene tuning constants used by both web and native frontends.

// Population
pub const MAX_POINTS: usize = 1500; // steady-state number of points
pub const POINT_COUNT_SPRING: f32 = 0.05; // per-frame lerp factor for the point count

// Shell geometry
pub const BASE_RADIUS: f32 = 200.0; // shell radius with no scroll
pub const INITIAL_SCALE: f32 = 0.0; // collective radius grows from nothing
pub const SCALE_SPRING: f32 = 0.02; // per-frame lerp factor for the collective radius

// Scroll zoom
pub const SCROLL_ZOOM_PER_PX: f32 = 0.02; // scale factor gained per scrolled pixel
pub const MAX_SCALE_FACTOR: f32 = 5.0;

// Scene rotation (radians). The first frame uses the initial values; every
// frame after that uses the held values.
pub const ROTATION_INITIAL: f32 = 0.003;
pub const ROTATION_HELD: f32 = 30.0;
pub const VERTICAL_SHIFT_PER_FRAME: f32 = 0.0015;

// Point motion
pub const DRIFT_STEP: f32 = 0.6; // distance along `direction` per frame before re-projection
pub const BOB_FREQUENCY: f32 = 0.005; // radians per frame
pub const BOB_AMPLITUDE: f32 = 0.03;

// Point appearance
pub const POINT_RADIUS_BASE: f32 = 0.6;
pub const SIZE_FACTORS: [f32; 4] = [0.4, 0.5, 1.0, 2.0];
// Duplicate entry weights the blue twice as often as white.
pub const PALETTE: [&str; 3] = ["#ffffff", "#588DFF", "#588DFF"];

// Pole-biased sampler
pub const MID_BAND_COS: f32 = 0.3; // |cos(phi0)| below this counts as mid-band
pub const MID_BAND_PHI: (f32, f32) = (PI, 3.0 * PI);
pub const POLE_PHI: (f32, f32) = (0.8 * PI, PI);
