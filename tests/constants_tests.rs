// Host-side tests for frontend constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use sphere_core::{BASE_RADIUS, MAX_POINTS, MAX_SCALE_FACTOR, PALETTE, SIZE_FACTORS};

#[test]
#[allow(clippy::assertions_on_constants)]
fn frontend_constants_are_sane() {
    assert!(!CANVAS_ID.is_empty());
    assert!(STATS_LOG_INTERVAL_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < STATS_LOG_INTERVAL_SEC);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_sane() {
    assert!(MAX_POINTS > 0);
    assert!(BASE_RADIUS > 0.0);
    assert!(MAX_SCALE_FACTOR >= 1.0);
    assert!(SIZE_FACTORS.iter().all(|&s| s > 0.0));
    assert!(PALETTE
        .iter()
        .all(|c| sphere_core::parse_hex_color(c).is_ok()));
}
