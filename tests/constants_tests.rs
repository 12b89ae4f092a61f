// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(BASE_RADIUS > 0.0);
    assert!(MAX_AMP_DISPLACEMENT >= 0.0);
    // noise must never fold a particle through the center
    assert!(NOISE_AMPLITUDE < BASE_RADIUS);
    assert!(INTERACTION_RADIUS > 0.0);
    assert!(POINTER_FORCE_JITTER >= 0.0 && POINTER_FORCE_JITTER < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn color_mapping_stays_in_unit_range() {
    assert!(BASE_SATURATION + SATURATION_GAIN <= 1.0);
    assert!(BASE_LIGHTNESS + LIGHTNESS_GAIN <= 1.0);
    for hue in [HIGHLIGHT_HUE_ENGAGED, HIGHLIGHT_HUE_RELEASED] {
        assert!((0.0..1.0).contains(&hue));
    }
    assert!(HIGHLIGHT_HUE_ENGAGED != HIGHLIGHT_HUE_RELEASED);
    assert!(HUE_JITTER >= 0.0 && SWIRL_SPAN >= 0.0);
    assert!(HUE_JITTER + SWIRL_SPAN < 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_projection_reaches_the_sphere() {
    // camera sits outside the displaced sphere
    assert!(CAMERA_Z > BASE_RADIUS + MAX_AMP_DISPLACEMENT);
    assert!(POINTER_RAY_DISTANCE > 0.0 && POINTER_RAY_DISTANCE < CAMERA_Z);
    assert!((CAMERA_Z - POINTER_RAY_DISTANCE - BASE_RADIUS).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_window_is_a_power_of_two() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
    assert_eq!(TIME_DOMAIN_MIDPOINT, 128.0);
}
