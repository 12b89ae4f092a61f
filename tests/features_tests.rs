// Host-side tests for audio feature extraction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod swarm {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod features {
        include!("../src/core/features.rs");
    }
}

use swarm::features::*;

#[test]
fn centroid_is_zero_without_energy() {
    assert_eq!(spectral_centroid(&[0u8; 512]), 0.0);
}

#[test]
fn centroid_is_one_when_energy_is_in_top_bin() {
    let mut bins = [0u8; 512];
    bins[511] = 200;
    assert!((spectral_centroid(&bins) - 1.0).abs() < 1e-6);
}

#[test]
fn centroid_is_zero_when_energy_is_in_bottom_bin() {
    let mut bins = [0u8; 64];
    bins[0] = 255;
    assert_eq!(spectral_centroid(&bins), 0.0);
}

#[test]
fn centroid_of_flat_spectrum_is_midpoint() {
    let bins = [90u8; 101];
    assert!((spectral_centroid(&bins) - 0.5).abs() < 1e-6);
}

#[test]
fn centroid_moves_up_with_brighter_spectra() {
    let mut dull = [0u8; 128];
    let mut bright = [0u8; 128];
    for i in 0..128 {
        dull[i] = (255 - 2 * i) as u8;
        bright[i] = (2 * i) as u8;
    }
    assert!(spectral_centroid(&bright) > spectral_centroid(&dull));
}

#[test]
fn centroid_of_degenerate_buffers_is_zero() {
    assert_eq!(spectral_centroid(&[]), 0.0);
    assert_eq!(spectral_centroid(&[255]), 0.0);
}

#[test]
fn amplitude_of_midpoint_signal_is_zero() {
    assert_eq!(global_amplitude(&[128u8; 1024]), 0.0);
    assert_eq!(global_amplitude(&[]), 0.0);
}

#[test]
fn amplitude_of_full_scale_square_is_one() {
    assert!((global_amplitude(&[0u8; 256]) - 1.0).abs() < 1e-6);
    let square: Vec<u8> = (0..256).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
    let a = global_amplitude(&square);
    assert!(a > 0.99 && a <= 1.0, "amplitude {a}");
}

#[test]
fn amplitude_is_mean_absolute_deviation() {
    // deviations 32 and 64 alternate -> mean 48 -> 48/128
    let samples: Vec<u8> = (0..100)
        .map(|i| if i % 2 == 0 { 160 } else { 64 })
        .collect();
    assert!((global_amplitude(&samples) - 48.0 / 128.0).abs() < 1e-6);
}

#[test]
fn from_buffers_combines_both_features() {
    let mut freq = [0u8; 32];
    freq[31] = 10;
    let time = [0u8; 16];
    let f = AudioFeatures::from_buffers(&freq, &time);
    assert!((f.amplitude - 1.0).abs() < 1e-6);
    assert!((f.centroid - 1.0).abs() < 1e-6);
}

#[test]
fn silent_snapshot_is_the_default() {
    assert_eq!(AudioFeatures::default(), AudioFeatures::SILENT);
    let f = AudioFeatures::from_buffers(&[0u8; 32], &[128u8; 32]);
    assert_eq!(f, AudioFeatures::SILENT);
}

#[test]
fn new_clamps_into_unit_range() {
    let f = AudioFeatures::new(1.7, -0.3);
    assert_eq!(f.amplitude, 1.0);
    assert_eq!(f.centroid, 0.0);
}
