// Host-side tests for field configuration and URL overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod swarm {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use swarm::config::*;
use swarm::constants::*;

#[test]
fn defaults_come_from_constants() {
    let p = FieldParams::default();
    assert_eq!(p.count, PARTICLE_COUNT);
    assert_eq!(p.base_radius, BASE_RADIUS);
    assert_eq!(p.max_amp_displacement, MAX_AMP_DISPLACEMENT);
    assert_eq!(p.noise_amplitude, NOISE_AMPLITUDE);
    assert_eq!(p.interaction_radius, INTERACTION_RADIUS);
    assert_eq!(p.rotation_rate, ROTATION_RATE);
    assert_eq!(p.seed, DEFAULT_SEED);
}

#[test]
fn empty_query_keeps_defaults() {
    assert_eq!(FieldParams::from_query(""), FieldParams::default());
    assert_eq!(FieldParams::from_query("?"), FieldParams::default());
}

#[test]
fn query_overrides_known_keys() {
    let p = FieldParams::from_query(
        "?particles=1200&radius=2.5&rotation=0&noise=0.1&amp=0.8&reach=1.5&seed=9",
    );
    assert_eq!(p.count, 1200);
    assert_eq!(p.base_radius, 2.5);
    assert_eq!(p.rotation_rate, 0.0);
    assert_eq!(p.noise_amplitude, 0.1);
    assert_eq!(p.max_amp_displacement, 0.8);
    assert_eq!(p.interaction_radius, 1.5);
    assert_eq!(p.seed, 9);
}

#[test]
fn query_without_leading_question_mark_is_accepted() {
    let p = FieldParams::from_query("particles=10");
    assert_eq!(p.count, 10);
}

#[test]
fn invalid_values_are_ignored() {
    let p = FieldParams::from_query(
        "?particles=0&radius=-1&noise=abc&reach=inf&rotation=NaN&particles=99999999",
    );
    assert_eq!(p, FieldParams::default());
}

#[test]
fn unknown_keys_and_bare_flags_are_ignored() {
    let p = FieldParams::from_query("?debug&theme=dark&&particles=64");
    assert_eq!(p.count, 64);
    assert_eq!(p.base_radius, BASE_RADIUS);
}

#[test]
fn apply_query_layers_on_existing_params() {
    let mut p = FieldParams {
        count: 42,
        ..FieldParams::default()
    };
    p.apply_query("rotation=0.5");
    assert_eq!(p.count, 42);
    assert_eq!(p.rotation_rate, 0.5);
}

#[test]
fn particle_count_is_bounded() {
    let p = FieldParams::from_query(&format!("particles={}", MAX_PARTICLE_COUNT));
    assert_eq!(p.count, MAX_PARTICLE_COUNT);
    let p = FieldParams::from_query(&format!("particles={}", MAX_PARTICLE_COUNT + 1));
    assert_eq!(p.count, PARTICLE_COUNT);
}
