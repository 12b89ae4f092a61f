// Default tuning for the particle sphere. `FieldParams::default()` reads these;
// URL query overrides are applied on top (see `config.rs`).

// Field layout
pub const PARTICLE_COUNT: usize = 6000;
pub const BASE_RADIUS: f32 = 1.6; // resting sphere radius in world units
pub const MAX_AMP_DISPLACEMENT: f32 = 1.1; // extra radius at full amplitude
pub const NOISE_AMPLITUDE: f32 = 0.04; // per-frame radial jitter, symmetric

// Color mapping
pub const INIT_SATURATION: f32 = 0.7;
pub const INIT_LIGHTNESS: f32 = 0.5;
pub const HUE_JITTER: f32 = 0.04; // per-particle hue noise, symmetric
pub const SWIRL_RATE: f32 = 0.35; // rad/s of the slow hue swirl
pub const SWIRL_SPAN: f32 = 0.2; // swirl amplitude in hue units
pub const BASE_SATURATION: f32 = 0.55;
pub const SATURATION_GAIN: f32 = 0.45;
pub const BASE_LIGHTNESS: f32 = 0.35;
pub const LIGHTNESS_GAIN: f32 = 0.35;

// Pointer interaction
pub const INTERACTION_RADIUS: f32 = 0.9;
pub const POINTER_FORCE_SCALE: f32 = 0.6; // displacement at strength 1
pub const POINTER_FORCE_JITTER: f32 = 0.15; // multiplicative, symmetric
pub const HIGHLIGHT_HUE_ENGAGED: f32 = 0.95; // magenta while held
pub const HIGHLIGHT_HUE_RELEASED: f32 = 0.52; // cyan while hovering
pub const POINTER_SATURATION_BOOST: f32 = 0.4;
pub const POINTER_LIGHTNESS_BOOST: f32 = 0.3;

// Global transform
pub const ROTATION_RATE: f32 = 0.08; // rad/s about +Y; 0 disables

// Analysis
pub const ANALYSER_FFT_SIZE: u32 = 1024;
pub const TIME_DOMAIN_MIDPOINT: f32 = 128.0;

pub const DEFAULT_SEED: u64 = 0x5EED_0F_5A_A7;
