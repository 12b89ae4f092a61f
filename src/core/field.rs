use super::color::{hsl_to_rgb, wrap_hue};
use super::config::FieldParams;
use super::constants::*;
use super::features::AudioFeatures;
use super::pointer::PointerState;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Particle sphere whose positions and colors are recomputed from scratch every
/// frame.
///
/// Directions are sampled once and never change. Each `update` call overwrites
/// `positions`, `hsl` and `colors` in place; nothing accumulates between
/// frames, so the output depends only on the inputs of that call (plus the
/// per-frame noise drawn from the field's own RNG).
pub struct ParticleField {
    params: FieldParams,
    directions: Vec<Vec3>,
    positions: Vec<Vec3>,
    hsl: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let n = params.count;
        let mut directions = Vec::with_capacity(n);
        let mut positions = Vec::with_capacity(n);
        let mut hsl = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        for _ in 0..n {
            // acos of a uniform cosine gives equal density per unit area
            let polar = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let azimuth = rng.gen::<f32>() * TAU;
            let dir = spherical_to_unit(polar, azimuth);
            let hue = polar / PI;
            directions.push(dir);
            positions.push(dir * params.base_radius);
            hsl.push([hue, INIT_SATURATION, INIT_LIGHTNESS]);
            colors.push(hsl_to_rgb(hue, INIT_SATURATION, INIT_LIGHTNESS));
        }
        Self {
            params,
            directions,
            positions,
            hsl,
            colors,
            rng,
        }
    }

    /// Recompute every particle for the current frame.
    ///
    /// `features = None` means no audio is active and is treated as silence.
    /// `pointer = None` disables interaction for this frame.
    pub fn update(
        &mut self,
        features: Option<&AudioFeatures>,
        pointer: Option<PointerState>,
        time_sec: f32,
    ) {
        let f = features.copied().unwrap_or(AudioFeatures::SILENT);
        let p = &self.params;
        let swirl = p.swirl_span * (time_sec * p.swirl_rate).sin();
        let base_sat = (BASE_SATURATION + SATURATION_GAIN * f.amplitude).clamp(0.0, 1.0);
        let base_light = (BASE_LIGHTNESS + LIGHTNESS_GAIN * f.amplitude).clamp(0.0, 1.0);
        let radial = p.base_radius + f.amplitude * p.max_amp_displacement;
        let reach = p.interaction_radius;

        for i in 0..self.directions.len() {
            let dir = self.directions[i];
            let disp = radial + symmetric(&mut self.rng, p.noise_amplitude);
            let mut pos = dir * disp;

            let mut hue = wrap_hue(f.centroid + symmetric(&mut self.rng, p.hue_jitter) + swirl);
            let mut sat = base_sat;
            let mut light = base_light;

            if let Some(ptr) = pointer {
                let offset = pos - ptr.position;
                let dist = offset.length();
                if dist < reach {
                    let strength = 1.0 - dist / reach;
                    let jitter = 1.0 + symmetric(&mut self.rng, p.force_jitter);
                    let force = strength * strength * p.force_scale * jitter;
                    // pointer sits on the particle: push along its own direction
                    let away = if dist > f32::EPSILON {
                        offset / dist
                    } else {
                        dir
                    };
                    let (toward_hue, signed) = if ptr.engaged {
                        (HIGHLIGHT_HUE_ENGAGED, -force)
                    } else {
                        (HIGHLIGHT_HUE_RELEASED, force)
                    };
                    pos += away * signed;
                    hue += (toward_hue - hue) * strength;
                    sat = (sat + strength * POINTER_SATURATION_BOOST).clamp(0.0, 1.0);
                    light = (light + strength * POINTER_LIGHTNESS_BOOST).clamp(0.0, 1.0);
                }
            }

            let hue = wrap_hue(hue);
            self.positions[i] = pos;
            self.hsl[i] = [hue, sat, light];
            self.colors[i] = hsl_to_rgb(hue, sat, light);
        }
    }

    /// Rotation of the whole set about +Y at `time_sec`, wrapped into \[0, 2π).
    /// Applied by the renderer, never to `positions`.
    pub fn rotation(&self, time_sec: f32) -> f32 {
        let a = (time_sec * self.params.rotation_rate).rem_euclid(TAU);
        if a >= TAU {
            0.0
        } else {
            a
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn directions(&self) -> &[Vec3] {
        &self.directions
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-particle `[hue, saturation, lightness]` of the last update.
    pub fn hsl(&self) -> &[[f32; 3]] {
        &self.hsl
    }

    /// Per-particle RGB of the last update.
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }
}

/// Y-up spherical coordinates: polar angle measured from +Y.
#[inline]
pub fn spherical_to_unit(polar: f32, azimuth: f32) -> Vec3 {
    let (sp, cp) = polar.sin_cos();
    let (sa, ca) = azimuth.sin_cos();
    Vec3::new(sp * sa, cp, sp * ca)
}

#[inline]
fn symmetric(rng: &mut StdRng, bound: f32) -> f32 {
    if bound > 0.0 {
        rng.gen_range(-bound..=bound)
    } else {
        0.0
    }
}
