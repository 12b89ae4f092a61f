use super::constants::*;

/// Tunable parameters for a particle field.
///
/// Defaults come from `constants.rs`; `apply_query` lets a page URL override a
/// handful of them (`?particles=8000&rotation=0`).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub base_radius: f32,
    pub max_amp_displacement: f32,
    pub noise_amplitude: f32,
    pub hue_jitter: f32,
    pub swirl_rate: f32,
    pub swirl_span: f32,
    pub interaction_radius: f32,
    pub force_scale: f32,
    pub force_jitter: f32,
    pub rotation_rate: f32,
    pub seed: u64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            base_radius: BASE_RADIUS,
            max_amp_displacement: MAX_AMP_DISPLACEMENT,
            noise_amplitude: NOISE_AMPLITUDE,
            hue_jitter: HUE_JITTER,
            swirl_rate: SWIRL_RATE,
            swirl_span: SWIRL_SPAN,
            interaction_radius: INTERACTION_RADIUS,
            force_scale: POINTER_FORCE_SCALE,
            force_jitter: POINTER_FORCE_JITTER,
            rotation_rate: ROTATION_RATE,
            seed: DEFAULT_SEED,
        }
    }
}

pub const MAX_PARTICLE_COUNT: usize = 200_000;

impl FieldParams {
    /// Apply `key=value` pairs from a URL query string (leading `?` optional).
    ///
    /// Unknown keys are ignored; malformed or out-of-range values are logged
    /// and leave the current value untouched.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };
            let ok = match key {
                "particles" => set_parsed(&mut self.count, value, |n: &usize| {
                    (1..=MAX_PARTICLE_COUNT).contains(n)
                }),
                "radius" => set_parsed(&mut self.base_radius, value, |r: &f32| {
                    r.is_finite() && *r > 0.0
                }),
                "amp" => set_parsed(&mut self.max_amp_displacement, value, |a: &f32| {
                    a.is_finite() && *a >= 0.0
                }),
                "noise" => set_parsed(&mut self.noise_amplitude, value, |n: &f32| {
                    n.is_finite() && *n >= 0.0
                }),
                "rotation" => set_parsed(&mut self.rotation_rate, value, |r: &f32| r.is_finite()),
                "reach" => set_parsed(&mut self.interaction_radius, value, |r: &f32| {
                    r.is_finite() && *r > 0.0
                }),
                "seed" => set_parsed(&mut self.seed, value, |_: &u64| true),
                _ => continue,
            };
            if !ok {
                log::warn!("[config] ignoring {}={}", key, value);
            }
        }
    }

    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        params.apply_query(query);
        params
    }
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, value: &str, valid: impl Fn(&T) -> bool) -> bool {
    match value.trim().parse::<T>() {
        Ok(v) if valid(&v) => {
            *slot = v;
            true
        }
        _ => false,
    }
}
