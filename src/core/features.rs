use super::constants::TIME_DOMAIN_MIDPOINT;

/// Per-frame audio features consumed by the particle field.
///
/// Both values are normalized to \[0, 1\]. `amplitude` is a loudness proxy
/// (drives radial displacement); `centroid` is a brightness proxy (drives hue).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioFeatures {
    pub amplitude: f32,
    pub centroid: f32,
}

impl AudioFeatures {
    /// Snapshot used whenever no audio is playing or loading failed.
    pub const SILENT: AudioFeatures = AudioFeatures {
        amplitude: 0.0,
        centroid: 0.0,
    };

    pub fn new(amplitude: f32, centroid: f32) -> Self {
        Self {
            amplitude: amplitude.clamp(0.0, 1.0),
            centroid: centroid.clamp(0.0, 1.0),
        }
    }

    /// Derive both features from analyser byte buffers.
    pub fn from_buffers(frequency: &[u8], time_domain: &[u8]) -> Self {
        Self {
            amplitude: global_amplitude(time_domain),
            centroid: spectral_centroid(frequency),
        }
    }
}

/// Mean absolute deviation of unsigned 8-bit samples from their midpoint,
/// normalized so a full-scale square wave maps to 1.
pub fn global_amplitude(time_domain: &[u8]) -> f32 {
    if time_domain.is_empty() {
        return 0.0;
    }
    let sum: f32 = time_domain
        .iter()
        .map(|&b| (b as f32 - TIME_DOMAIN_MIDPOINT).abs())
        .sum();
    (sum / time_domain.len() as f32 / TIME_DOMAIN_MIDPOINT).clamp(0.0, 1.0)
}

/// Energy-weighted mean bin index, normalized by the highest index.
///
/// Returns 0 when there is no energy at all or fewer than two bins.
pub fn spectral_centroid(frequency: &[u8]) -> f32 {
    let n = frequency.len();
    if n < 2 {
        return 0.0;
    }
    let mut weighted = 0.0f64;
    let mut total = 0.0f64;
    for (i, &v) in frequency.iter().enumerate() {
        let e = v as f64;
        weighted += i as f64 * e;
        total += e;
    }
    if total <= 0.0 {
        return 0.0;
    }
    ((weighted / total) / (n - 1) as f64).clamp(0.0, 1.0) as f32
}
