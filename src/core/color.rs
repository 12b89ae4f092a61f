/// Convert HSL (all components in \[0, 1\]) to linear RGB in \[0, 1\].
///
/// Hue wraps, so `1.25` is the same as `0.25`. Saturation and lightness are
/// clamped before conversion.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

#[inline]
fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    let c = if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    };
    c.clamp(0.0, 1.0)
}

/// Wrap a hue into \[0, 1). Guards the `rem_euclid` rounding case where a tiny
/// negative input lands exactly on 1.0.
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    let w = h.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}
