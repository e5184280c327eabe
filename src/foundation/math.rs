/// Clamp `v` into `[lo, hi]`.
///
/// Unlike [`f64::clamp`] this never panics: when `lo > hi` (a zoom below 1
/// produces an inverted range) the midpoint of the two bounds is returned.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        return 0.5 * (lo + hi);
    }
    v.max(lo).min(hi)
}

/// Linear interpolation from `a` to `b`; `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn is_unit(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
