// File: crates/scale-core/src/rounding.rs
// Summary: Base-relative round/ceil/floor primitives used by tick synthesis.

/// Round `x` to the nearest multiple of `base`.
/// Contract: `base > 0`; not checked.
#[inline]
pub fn round_to(x: f64, base: f64) -> f64 {
    base * (x / base).round()
}

/// Smallest multiple of `base` that is `>= x`.
#[inline]
pub fn ceil_to(x: f64, base: f64) -> f64 {
    base * (x / base).ceil()
}

/// Largest multiple of `base` that is `<= x`.
#[inline]
pub fn floor_to(x: f64, base: f64) -> f64 {
    base * (x / base).floor()
}

/// Relative distance under which `x / base` is treated as a whole number.
pub const GRID_EPSILON: f64 = 1e-9;

/// `x / base`, snapped to the nearest integer when only float noise separates
/// them (`0.7 / 0.1` gives 7, not 6.999999999999999).
#[inline]
pub fn grid_ratio(x: f64, base: f64) -> f64 {
    let q = x / base;
    let r = q.round();
    if (q - r).abs() <= GRID_EPSILON * r.abs().max(1.0) { r } else { q }
}

/// Round `x` to `digits` fractional decimal digits (half away from zero).
#[inline]
pub fn round_decimals(x: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_base() {
        assert_eq!(round_to(12.0, 5.0), 10.0);
        assert_eq!(round_to(13.0, 5.0), 15.0);
        assert_eq!(round_to(-7.6, 5.0), -10.0);
    }

    #[test]
    fn ceil_and_floor_bracket_value() {
        assert_eq!(ceil_to(23.0, 5.0), 25.0);
        assert_eq!(floor_to(23.0, 5.0), 20.0);
        assert_eq!(ceil_to(-3.0, 5.0), 0.0);
        assert_eq!(floor_to(-3.0, 5.0), -5.0);
        // exact multiples are fixed points
        assert_eq!(ceil_to(20.0, 5.0), 20.0);
        assert_eq!(floor_to(20.0, 5.0), 20.0);
    }

    #[test]
    fn fractional_bases() {
        let c = ceil_to(1.21, 0.05);
        assert!((c - 1.25).abs() < 1e-12);
        let f = floor_to(1.79, 0.05);
        assert!((f - 1.75).abs() < 1e-12);
    }

    #[test]
    fn grid_ratio_absorbs_division_noise() {
        assert_eq!(0.7 / 0.1, 6.999999999999999);
        assert_eq!(grid_ratio(0.7, 0.1), 7.0);
        assert_eq!(grid_ratio(-0.7, 0.1), -7.0);
        assert_eq!(grid_ratio(1.8, 0.05), 36.0);
        // genuinely off-grid values are left alone
        assert_eq!(grid_ratio(0.75, 0.1), 7.5);
    }

    #[test]
    fn decimal_rounding() {
        assert_eq!(round_decimals(1.23456, 2), 1.23);
        assert_eq!(round_decimals(0.125, 0), 0.0);
        assert_eq!(round_decimals(2.5, 0), 3.0);
    }
}
