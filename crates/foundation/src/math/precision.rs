//! Decimal rounding helpers.
//!
//! Grid labels are rounded to the resolution of the grid spacing before they
//! are formatted, so these helpers are deterministic and never produce `-0.0`.

/// Canonicalize a floating-point value.
///
/// Rules:
/// - `-0.0` becomes `0.0`
/// - all NaNs become a single canonical NaN
pub fn canonical_f64(v: f64) -> f64 {
    if v == 0.0 {
        // Handles +0.0 and -0.0.
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

/// Round `v` to `decimals` fractional digits (half away from zero).
pub fn round_to_decimals(v: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    canonical_f64((v * scale).round() / scale)
}

/// Integer-valued check with an absolute tolerance.
pub fn is_near_integer(v: f64, eps: f64) -> bool {
    (v - v.round()).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::{canonical_f64, is_near_integer, round_to_decimals};

    #[test]
    fn canonicalizes_negative_zero() {
        assert_eq!(canonical_f64(-0.0).to_bits(), 0.0f64.to_bits());
        assert!(canonical_f64(f64::NAN).is_nan());
    }

    #[test]
    fn rounds_to_requested_digits() {
        assert_eq!(round_to_decimals(12.345_6, 0), 12.0);
        assert_eq!(round_to_decimals(12.345_6, 1), 12.3);
        assert_eq!(round_to_decimals(-0.049_9, 2), -0.05);
        assert_eq!(round_to_decimals(0.123_45, 3), 0.123);
    }

    #[test]
    fn rounding_small_negative_gives_positive_zero() {
        let r = round_to_decimals(-0.000_1, 1);
        assert_eq!(r.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn near_integer_tolerance() {
        assert!(is_near_integer(2.000_000_000_1, 1e-9));
        assert!(is_near_integer(-3.0, 0.0));
        assert!(!is_near_integer(2.5, 1e-9));
    }
}
