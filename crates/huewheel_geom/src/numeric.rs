//! Small numeric helpers shared by every shape.

/// Reduce an angle in degrees into `[0, 360)`.
///
/// Negative inputs wrap around instead of producing negative remainders.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs due to rounding
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Round to the nearest integer, with halves rounding toward positive infinity.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamp a channel value into `[0, 100]`.
///
/// NaN collapses to 0 so a degenerate pointer sample can never leak out.
#[inline]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees_negative() {
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(-720.0), 0.0);
    }

    #[test]
    fn test_wrap_degrees_large() {
        assert_eq!(wrap_degrees(450.0), 90.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
    }

    #[test]
    fn test_wrap_degrees_tiny_negative_stays_in_range() {
        let wrapped = wrap_degrees(-1e-20);
        assert!((0.0..360.0).contains(&wrapped));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-3.0), 0.0);
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }
}
