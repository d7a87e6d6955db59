use rgb_hsv::{hsv_to_rgb, rgb_to_hsv, try_hsv_to_rgb, try_rgb_to_hsv, ColorError};

#[cfg(test)]
mod range_tests {
    use super::*;

    #[test]
    fn test_try_rgb_to_hsv_reports_first_bad_channel() {
        let err = try_rgb_to_hsv(0.5, 2.0, -1.0).unwrap_err();
        assert_eq!(
            err,
            ColorError::OutOfRange {
                channel: "green",
                value: 2.0
            }
        );
    }

    #[test]
    fn test_try_hsv_to_rgb_rejects_infinity() {
        assert!(matches!(
            try_hsv_to_rgb(0.2, 0.5, f64::INFINITY),
            Err(ColorError::OutOfRange { channel: "value", .. })
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(try_rgb_to_hsv(0.0, 1.0, 0.0).is_ok());
        assert!(try_hsv_to_rgb(1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    #[should_panic(expected = "red out of range")]
    fn test_rgb_to_hsv_fails_fast_on_nan() {
        rgb_to_hsv(f64::NAN, 0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "saturation out of range")]
    fn test_hsv_to_rgb_fails_fast_above_one() {
        hsv_to_rgb(0.5, 1.5, 0.5);
    }
}
