//! Easing curves for camera transitions.
//!
//! The camera drives both of its transitions from one curve: a cubic
//! ease-in-out stretched over a real-time window. Translation uses it as a
//! lerp factor (saturating at 1), rotation uses it as a rate multiplier.

/// Default real-time window, in seconds, over which [`ease`] saturates.
pub const EASE_SCALE: f32 = 4.0;

/// Cubic ease-in-out over normalized progress.
///
/// Input is clamped to [0.0, 1.0]. Slow near 0 and 1, fastest at 0.5.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// Cubic ease-in-out of `elapsed` seconds over a `scale`-second window.
///
/// Returns 0 at `elapsed <= 0` and exactly 1 once `elapsed >= scale`.
#[inline]
#[must_use]
pub fn ease_over(elapsed: f32, scale: f32) -> f32 {
    ease_in_out_cubic(elapsed / scale)
}

/// Cubic ease-in-out of `elapsed` seconds over the default 4 second window.
#[inline]
#[must_use]
pub fn ease(elapsed: f32) -> f32 {
    ease_over(elapsed, EASE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(EASE_SCALE), 1.0);
    }

    #[test]
    fn test_saturates_past_scale() {
        for t in [4.0, 4.001, 5.0, 10.0, 1000.0] {
            assert_eq!(ease(t), 1.0, "ease({t}) should saturate");
        }
    }

    #[test]
    fn test_negative_input_clamps_to_zero() {
        assert_eq!(ease(-1.0), 0.0);
    }

    #[test]
    fn test_midpoint_is_half() {
        assert_eq!(ease(2.0), 0.5);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn test_monotonic_over_window() {
        let mut prev = ease(0.0);
        for i in 1..=400 {
            let t = i as f32 * 0.01;
            let v = ease(t);
            assert!(v >= prev, "ease decreased at t={t}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_symmetry_about_midpoint() {
        for t in [0.1, 0.25, 0.4] {
            let lo = ease_in_out_cubic(t);
            let hi = ease_in_out_cubic(1.0 - t);
            assert!((lo + hi - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_quarter_window() {
        // p = 0.25 → 4 * 0.25³ = 0.0625
        assert!((ease(1.0) - 0.0625).abs() < 1e-7);
    }

    #[test]
    fn test_custom_scale() {
        assert_eq!(ease_over(1.0, 2.0), 0.5);
        assert_eq!(ease_over(2.0, 2.0), 1.0);
    }
}
