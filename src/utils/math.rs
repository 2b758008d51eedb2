//! Numeric helpers for the experiment harness.

use crate::config::MAX_ITERATIONS;
use crate::core::types::Duration;
use crate::core::SiScalar;

/// Number of fixed steps covering `duration`, rounded to the nearest integer.
///
/// Halves round away from zero. Returns `None` when the ratio is negative or
/// not finite, or when it rounds above [`MAX_ITERATIONS`].
pub fn calculate_iterations(time_step: Duration, duration: Duration) -> Option<usize> {
    let ratio = (duration / time_step).si();
    if !ratio.is_finite() || ratio < 0.0 {
        return None;
    }
    let rounded = ratio.round();
    if rounded > MAX_ITERATIONS as f64 {
        return None;
    }
    Some(rounded as usize)
}

/// Whether `duration` is a whole number of `time_step`s, up to rounding noise.
pub fn divides_evenly(time_step: Duration, duration: Duration) -> bool {
    let ratio = (duration / time_step).si();
    (ratio - ratio.round()).abs() <= 1e-9 * ratio.abs().max(1.0)
}

/// Largest absolute element-wise difference of two sequences.
///
/// Only the common prefix is compared.
pub fn max_abs_difference(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{millisecond, second};

    fn ms(value: f64) -> Duration {
        Duration::new::<millisecond>(value)
    }

    fn s(value: f64) -> Duration {
        Duration::new::<second>(value)
    }

    #[test]
    fn iterations_round_to_nearest() {
        assert_eq!(calculate_iterations(ms(0.1), s(2.0)), Some(20_000));
        assert_eq!(calculate_iterations(ms(1.0), s(2.0)), Some(2_000));
        assert_eq!(calculate_iterations(ms(10.0), s(1.5)), Some(150));
        assert_eq!(calculate_iterations(ms(7.0), s(2.0)), Some(286));
        assert_eq!(calculate_iterations(s(0.25), s(0.625)), Some(3));
    }

    #[test]
    fn empty_duration_takes_no_steps() {
        assert_eq!(calculate_iterations(ms(1.0), s(0.0)), Some(0));
    }

    #[test]
    fn degenerate_steps_have_no_count() {
        assert_eq!(calculate_iterations(s(0.0), s(1.0)), None);
        assert_eq!(calculate_iterations(s(-1.0), s(1.0)), None);
        assert_eq!(calculate_iterations(s(f64::NAN), s(1.0)), None);
    }

    #[test]
    fn step_counts_above_the_cap_are_refused() {
        assert_eq!(calculate_iterations(s(1e-300), s(2.0)), None);

        let at_cap = s(1.0 / MAX_ITERATIONS as f64);
        assert_eq!(calculate_iterations(at_cap, s(1.0)), Some(MAX_ITERATIONS));
        assert_eq!(calculate_iterations(at_cap, s(2.0)), None);
    }

    #[test]
    fn even_division() {
        assert!(divides_evenly(ms(5.0), s(1.5)));
        assert!(!divides_evenly(ms(7.0), s(2.0)));
    }

    #[test]
    fn difference_of_sequences() {
        assert_eq!(max_abs_difference(&[1.0, 2.0, 3.0], &[1.0, 2.5, 2.0]), 1.0);
        assert_eq!(max_abs_difference(&[], &[]), 0.0);
    }
}
