//! The escape-time count for a single point.
//!
//! This is our classic iterator function: starting from `z = 0`,
//! repeatedly compute `z = z² + c` and count how many steps it takes
//! for `|z|` to pass 2.  Points that never get there within the limit
//! are taken to be inside the set.
//!
//! The real and imaginary parts and their squares are tracked by hand
//! rather than through `Complex` so that the magnitude test reuses the
//! squares computed for the next step and never needs a square root.

/// The squared magnitude past which an orbit is known to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Count the iterations it takes the orbit of `x0 + y0 i` to escape,
/// up to `max_iterations`.  A result equal to `max_iterations` means
/// the point never escaped.
///
/// The result depends on nothing but the arguments, so any number of
/// points can be evaluated concurrently and in any order.
#[inline]
pub fn escape_time(x0: f64, y0: f64, max_iterations: u32) -> u32 {
    let (mut x, mut y, mut x2, mut y2) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
    let mut iterations = 0;
    while x2 + y2 <= ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        y = 2.0 * x * y + y0;
        x = x2 - y2 + x0;
        x2 = x * x;
        y2 = y * y;
        iterations += 1;
    }
    iterations
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    // Straightforward complex arithmetic, for comparison.
    fn reference(c: Complex<f64>, limit: u32) -> u32 {
        let mut z = Complex::new(0.0, 0.0);
        let mut i = 0;
        while z.norm_sqr() <= 4.0 && i < limit {
            z = z * z + c;
            i += 1;
        }
        i
    }

    #[test]
    fn the_origin_never_escapes() {
        assert_eq!(escape_time(0.0, 0.0, 1000), 1000);
    }

    #[test]
    fn the_period_two_bulb_never_escapes() {
        assert_eq!(escape_time(-1.0, 0.0, 500), 500);
    }

    #[test]
    fn far_points_escape_after_one_step() {
        assert_eq!(escape_time(3.0, 0.0, 100), 1);
        assert_eq!(escape_time(-2.0, -2.0, 100), 1);
    }

    #[test]
    fn escape_counts_match_complex_arithmetic() {
        // 1 -> 2 -> 5: escapes on the third step.
        assert_eq!(escape_time(1.0, 0.0, 100), 3);
        for &(re, im) in &[(0.3, 0.5), (-0.75, 0.1), (0.26, 0.0), (-1.8, 0.01), (0.0, 1.1)] {
            assert_eq!(escape_time(re, im, 256), reference(Complex::new(re, im), 256));
        }
    }

    #[test]
    fn a_single_iteration_classifies_everything_as_inside() {
        for &(re, im) in &[(-2.0, -1.0), (0.0, -1.0), (5.0, 5.0), (0.1, 0.1)] {
            assert_eq!(escape_time(re, im, 1), 1);
        }
    }

    #[test]
    fn results_never_exceed_the_limit() {
        for step in 0..50 {
            let re = -2.0 + f64::from(step) * 0.05;
            assert!(escape_time(re, 0.3, 40) <= 40);
        }
    }
}
