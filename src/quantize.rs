//! Squeeze an iteration count into a palette index.

/// Palette index for points that never escaped.  In the xterm 256-color
/// cube this is black.
pub const INTERIOR: u8 = 16;

/// First palette index of the escape ramp.
pub const RAMP_START: u8 = 17;

/// Number of distinct ramp steps; the ramp covers indices 17 through 216.
pub const RAMP_STEPS: u64 = 200;

/// Map an iteration count to a palette index.  Interior points get
/// [`INTERIOR`]; everything else lands on a 200-step ramp that is
/// non-decreasing in `iterations`.  Indices 0-15 and 217-255 are
/// never produced.
#[inline]
pub fn quantize(iterations: u32, max_iterations: u32) -> u8 {
    if iterations >= max_iterations {
        return INTERIOR;
    }
    let step = u64::from(iterations) * RAMP_STEPS / u64::from(max_iterations);
    RAMP_START + step as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_points_are_black() {
        assert_eq!(quantize(1, 1), INTERIOR);
        assert_eq!(quantize(1000, 1000), INTERIOR);
        assert_eq!(quantize(1001, 1000), INTERIOR);
    }

    #[test]
    fn ramp_endpoints() {
        assert_eq!(quantize(0, 1000), 17);
        assert_eq!(quantize(999, 1000), 216);
        assert_eq!(quantize(500, 1000), 117);
        assert_eq!(quantize(0, 1), 17);
    }

    #[test]
    fn ramp_is_monotonic_and_bounded() {
        for &limit in &[1u32, 2, 7, 199, 200, 201, 5000] {
            let mut previous = 0;
            for n in 0..limit {
                let color = quantize(n, limit);
                assert!(color >= 17 && color <= 216, "{} of {} -> {}", n, limit, color);
                assert!(color >= previous);
                previous = color;
            }
        }
    }

    #[test]
    fn huge_limits_do_not_overflow() {
        let limit = u32::max_value();
        assert_eq!(quantize(limit - 1, limit), 216);
        assert_eq!(quantize(limit, limit), INTERIOR);
    }
}
