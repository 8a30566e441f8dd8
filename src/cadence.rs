use std::convert::TryFrom;

/// Shortest delay the LED is ever driven with, in milliseconds.
pub const DELAY_FLOOR_MS: u32 = 50;

const FLOOR_SCALE: i64 = 1000;
const DELAY_SCALE: i64 = 3;

/// Turns the routine's result into the half-period of the blink, in milliseconds.
///
/// The floor test scales the result by 1000 while the delay itself scales it by 3.
/// Both are kept exactly as the demo has always computed them, so `derive_delay(1)` is 3.
///
/// The arithmetic is widened to `i64`, so no `i32` input overflows. Delays beyond `u32::MAX`
/// saturate.
pub fn derive_delay(result: i32) -> u32 {
    let result = i64::from(result);

    if result * FLOOR_SCALE < i64::from(DELAY_FLOOR_MS) {
        DELAY_FLOOR_MS
    } else {
        let delay = result * DELAY_SCALE;
        u32::try_from(delay).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hits_the_floor() {
        assert_eq!(derive_delay(0), 50);
    }

    #[test]
    fn negative_results_hit_the_floor() {
        assert_eq!(derive_delay(-1), 50);
        assert_eq!(derive_delay(-5), 50);
        assert_eq!(derive_delay(i32::MIN), 50);
    }

    #[test]
    fn positive_results_scale_by_three() {
        assert_eq!(derive_delay(1), 3);
        assert_eq!(derive_delay(17), 51);
        assert_eq!(derive_delay(1000), 3000);
    }

    #[test]
    fn largest_results_saturate() {
        assert_eq!(derive_delay(1_431_655_765), 4_294_967_295);
        assert_eq!(derive_delay(1_431_655_766), u32::MAX);
        assert_eq!(derive_delay(i32::MAX), u32::MAX);
    }
}
