use blink_cadence::{derive_delay, DELAY_FLOOR_MS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn non_positive_results_use_the_floor(result in i32::MIN..=0) {
        prop_assert_eq!(derive_delay(result), DELAY_FLOOR_MS);
    }

    #[test]
    fn positive_results_scale_by_three(result in 1i32..=1_431_655_765) {
        prop_assert_eq!(u64::from(derive_delay(result)), result as u64 * 3);
    }

    #[test]
    fn derivation_is_pure(result in any::<i32>()) {
        prop_assert_eq!(derive_delay(result), derive_delay(result));
    }

    #[test]
    fn delay_is_never_zero(result in any::<i32>()) {
        prop_assert!(derive_delay(result) >= 3);
    }
}
