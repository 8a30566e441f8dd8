use crate::pin_map::PinId;

/// Settings the blink controller starts with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlinkConfig {
    /// Pin driving the status LED.
    pub led: PinId,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            led: PinId::DEFAULT_LED,
        }
    }
}

impl BlinkConfig {
    pub fn with_led(led: PinId) -> Self {
        Self { led }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_led_is_the_board_default() {
        assert_eq!(BlinkConfig::default().led, PinId::Phy7);
        assert_eq!(BlinkConfig::with_led(PinId::Phy12).led, PinId::Phy12);
    }
}
