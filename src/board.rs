use crate::device::{GpioBank, LedPin};
use crate::pin_map::PinId;
use crate::{BlinkResult, PinError};
use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::OutputPin;
use std::thread::sleep;
use std::time::Duration;

/// Platform collaborators the blink controller starts from.
///
/// A board hands out one LED pin already configured as an output and a blocking timer.
/// The pin is requested once; boards may refuse a second request.
pub trait Board {
    type Led: OutputPin;
    type Timer: DelayMs<u32>;

    /// Brings up line-based text output. Failures are ignored.
    fn init_console(&mut self);

    fn led(&mut self, pin: PinId) -> BlinkResult<Self::Led>;

    fn timer(&mut self) -> Self::Timer;
}

/// Installs the `tracing` console subscriber on stderr.
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_console() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Blocking delay backed by `std::thread::sleep`.
#[derive(Copy, Clone, Debug, Default)]
pub struct SleepTimer;

impl DelayMs<u32> for SleepTimer {
    fn delay_ms(&mut self, ms: u32) {
        sleep(Duration::from_millis(u64::from(ms)));
    }
}

impl DelayMs<u16> for SleepTimer {
    fn delay_ms(&mut self, ms: u16) {
        sleep(Duration::from_millis(u64::from(ms)));
    }
}

impl DelayUs<u32> for SleepTimer {
    fn delay_us(&mut self, us: u32) {
        sleep(Duration::from_micros(u64::from(us)));
    }
}

/// The ODROID-C2 the demo runs on: memory-mapped GPIO and thread sleeps.
#[derive(Debug)]
pub struct HostBoard {
    bank: Option<GpioBank>,
}

impl HostBoard {
    /// Maps the board's GPIO block. See `GpioBank::open` for the device files involved.
    pub fn open() -> BlinkResult<Self> {
        Ok(Self::with_bank(GpioBank::open()?))
    }

    pub fn with_bank(bank: GpioBank) -> Self {
        Self { bank: Some(bank) }
    }
}

impl Board for HostBoard {
    type Led = LedPin;
    type Timer = SleepTimer;

    fn init_console(&mut self) {
        init_console();
    }

    fn led(&mut self, pin: PinId) -> BlinkResult<LedPin> {
        let bank = self.bank.take().ok_or(PinError::AlreadyTaken(pin))?;
        bank.into_output(pin)
    }

    fn timer(&mut self) -> SleepTimer {
        SleepTimer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlinkError;
    use memmap::MmapMut;
    use std::time::Instant;

    fn anon_board() -> HostBoard {
        HostBoard::with_bank(GpioBank::from_map(
            MmapMut::map_anon(GpioBank::block_size()).unwrap(),
        ))
    }

    #[test]
    fn led_is_handed_out_once() {
        let mut board = anon_board();

        assert!(board.led(PinId::Phy7).is_ok());
        match board.led(PinId::Phy11) {
            Err(BlinkError::PinError(PinError::AlreadyTaken(PinId::Phy11))) => {}
            other => panic!("unexpected second lease: {:?}", other.map(|pin| pin.id())),
        }
    }

    #[test]
    fn console_init_is_repeatable() {
        init_console();
        init_console();
    }

    #[test]
    fn sleep_timer_blocks_for_at_least_the_delay() {
        let started = Instant::now();
        SleepTimer.delay_ms(20u32);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
