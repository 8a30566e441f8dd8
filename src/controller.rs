use crate::board::Board;
use crate::cadence::derive_delay;
use crate::config::BlinkConfig;
use crate::source::ComputationSource;
use crate::BlinkResult;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Level last written to the LED pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinState {
    High,
    Low,
}

/// Shared flag asking a running blink loop to stop.
///
/// The loop looks at it between full cycles, so it always stops with the LED low.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Owns the LED pin and the timer and toggles the pin at a fixed cadence.
#[derive(Debug)]
pub struct BlinkController<P, T> {
    led: P,
    timer: T,
    delay_ms: u32,
    state: Option<PinState>,
}

impl<P, T> BlinkController<P, T>
where
    P: OutputPin,
    T: DelayMs<u32>,
{
    /// Runs the startup sequence on `board`.
    ///
    /// In order: console bring-up, LED pin acquisition as an output, one call to `source`,
    /// delay derivation. Only pin acquisition can fail.
    pub fn start<B, S>(board: &mut B, config: &BlinkConfig, source: &mut S) -> BlinkResult<Self>
    where
        B: Board<Led = P, Timer = T>,
        S: ComputationSource + ?Sized,
    {
        board.init_console();
        debug!("console ready");

        let led = board.led(config.led)?;
        debug!(pin = ?config.led, "LED pin configured as output");

        let result = source.compute();
        let delay_ms = derive_delay(result);
        info!(result, delay_ms, "blink cadence derived");

        Ok(Self::new(led, board.timer(), delay_ms))
    }

    pub fn new(led: P, timer: T, delay_ms: u32) -> Self {
        Self {
            led,
            timer,
            delay_ms,
            state: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Level last written, `None` before the first cycle.
    pub fn state(&self) -> Option<PinState> {
        self.state
    }

    /// One full period: high, wait, low, wait.
    pub fn cycle(&mut self) -> Result<(), P::Error> {
        self.drive(PinState::High)?;
        self.drive(PinState::Low)
    }

    /// Blinks forever.
    pub fn run(&mut self) -> Result<Infallible, P::Error> {
        loop {
            self.cycle()?;
        }
    }

    /// Blinks until `stop` is raised and returns the number of completed cycles.
    pub fn run_until(&mut self, stop: &StopSignal) -> Result<u64, P::Error> {
        let mut cycles = 0;
        while !stop.is_raised() {
            self.cycle()?;
            cycles += 1;
        }

        debug!(cycles, "blink loop stopped");
        Ok(cycles)
    }

    pub fn run_cycles(&mut self, cycles: u64) -> Result<(), P::Error> {
        for _ in 0..cycles {
            self.cycle()?;
        }
        Ok(())
    }

    /// Gives the pin and timer back.
    pub fn release(self) -> (P, T) {
        (self.led, self.timer)
    }

    fn drive(&mut self, level: PinState) -> Result<(), P::Error> {
        match level {
            PinState::High => self.led.set_high()?,
            PinState::Low => self.led.set_low()?,
        }
        self.state = Some(level);
        trace!(?level, delay_ms = self.delay_ms, "LED driven");

        self.timer.delay_ms(self.delay_ms);
        Ok(())
    }
}
