//! This crate drives a status LED at a cadence derived from an externally compiled routine.
//!
//! At startup the controller brings up the console, acquires the LED pin as an output, asks a
//! [`ComputationSource`] for one integer and turns it into a delay with [`derive_delay`].
//! After that the LED is toggled forever: high, wait, low, wait.
//!
//! The controller is generic over [`embedded_hal`](https://crates.io/crates/embedded-hal) output pins
//! and delays, so it can run on any board implementing [`Board`]. A memory-mapped GPIO backend for
//! ODROID-C2 rev2 is included as [`HostBoard`].
//!
//! The routine itself (`compiled_asm`) is linked in only with the `linked-routine` feature.
//! Without it, use [`Fixed`] or a closure as the source.

use thiserror::Error;

mod board;
mod cadence;
mod config;
mod controller;
mod device;
mod pin_map;
mod source;

pub use board::{init_console, Board, HostBoard, SleepTimer};
pub use cadence::{derive_delay, DELAY_FLOOR_MS};
pub use config::BlinkConfig;
pub use controller::{BlinkController, PinState, StopSignal};
pub use device::error::DeviceError;
pub use device::error::PinError;
pub use device::{GpioBank, LedPin};
pub use pin_map::PinId;
#[cfg(feature = "linked-routine")]
pub use source::LinkedRoutine;
pub use source::{ComputationSource, Fixed};

/// Main error type for this crate.
///
/// For more details, see `PinError` and `DeviceError` enums documentation.
#[derive(Error, Debug)]
pub enum BlinkError {
    #[error("error while operating on a pin")]
    PinError(#[source] device::error::PinError),
    #[error("error while operating on a device")]
    DeviceError(#[source] device::error::DeviceError),
}

impl From<PinError> for BlinkError {
    fn from(err: PinError) -> Self {
        BlinkError::PinError(err)
    }
}

impl From<DeviceError> for BlinkError {
    fn from(err: DeviceError) -> Self {
        BlinkError::DeviceError(err)
    }
}

pub type BlinkResult<T> = Result<T, BlinkError>;
