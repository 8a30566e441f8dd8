use crate::pin_map::PinId;
use std::io;
use thiserror::Error;

/// Enum representing possible failures when opening the GPIO bank.
///
/// - DeviceAccessFailed - There is no access to the device file, either because of insufficient permissions or operating system misconfiguration.
/// - MemoryMapFailed - The GPIO block of the device file could not be mapped into memory.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("failed to open memory device")]
    DeviceAccessFailed(#[source] nix::Error),
    #[error("failed to map device memory")]
    MemoryMapFailed(#[source] io::Error),
}

/// Enum representing possible failures when acquiring the LED pin.
///
/// - WrongPinId - The id is not covered by any register range known to this crate.
/// - AlreadyTaken - The board has already handed out its output pin.
#[derive(Error, Debug)]
pub enum PinError {
    #[error("unrecognized internal pin id: {0}")]
    WrongPinId(u8),
    #[error("output pin already taken, requested {0:?}")]
    AlreadyTaken(PinId),
}
