use memmap::{MmapMut, MmapOptions};
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use std::convert::AsRef;
use std::fs::File;
use std::path::Path;
use tracing::debug;

pub mod error;
mod memory;
mod pin;

use crate::{pin_map::PinId, BlinkResult};
use error::DeviceError;
use memory::Memory;

pub use pin::LedPin;

/// The memory-mapped GPIO block of an ODROID-C2 rev2.
///
/// This struct owns the mapping of the GPIO registers and the device file handle backing it.
/// It is consumed when the LED pin is configured, so exactly one pin drives the registers.
#[derive(Debug)]
pub struct GpioBank {
    _file_handle: Option<File>,
    memory: Memory,
}

impl GpioBank {
    const GPIO_BASE_ADDR: u64 = 0xC8834000;
    const BLOCK_SIZE: usize = 4096;

    /// Opens and memory-maps the GPIO block.
    ///
    /// Superusers map `/dev/mem`; everybody else goes through `/dev/gpiomem`.
    /// Follow [rootless GPIO access](https://wiki.odroid.com/troubleshooting/gpiomem) on the ODROID wiki to avoid running as root.
    pub fn open() -> BlinkResult<Self> {
        use nix::unistd::Uid;

        let device_path = if Uid::current().is_root() {
            "/dev/mem"
        } else {
            "/dev/gpiomem"
        };

        debug!(device_path, "mapping GPIO block");
        let (file_handle, map) = Self::load_device_file(device_path)?;

        Ok(Self {
            _file_handle: Some(file_handle),
            memory: Memory::new(map),
        })
    }

    /// Uses an existing mapping as the GPIO block, e.g. an anonymous one of `BLOCK_SIZE` bytes.
    pub fn from_map(map: MmapMut) -> Self {
        Self {
            _file_handle: None,
            memory: Memory::new(map),
        }
    }

    /// Configures `pin_id` as an output and hands it out as the LED pin.
    pub fn into_output(self, pin_id: PinId) -> BlinkResult<LedPin> {
        let pin = LedPin::configure(self.memory, pin_id)?;
        debug!(pin = ?pin_id, "configured output pin");
        Ok(pin)
    }

    pub fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    fn load_device_file<T: AsRef<Path>>(device_path: T) -> BlinkResult<(File, MmapMut)> {
        use std::os::unix::io::FromRawFd;
        use DeviceError::*;

        let mut open_flags = OFlag::empty();
        open_flags.insert(OFlag::O_RDWR);
        open_flags.insert(OFlag::O_SYNC);
        open_flags.insert(OFlag::O_CLOEXEC);

        let file_fd =
            open(device_path.as_ref(), open_flags, Mode::empty()).map_err(DeviceAccessFailed)?;

        // SAFETY: Validity of file_fd is checked by Nix.
        let handle = unsafe { File::from_raw_fd(file_fd) };

        let mut map_opts = MmapOptions::new();
        map_opts.offset(Self::GPIO_BASE_ADDR);
        map_opts.len(Self::BLOCK_SIZE);

        // SAFETY: File handle is valid at this point.
        let map = unsafe { map_opts.map_mut(&handle).map_err(MemoryMapFailed)? };

        Ok((handle, map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};

    fn anon_bank() -> GpioBank {
        GpioBank::from_map(MmapMut::map_anon(GpioBank::block_size()).unwrap())
    }

    #[test]
    fn into_output_clears_function_select() {
        let mut map = MmapMut::map_anon(GpioBank::block_size()).unwrap();
        for byte in map.iter_mut() {
            *byte = 0xFF;
        }

        let pin = GpioBank::from_map(map).into_output(PinId::Phy7).unwrap();
        assert!(pin.is_output());
        assert_eq!(pin.id(), PinId::Phy7);
    }

    #[test]
    fn writes_toggle_the_output_bit() {
        let mut pin = anon_bank().into_output(PinId::DEFAULT_LED).unwrap();

        pin.set_high().unwrap();
        assert!(pin.is_set_high().unwrap());

        pin.set_low().unwrap();
        assert!(pin.is_set_low().unwrap());
    }

    #[test]
    fn pins_in_the_y_bank_map_to_their_own_registers() {
        let mut pin = anon_bank().into_output(PinId::Phy36).unwrap();

        pin.set_high().unwrap();
        assert!(pin.is_set_high().unwrap());
        assert!(pin.is_output());
    }
}
