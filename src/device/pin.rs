use super::error::PinError;
use super::memory::Memory;
use crate::pin_map::PinId;
use embedded_hal::digital::v2 as eh;
use std::convert::Infallible;
use std::mem::size_of;
use std::ops::RangeInclusive;
use tracing::trace;

#[derive(Copy, Clone, Debug)]
enum RegistersRangeType {
    DV,
    Y,
    X,
}

/// Offsets of the registers controlling one output pin.
#[derive(Copy, Clone, Debug)]
pub struct RegistersOffsets {
    pin_id: PinId,
    range_type: RegistersRangeType,
}

impl RegistersOffsets {
    /* GPIO registers of the ODROID-C2 are split into three banks (DV / Y / X), each covering a
     * contiguous range of internal pin ids. A pin's bit index is its distance from the start
     * of its bank's range.
     */
    const PIN_BASE: u8 = 136;
    const DV_PINS_RANGE: RangeInclusive<u8> = ((Self::PIN_BASE + 45)..=(Self::PIN_BASE + 74));
    const Y_PINS_RANGE: RangeInclusive<u8> = ((Self::PIN_BASE + 75)..=(Self::PIN_BASE + 91));
    const X_PINS_RANGE: RangeInclusive<u8> = ((Self::PIN_BASE + 92)..=(Self::PIN_BASE + 114));

    pub fn new(pin_id: PinId) -> Result<Self, PinError> {
        use RegistersRangeType::*;
        let raw = pin_id.raw();

        let range_type = if Self::DV_PINS_RANGE.contains(&raw) {
            DV
        } else if Self::Y_PINS_RANGE.contains(&raw) {
            Y
        } else if Self::X_PINS_RANGE.contains(&raw) {
            X
        } else {
            return Err(PinError::WrongPinId(raw));
        };

        Ok(Self { pin_id, range_type })
    }

    pub fn id(&self) -> PinId {
        self.pin_id
    }

    /// Function select: a cleared bit makes the pin an output.
    pub fn gpfsel(&self) -> usize {
        use RegistersRangeType::*;
        (match self.range_type {
            DV => 0x10C,
            Y => 0x10F,
            X => 0x118,
        } * size_of::<u32>())
    }

    /// Output level.
    pub fn gpset(&self) -> usize {
        use RegistersRangeType::*;
        (match self.range_type {
            DV => 0x10D,
            Y => 0x110,
            X => 0x119,
        } * size_of::<u32>())
    }

    pub fn bit(&self) -> u8 {
        self.pin_id.raw() - self.range().start()
    }

    fn range(&self) -> &'static RangeInclusive<u8> {
        use RegistersRangeType::*;
        match self.range_type {
            DV => &Self::DV_PINS_RANGE,
            Y => &Self::Y_PINS_RANGE,
            X => &Self::X_PINS_RANGE,
        }
    }
}

/// The LED pin, configured as an output.
///
/// Obtainable through `GpioBank::into_output`. The pin owns the mapped bank, so no other
/// handle can write to the same registers while it lives.
#[derive(Debug)]
pub struct LedPin {
    memory: Memory,
    registers: RegistersOffsets,
}

impl LedPin {
    pub(super) fn configure(mut memory: Memory, pin_id: PinId) -> Result<Self, PinError> {
        let registers = RegistersOffsets::new(pin_id)?;
        memory.clear_bit(registers.gpfsel(), registers.bit());

        Ok(Self { memory, registers })
    }

    pub fn id(&self) -> PinId {
        self.registers.id()
    }

    pub fn set(&mut self, high: bool) {
        let (offset, bit) = (self.registers.gpset(), self.registers.bit());
        trace!(pin = ?self.registers.id(), high, "writing output level");

        if high {
            self.memory.set_bit(offset, bit);
        } else {
            self.memory.clear_bit(offset, bit);
        }
    }

    pub fn is_set(&self) -> bool {
        self.memory
            .bit(self.registers.gpset(), self.registers.bit())
    }

    pub fn is_output(&self) -> bool {
        !self
            .memory
            .bit(self.registers.gpfsel(), self.registers.bit())
    }
}

impl eh::OutputPin for LedPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl eh::StatefulOutputPin for LedPin {
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.is_set())
    }

    fn is_set_low(&self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|v| !v)
    }
}
