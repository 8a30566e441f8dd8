use crate::device::error::PinError;
use derive_try_from_primitive::TryFromPrimitive;
use std::convert::TryFrom;

/// Header pins of the ODROID-C2 able to drive an LED, keyed by physical position.
///
/// The discriminant is the pin's internal GPIO number, used to locate its bit in the
/// memory-mapped registers.
#[repr(u8)]
#[derive(TryFromPrimitive, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PinId {
    Phy7 = 249,
    Phy8 = 240,
    Phy10 = 241,
    Phy11 = 247,
    Phy12 = 238,
    Phy13 = 239,
    Phy15 = 237,
    Phy16 = 236,
    Phy18 = 233,
    Phy19 = 235,
    Phy21 = 232,
    Phy22 = 231,
    Phy23 = 230,
    Phy24 = 229,
    Phy26 = 225,
    Phy27 = 207,
    Phy28 = 208,
    Phy29 = 228,
    Phy31 = 219,
    Phy32 = 224,
    Phy33 = 234,
    Phy35 = 214,
    Phy36 = 218,
}

impl PinId {
    /// Pin the status LED's anode is wired to unless configured otherwise.
    pub const DEFAULT_LED: PinId = PinId::Phy7;

    /// Looks up a pin by its internal GPIO number.
    pub fn from_raw(raw: u8) -> Result<Self, PinError> {
        PinId::try_from(raw).map_err(|_| PinError::WrongPinId(raw))
    }

    pub fn raw(self) -> u8 {
        self as u8
    }
}
