use byteorder::{ByteOrder, NativeEndian};
use memmap::MmapMut;
use std::mem::size_of;

/// The mapped GPIO block, addressed in 32-bit registers.
#[derive(Debug)]
pub struct Memory {
    map: MmapMut,
}

impl Memory {
    pub fn new(map: MmapMut) -> Self {
        Self { map }
    }

    pub fn read_u32(&self, offset: usize) -> u32 {
        NativeEndian::read_u32(&self.map[offset..offset + size_of::<u32>()])
    }

    pub fn write_u32(&mut self, offset: usize, value: u32) {
        NativeEndian::write_u32(&mut self.map[offset..offset + size_of::<u32>()], value);
    }

    pub fn set_bit(&mut self, offset: usize, bit: u8) {
        let value = self.read_u32(offset);
        self.write_u32(offset, value | (1 << bit));
    }

    pub fn clear_bit(&mut self, offset: usize, bit: u8) {
        let value = self.read_u32(offset);
        self.write_u32(offset, value & !(1 << bit));
    }

    pub fn bit(&self, offset: usize, bit: u8) -> bool {
        self.read_u32(offset) & (1 << bit) != 0
    }
}
