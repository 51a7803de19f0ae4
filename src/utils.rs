// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bit-field extraction over raw instruction and extension words.
//!
//! Opcode layout used by the field functions:
//!
//! ```text
//!  15  12 11   9 8   6 5   3 2   0
//! | line | reg9 | mode6 | mode3 | reg0 |
//!               | size|
//! ```
//!
//! The size code overlaps the two low bits of `mode6` (bits 6 and 7).

use crate::error::DecodeError;

/// Checks if the given bit of the given data is set.
#[inline(always)]
pub const fn bit(data: u16, bit: u16) -> bool {
    data & (1 << bit) != 0
}

/// Returns bits `[beg, end]` inclusive, starting at 0.
#[inline(always)]
pub const fn bits(d: u16, beg: u16, end: u16) -> u16 {
    let mask = (1 << (end + 1 - beg)) - 1;
    d >> beg & mask
}

/// Register field in bits 0-2.
#[inline(always)]
pub const fn reg0(opcode: u16) -> u8 {
    bits(opcode, 0, 2) as u8
}

/// Register field in bits 9-11.
#[inline(always)]
pub const fn reg9(opcode: u16) -> u8 {
    bits(opcode, 9, 11) as u8
}

/// Size code in bits 6-7.
#[inline(always)]
pub const fn size_bits(opcode: u16) -> u8 {
    bits(opcode, 6, 7) as u8
}

/// Opcode line in bits 12-15.
#[inline(always)]
pub const fn line(opcode: u16) -> u8 {
    bits(opcode, 12, 15) as u8
}

/// Addressing mode field in bits 3-5.
#[inline(always)]
pub const fn mode3(opcode: u16) -> u8 {
    bits(opcode, 3, 5) as u8
}

/// Addressing mode field in bits 6-8.
#[inline(always)]
pub const fn mode6(opcode: u16) -> u8 {
    bits(opcode, 6, 8) as u8
}

/// Index register number of a brief extension word, bits 12-15.
///
/// Values 0 to 7 are data registers, 8 to 15 are address registers.
#[inline(always)]
pub const fn index_field(ext: u16) -> u8 {
    bits(ext, 12, 15) as u8
}

/// Trait to see if an address is even or not.
pub trait IsEven: Sized {
    fn is_even(self) -> bool;
    fn even(self) -> Result<Self, DecodeError>;
}

impl IsEven for u32 {
    #[inline(always)]
    fn is_even(self) -> bool {
        self & 1 == 0
    }

    #[inline(always)]
    fn even(self) -> Result<Self, DecodeError> {
        if self.is_even() {
            Ok(self)
        } else {
            Err(DecodeError::InvalidAlignment(self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields() {
        // LSL.W D3, D5
        let opcode = 0b1110_011_1_01_1_01_101;
        assert_eq!(line(opcode), 0xE);
        assert_eq!(reg9(opcode), 3);
        assert_eq!(mode6(opcode), 0b101);
        assert_eq!(size_bits(opcode), 1);
        assert_eq!(mode3(opcode), 0b101);
        assert_eq!(reg0(opcode), 5);
        assert!(bit(opcode, 8));
        assert!(!bit(opcode, 4));
    }

    #[test]
    fn index_register_field() {
        assert_eq!(index_field(0x0000), 0);
        assert_eq!(index_field(0x7800), 7);
        assert_eq!(index_field(0x8000), 8);
        assert_eq!(index_field(0xF0FF), 15);
    }

    #[test]
    fn even() {
        assert_eq!(0x1000u32.even(), Ok(0x1000));
        assert_eq!(0x1001u32.even(), Err(DecodeError::InvalidAlignment(0x1001)));
    }
}
