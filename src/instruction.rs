// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instruction-related structs and enums.

use crate::addressing_modes::Operand;
use crate::isa::Isa;
use crate::utils::{line, mode3, mode6, reg0, reg9, size_bits};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decoded M68000 instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instruction {
    /// The opcode itself.
    pub opcode: u16,
    /// The address of the instruction.
    pub pc: u32,
    /// The instruction type.
    pub isa: Isa,
    /// The operands, source first and destination last.
    pub operands: Vec<Operand>,
    /// Length of the instruction in bytes, opcode and extension words included.
    pub length: u32,
}

/// Raw opcode word with its fields extracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionWord {
    /// The opcode itself.
    pub opcode: u16,
    /// Bits 12-15.
    pub line: u8,
    /// Bits 9-11.
    pub reg9: u8,
    /// Bits 6-8.
    pub mode6: u8,
    /// Bits 6-7.
    pub size: u8,
    /// Bits 3-5.
    pub mode3: u8,
    /// Bits 0-2.
    pub reg0: u8,
}

impl From<u16> for InstructionWord {
    fn from(opcode: u16) -> Self {
        Self {
            opcode,
            line: line(opcode),
            reg9: reg9(opcode),
            mode6: mode6(opcode),
            size: size_bits(opcode),
            mode3: mode3(opcode),
            reg0: reg0(opcode),
        }
    }
}

/// Direction of a shift or rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Left shift or rotation.
    Left,
    /// Right shift or rotation.
    Right,
}

/// Size of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Size {
    Byte = 1,
    Word = 2,
    Long = 4,
}

impl Size {
    /// Creates a new size from the primary size bits, or None for the value 3.
    ///
    /// - 0 => Byte
    /// - 1 => Word
    /// - 2 => Long
    #[inline(always)]
    pub const fn from_bits(d: u8) -> Option<Self> {
        match d {
            0 => Some(Self::Byte),
            1 => Some(Self::Word),
            2 => Some(Self::Long),
            _ => None,
        }
    }
}

impl From<Size> for u8 {
    /// Returns `0`, `1` or `2` for [Byte](Size::Byte), [Word](Size::Word) or [Long](Size::Long) respectively.
    fn from(size: Size) -> Self {
        match size {
            Size::Byte => 0,
            Size::Word => 1,
            Size::Long => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_word() {
        // ASR.L #8, D7
        let word = InstructionWord::from(0xE087);
        assert_eq!(word.line, 0xE);
        assert_eq!(word.reg9, 0);
        assert_eq!(word.mode6, 2);
        assert_eq!(word.size, 2);
        assert_eq!(word.mode3, 0);
        assert_eq!(word.reg0, 7);
    }

    #[test]
    fn memory_form_word() {
        // ASL.W (xxx).L
        let word = InstructionWord::from(0xE1F9);
        assert_eq!(word.size, 3);
        assert_eq!(word.mode6, 7);
        assert_eq!(word.mode3, 7);
        assert_eq!(word.reg0, 1);
    }

    #[test]
    fn size_from_bits() {
        for size in [Size::Byte, Size::Word, Size::Long] {
            assert_eq!(Size::from_bits(size.into()), Some(size));
        }
        assert_eq!(Size::from_bits(3), None);
    }
}
