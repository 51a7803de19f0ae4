// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Addressing modes and the effective address decoder.
//!
//! An effective address is encoded in the opcode as a 3-bits mode and a 3-bits register.
//! Mode 7 does not use a register, so its register field selects one of five other modes.
//! Both are flattened here into a single mode code from 0 to 11 (see [EaMode]).

use crate::error::DecodeError;
use crate::instruction::Size;
use crate::memory_access::WordSource;
use crate::utils::{bit, index_field};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Addressing mode code, mode 7 being expanded with its register field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EaMode {
    /// Data Register Direct
    Drd = 0,
    /// Address Register Direct
    Ard = 1,
    /// Address Register Indirect
    Ari = 2,
    /// Address Register Indirect With POstincrement
    Ariwpo = 3,
    /// Address Register Indirect With PRedecrement
    Ariwpr = 4,
    /// Address Register Indirect With Displacement
    Ariwd = 5,
    /// Address Register Indirect With Index 8
    Ariwi8 = 6,
    /// Absolute Short
    AbsShort = 7,
    /// Absolute Long
    AbsLong = 8,
    /// Program Counter Indirect With Displacement
    Pciwd = 9,
    /// Program Counter Indirect With Index 8
    Pciwi8 = 10,
    /// Immediate Data
    Immediate = 11,
}

impl EaMode {
    /// Returns the mode from a mode code and a register number.
    ///
    /// When `mode` is 7, `reg` is added to it to select the actual mode.
    /// Fails if the result is above 11 or if `reg` is not a register number.
    pub const fn new(mode: u8, reg: u8) -> Result<Self, DecodeError> {
        if mode > Self::Immediate as u8 || reg > 7 {
            return Err(DecodeError::InvalidAddressingMode { mode, reg });
        }

        let code = if mode == Self::AbsShort as u8 { mode + reg } else { mode };
        match code {
            0 => Ok(Self::Drd),
            1 => Ok(Self::Ard),
            2 => Ok(Self::Ari),
            3 => Ok(Self::Ariwpo),
            4 => Ok(Self::Ariwpr),
            5 => Ok(Self::Ariwd),
            6 => Ok(Self::Ariwi8),
            7 => Ok(Self::AbsShort),
            8 => Ok(Self::AbsLong),
            9 => Ok(Self::Pciwd),
            10 => Ok(Self::Pciwi8),
            11 => Ok(Self::Immediate),
            _ => Err(DecodeError::InvalidAddressingMode { mode, reg }),
        }
    }

    /// Returns true if the mode designates a register and not a memory location.
    #[inline(always)]
    pub const fn is_register_direct(self) -> bool {
        matches!(self, Self::Drd | Self::Ard)
    }

    /// Returns true if the mode is relative to the program counter or is an immediate value.
    #[inline(always)]
    pub const fn is_pc_relative_or_immediate(self) -> bool {
        matches!(self, Self::Pciwd | Self::Pciwi8 | Self::Immediate)
    }
}

/// Index register of an indexed addressing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexRegister {
    Data(u8),
    Address(u8),
}

impl From<u8> for IndexRegister {
    /// From the 4-bits register field of the extension word: 0 to 7 for D0-D7, 8 to 15 for A0-A7.
    fn from(d: u8) -> Self {
        let reg = d & 7;
        if d & 8 != 0 {
            Self::Address(reg)
        } else {
            Self::Data(reg)
        }
    }
}

/// Brief extension word of the indexed addressing modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BriefExtensionWord {
    /// The index register.
    pub index: IndexRegister,
    /// True if the whole index register is used, false if only its sign-extended low word is.
    pub index_long: bool,
    /// The 8-bits displacement.
    pub displacement: i8,
    /// True when the displacement is zero.
    pub no_base_displacement: bool,
}

impl From<u16> for BriefExtensionWord {
    fn from(bew: u16) -> Self {
        let displacement = bew as i8;
        Self {
            index: IndexRegister::from(index_field(bew)),
            index_long: bit(bew, 11),
            displacement,
            no_base_displacement: displacement == 0,
        }
    }
}

/// Base of an indexed addressing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexBase {
    /// Address register number.
    Address(u8),
    /// Program counter, with the address it resolves to once the displacement is applied (index not included).
    Pc(u32),
}

/// Operand location and contents.
///
/// Address registers and memory locations are not evaluated,
/// except for the PC-relative modes which are resolved to absolute addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressingMode {
    /// Data Register Direct.
    Drd(u8),
    /// Address Register Direct.
    Ard(u8),
    /// Address Register Indirect.
    Ari(u8),
    /// Address Register Indirect With POstincrement.
    Ariwpo(u8),
    /// Address Register Indirect With PRedecrement.
    Ariwpr(u8),
    /// Address Register Indirect With Displacement (address register, displacement).
    Ariwd(u8, i16),
    /// Address Register or Program Counter Indirect With Index 8.
    Ariwi8(IndexBase, BriefExtensionWord),
    /// Absolute Short, sign-extended.
    AbsShort(u32),
    /// Absolute Long.
    AbsLong(u32),
    /// Program Counter Indirect With Displacement, resolved to the target address.
    Pciwd(u32),
    /// Immediate Data, sign-extended from the operand size.
    /// None when the operand has no size to read it with.
    Immediate(Option<i32>),
}

/// An operand of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operand {
    /// The size of the data, set by the instruction decoder.
    pub size: Option<Size>,
    /// The location of the data.
    pub mode: AddressingMode,
}

impl Operand {
    /// New operand from already known contents, with no extension word.
    pub const fn new(size: Option<Size>, mode: AddressingMode) -> Self {
        Self { size, mode }
    }

    /// Decodes an effective address, reading its extension words from `memory`.
    ///
    /// `mode` is a mode code from 0 to 11 (see [EaMode::new]) and `reg` the register field.
    /// `size` is kept as is in the returned operand, and selects the length of an immediate value.
    pub fn from_memory<W: WordSource + ?Sized>(mode: u8, reg: u8, size: Option<Size>, memory: &mut W) -> Result<Self, DecodeError> {
        let mode = match EaMode::new(mode, reg)? {
            EaMode::Drd => AddressingMode::Drd(reg),
            EaMode::Ard => AddressingMode::Ard(reg),
            EaMode::Ari => AddressingMode::Ari(reg),
            EaMode::Ariwpo => AddressingMode::Ariwpo(reg),
            EaMode::Ariwpr => AddressingMode::Ariwpr(reg),
            EaMode::Ariwd => AddressingMode::Ariwd(reg, memory.fetch_word()? as i16),
            EaMode::Ariwi8 => indexed(false, reg, memory)?,
            EaMode::AbsShort => AddressingMode::AbsShort(memory.fetch_word()? as i16 as u32),
            EaMode::AbsLong => AddressingMode::AbsLong(memory.fetch_long()?),
            EaMode::Pciwd => {
                let pc = memory.next_addr().wrapping_add(2);
                let disp = memory.fetch_word()? as i16;
                AddressingMode::Pciwd(pc.wrapping_add(disp as u32))
            },
            EaMode::Pciwi8 => indexed(true, reg, memory)?,
            EaMode::Immediate => AddressingMode::Immediate(immediate(size, memory)?),
        };

        Ok(Self { size, mode })
    }
}

/// Address Register and Program Counter Indirect With Index 8.
fn indexed<W: WordSource + ?Sized>(base_is_pc: bool, reg: u8, memory: &mut W) -> Result<AddressingMode, DecodeError> {
    let pc = memory.next_addr().wrapping_add(2);
    let bew = BriefExtensionWord::from(memory.fetch_word()?);

    let base = if base_is_pc {
        IndexBase::Pc(pc.wrapping_add(bew.displacement as u32))
    } else {
        IndexBase::Address(reg)
    };

    Ok(AddressingMode::Ariwi8(base, bew))
}

fn immediate<W: WordSource + ?Sized>(size: Option<Size>, memory: &mut W) -> Result<Option<i32>, DecodeError> {
    match size {
        Some(Size::Byte) => Ok(Some(memory.fetch_word()? as i8 as i32)),
        Some(Size::Word) => Ok(Some(memory.fetch_word()? as i16 as i32)),
        Some(Size::Long) => Ok(Some(memory.fetch_long()? as i32)),
        None => {
            let pc = memory.next_addr().wrapping_sub(memory.consumed());
            log::warn!("{}", DecodeError::UnsupportedOperandSize { pc });
            Ok(None)
        },
    }
}
