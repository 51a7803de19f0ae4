// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line 1110: shift and rotate instructions.
//!
//! ```text
//! Register: 1110 | count/reg | dr | size | i/r | type | reg
//! Memory:   1110 | x type    | dr | 11   | mode       | reg
//! ```

use crate::addressing_modes::{AddressingMode, EaMode, Operand};
use crate::error::DecodeError;
use crate::instruction::{InstructionWord, Size};
use crate::isa::Isa;
use crate::memory_access::WordSource;
use crate::utils::bit;

/// ASd, LSd, ROXd, ROd, register and memory forms.
///
/// Returns the instruction type and its operands, source first.
/// The memory form has a single word-sized operand, the shifted memory location.
pub fn shift_rotate<W: WordSource + ?Sized>(word: InstructionWord, memory: &mut W) -> Result<(Isa, Vec<Operand>), DecodeError> {
    match Size::from_bits(word.size) {
        Some(size) => Ok(register_form(word, size)),
        None => memory_form(word, memory),
    }
}

/// ASr, LSr, ROXr, ROr
fn register_form(word: InstructionWord, size: Size) -> (Isa, Vec<Operand>) {
    let count = if bit(word.opcode, 5) {
        AddressingMode::Drd(word.reg9)
    } else if word.reg9 == 0 {
        AddressingMode::Immediate(Some(8))
    } else {
        AddressingMode::Immediate(Some(word.reg9 as i32))
    };

    let isa = Isa::shift_rotate(word.mode3, word.mode6);
    let operands = vec![
        Operand::new(Some(size), count),
        Operand::new(Some(size), AddressingMode::Drd(word.reg0)),
    ];
    (isa, operands)
}

/// ASm, LSm, ROXm, ROm
fn memory_form<W: WordSource + ?Sized>(word: InstructionWord, memory: &mut W) -> Result<(Isa, Vec<Operand>), DecodeError> {
    let mode = EaMode::new(word.mode3, word.reg0)?;
    if mode.is_register_direct() || mode.is_pc_relative_or_immediate() {
        return Err(DecodeError::InvalidAddressingMode { mode: word.mode3, reg: word.reg0 });
    }

    // Bit 11 is not part of the type.
    let ea = Operand::from_memory(word.mode3, word.reg0, Some(Size::Word), memory)?;
    Ok((Isa::shift_rotate(word.reg9, word.mode6), vec![ea]))
}
