// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instruction decoding entry points.
//!
//! A decode attempt reads the opcode word at the instruction pointer, then the extension words the instruction needs.
//! It is not transactional: when it fails, the cursor may already have been advanced past some extension words.
//! The usual recovery is to skip one byte and try again, which is what [Sweep] does.

use crate::error::DecodeError;
use crate::instruction::{Instruction, InstructionWord};
use crate::memory_access::{MemoryAccess, MemoryIter, WordSource};
use crate::shift_rotate::shift_rotate;
use crate::utils::IsEven;

impl Instruction {
    /// Decodes the instruction at `memory.pc`.
    ///
    /// The cursor is reset before decoding. On success, `memory.size` is the length of the instruction.
    pub fn from_memory<M: MemoryAccess + ?Sized>(memory: &mut MemoryIter<M>) -> Result<Self, DecodeError> {
        memory.reset();

        let res = Self::dispatch(memory);
        if let Err(e) = &res {
            log::trace!("{:#X}: {}", memory.pc, e);
        }
        res
    }

    fn dispatch<M: MemoryAccess + ?Sized>(memory: &mut MemoryIter<M>) -> Result<Self, DecodeError> {
        let pc = memory.pc.even()?;
        let word = InstructionWord::from(memory.fetch_word()?);

        let (isa, operands) = match word.line {
            0xE => shift_rotate(word, memory)?,
            line => return Err(DecodeError::UnsupportedOpcodeLine(line)),
        };

        Ok(Self {
            opcode: word.opcode,
            pc,
            isa,
            operands,
            length: memory.consumed(),
        })
    }
}

/// Decodes the instruction at the given address.
pub fn decode<M: MemoryAccess + ?Sized>(memory: &mut M, addr: u32) -> Result<Instruction, DecodeError> {
    Instruction::from_memory(&mut memory.iter_u16(addr))
}

/// Returns the length in bytes of the instruction at the given address, or 0 if it cannot be decoded.
///
/// On 0, the caller is expected to consider the byte at `addr` as data and continue at `addr + 1`.
pub fn decode_length<M: MemoryAccess + ?Sized>(memory: &mut M, addr: u32) -> u32 {
    decode(memory, addr).map_or(0, |inst| inst.length)
}

/// Iterator decoding every instruction in an address range, one after the other.
///
/// Returns the address of each decode attempt with its result.
/// After a successful decode it continues after the instruction, otherwise it continues at the next byte.
pub struct Sweep<'a, M: MemoryAccess + ?Sized> {
    iter: MemoryIter<'a, M>,
    end: u32,
}

impl<'a, M: MemoryAccess + ?Sized> Sweep<'a, M> {
    /// Decodes from `beg` inclusive to `end` exclusive.
    pub fn new(memory: &'a mut M, beg: u32, end: u32) -> Self {
        Self {
            iter: MemoryIter::new(memory, beg),
            end,
        }
    }
}

impl<M: MemoryAccess + ?Sized> Iterator for Sweep<'_, M> {
    type Item = (u32, Result<Instruction, DecodeError>);

    fn next(&mut self) -> Option<Self::Item> {
        let pc = self.iter.pc;
        if pc >= self.end {
            return None;
        }

        let res = Instruction::from_memory(&mut self.iter);
        let len = res.as_ref().map_or(1, |inst| inst.length);
        self.iter.pc = pc.saturating_add(len);
        self.iter.reset();

        Some((pc, res))
    }
}
