// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Memory access-related traits and structs.

use crate::error::DecodeError;

/// The trait to be implemented by the code image the decoder reads from.
///
/// If the read is successful, return a `Some()` with the requested value.
/// If the address of the value asked is not in the image, return `None`.
/// This will make the current decode attempt fail with an [AccessError](DecodeError::AccessError).
pub trait MemoryAccess {
    /// Returns a big-endian 16-bits integer from the given address.
    #[must_use]
    fn get_word(&mut self, addr: u32) -> Option<u16>;

    /// Returns a big-endian 32-bits integer from the given address.
    ///
    /// The default implementation is doing 2 calls to [Self::get_word] with the high and low words.
    #[must_use]
    fn get_long(&mut self, addr: u32) -> Option<u32> {
        Some((self.get_word(addr)? as u32) << 16 | self.get_word(addr.checked_add(2)?)? as u32)
    }

    /// Returns a [MemoryIter] positioned at the given address, ready to decode one instruction.
    #[must_use]
    fn iter_u16(&mut self, addr: u32) -> MemoryIter<'_, Self> {
        MemoryIter::new(self, addr)
    }
}

/// Byte image, big-endian.
impl MemoryAccess for [u8] {
    fn get_word(&mut self, addr: u32) -> Option<u16> {
        let addr = addr as usize;
        let bytes = self.get(addr..addr.checked_add(2)?)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }
}

/// Word image, each element being a big-endian word. Word and long reads must be even.
impl MemoryAccess for [u16] {
    fn get_word(&mut self, addr: u32) -> Option<u16> {
        if addr & 1 != 0 {
            return None;
        }
        self.get(addr as usize >> 1).copied()
    }
}

/// Sequential reader of opcode and extension words.
pub trait WordSource {
    /// Returns the big-endian word at [Self::next_addr] and advances by 2 bytes.
    fn fetch_word(&mut self) -> Result<u16, DecodeError>;

    /// Returns the big-endian long at [Self::next_addr] and advances by 4 bytes.
    fn fetch_long(&mut self) -> Result<u32, DecodeError>;

    /// The address the next fetch will read from.
    fn next_addr(&self) -> u32;

    /// The number of bytes consumed since the beginning of the current instruction.
    fn consumed(&self) -> u32;
}

/// Cursor over the words of an instruction in memory.
///
/// `pc` is the address of the instruction being decoded, and `size` the number of bytes already fetched from it.
/// A failed decode attempt may leave `size` non-zero: call [Self::reset] before retrying at the same address,
/// or [Self::skip] to move on.
pub struct MemoryIter<'a, M: MemoryAccess + ?Sized> {
    /// The memory system that will be used to get the values.
    pub memory: &'a mut M,
    /// The address of the instruction.
    pub pc: u32,
    /// The number of bytes consumed by the current decode attempt.
    pub size: u32,
}

impl<'a, M: MemoryAccess + ?Sized> MemoryIter<'a, M> {
    /// New cursor at the given instruction address.
    pub fn new(memory: &'a mut M, pc: u32) -> Self {
        Self {
            memory,
            pc,
            size: 0,
        }
    }

    /// Restarts the decode attempt at the same address.
    pub fn reset(&mut self) {
        self.size = 0;
    }

    /// Moves the instruction pointer `len` bytes forward and restarts the decode attempt there.
    pub fn skip(&mut self, len: u32) {
        self.pc = self.pc.wrapping_add(len);
        self.size = 0;
    }
}

impl<M: MemoryAccess + ?Sized> WordSource for MemoryIter<'_, M> {
    fn fetch_word(&mut self) -> Result<u16, DecodeError> {
        let addr = self.next_addr();
        let data = self.memory.get_word(addr).ok_or(DecodeError::AccessError(addr))?;
        self.size += 2;
        Ok(data)
    }

    fn fetch_long(&mut self) -> Result<u32, DecodeError> {
        let addr = self.next_addr();
        let data = self.memory.get_long(addr).ok_or(DecodeError::AccessError(addr))?;
        self.size += 4;
        Ok(data)
    }

    #[inline(always)]
    fn next_addr(&self) -> u32 {
        self.pc.wrapping_add(self.size)
    }

    #[inline(always)]
    fn consumed(&self) -> u32 {
        self.size
    }
}
