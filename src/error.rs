// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding errors.

use thiserror::Error;

/// Reasons why a decode attempt did not produce an instruction.
///
/// None of them are fatal: the caller is expected to skip one byte and try again.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeError {
    /// The instruction pointer is odd.
    #[error("instruction pointer {0:#X} is not word-aligned")]
    InvalidAlignment(u32),
    /// The addressing mode code is out of range or not allowed by the instruction.
    #[error("invalid addressing mode {mode} with register {reg}")]
    InvalidAddressingMode { mode: u8, reg: u8 },
    /// An immediate operand has no byte, word or long size.
    ///
    /// This one is only reported as a diagnostic: the decode still succeeds with an undefined immediate value.
    #[error("immediate operand at {pc:#X} has no byte, word or long size")]
    UnsupportedOperandSize { pc: u32 },
    /// The opcode line has no decoder.
    #[error("opcode line {0:#X} is not supported")]
    UnsupportedOpcodeLine(u8),
    /// The address is outside of the code image.
    #[error("access error at {0:#X}")]
    AccessError(u32),
}
