// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Motorola 68000 instruction decoder.
//!
//! This library decodes the effective addresses of the M68k ISA and the shift and rotate instructions (line 1110)
//! into structured instructions: an instruction type, its operands and its length.
//! It is meant to be embedded in a disassembler or an analysis tool, which owns the code image and renders the result.
//! Mnemonic generation, symbol resolution and assembly are not part of it.
//!
//! # How to use
//!
//! The code image is accessed through the [MemoryAccess] trait, which is already implemented for `[u8]` (big-endian bytes)
//! and `[u16]` slices. Implement it on your own memory structure for other memory maps.
//!
//! ```
//! use m68000_decoder::{decode, AddressingMode, Isa, Operand, Size};
//!
//! let mut code = [0xE3u8, 0x01]; // ASL.B #1, D1
//! let inst = decode(&mut code[..], 0).unwrap();
//!
//! assert_eq!(inst.isa, Isa::Asl);
//! assert_eq!(inst.length, 2);
//! assert_eq!(inst.operands, [
//!     Operand::new(Some(Size::Byte), AddressingMode::Immediate(Some(1))),
//!     Operand::new(Some(Size::Byte), AddressingMode::Drd(1)),
//! ]);
//! ```
//!
//! To decode a whole range, [Sweep] decodes instructions one after the other and skips one byte when decoding fails.
//!
//! # Logging
//!
//! Diagnostics are emitted with the [log] crate. No logger is installed by this library.
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` on the decoded types.

pub mod addressing_modes;
pub mod decoder;
pub mod error;
pub mod instruction;
pub mod isa;
pub mod memory_access;
pub mod shift_rotate;
pub mod utils;

pub use addressing_modes::{AddressingMode, BriefExtensionWord, EaMode, IndexBase, IndexRegister, Operand};
pub use decoder::{decode, decode_length, Sweep};
pub use error::DecodeError;
pub use instruction::{Direction, Instruction, InstructionWord, Size};
pub use isa::Isa;
pub use memory_access::{MemoryAccess, MemoryIter, WordSource};
