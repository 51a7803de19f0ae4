// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instruction types produced by the decoder.

use crate::instruction::Direction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Instruction types of the shift and rotate family.
///
/// The register (`ASr`) and memory (`ASm`) forms of an instruction share the same type,
/// the form is visible from the operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Isa {
    Asl,
    Asr,
    Lsl,
    Lsr,
    Roxl,
    Roxr,
    Rol,
    Ror,
}

/// Shift and rotate instruction types, indexed by `type | direction << 2`.
///
/// Type is 0 for arithmetic shift, 1 for logical shift, 2 for rotate with extend and 3 for rotate.
/// Direction is 0 for right and 1 for left.
pub const SHIFT_ROTATE: [Isa; 8] = [
    Isa::Asr,
    Isa::Lsr,
    Isa::Roxr,
    Isa::Ror,
    Isa::Asl,
    Isa::Lsl,
    Isa::Roxl,
    Isa::Rol,
];

impl Isa {
    /// Returns the shift or rotate instruction from its 2-bits type and the `mode6` field of the opcode.
    ///
    /// Only bit 2 of `mode6` (bit 8 of the opcode) is used.
    #[inline(always)]
    pub const fn shift_rotate(kind: u8, mode6: u8) -> Self {
        SHIFT_ROTATE[(kind & 3 | mode6 & 4) as usize]
    }

    /// Direction of the shift or rotation.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Asl | Self::Lsl | Self::Roxl | Self::Rol => Direction::Left,
            Self::Asr | Self::Lsr | Self::Roxr | Self::Ror => Direction::Right,
        }
    }
}
