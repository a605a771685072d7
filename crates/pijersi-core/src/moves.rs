use std::fmt;

use arrayvec::ArrayVec;

use crate::types::Cell;

/// A move packed into one word: `from`, `to` and `to2` cells in six bits
/// each, then the single-unstack and double flags.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u32);

impl Move {
    pub const NULL: Self = Self(0);

    const FROM_SHIFT: u32 = 0;
    const TO_SHIFT: u32 = 6;
    const TO2_SHIFT: u32 = 12;
    const SINGLE_UNSTACK_SHIFT: u32 = 18;
    const DOUBLE_SHIFT: u32 = 19;

    const CELL_MASK: u32 = 0b11_1111;

    /// The whole piece or stack on `from` goes to `to`.
    pub const fn simple(from: Cell, to: Cell) -> Self {
        debug_assert!(from.is_some());
        debug_assert!(to.is_some());

        Self(((from.raw() as u32) << Self::FROM_SHIFT) | ((to.raw() as u32) << Self::TO_SHIFT))
    }

    /// Only the top of the stack on `from` goes to `to`.
    pub const fn simple_unstack(from: Cell, to: Cell) -> Self {
        let mv = Self::simple(from, to);
        Self(mv.0 | (1 << Self::SINGLE_UNSTACK_SHIFT))
    }

    pub const fn double(from: Cell, to: Cell, to2: Cell) -> Self {
        debug_assert!(to2.is_some());

        let mv = Self::simple(from, to);
        Self(mv.0 | ((to2.raw() as u32) << Self::TO2_SHIFT) | (1 << Self::DOUBLE_SHIFT))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn from(self) -> Cell {
        Cell::from_raw(((self.0 >> Self::FROM_SHIFT) & Self::CELL_MASK) as u8)
    }

    pub const fn to(self) -> Cell {
        Cell::from_raw(((self.0 >> Self::TO_SHIFT) & Self::CELL_MASK) as u8)
    }

    pub const fn to2(self) -> Cell {
        debug_assert!(self.is_double());
        Cell::from_raw(((self.0 >> Self::TO2_SHIFT) & Self::CELL_MASK) as u8)
    }

    pub const fn is_single_unstack(self) -> bool {
        (self.0 >> Self::SINGLE_UNSTACK_SHIFT) & 1 != 0
    }

    pub const fn is_double(self) -> bool {
        (self.0 >> Self::DOUBLE_SHIFT) & 1 != 0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("0000");
        }

        write!(f, "{}", self.from())?;
        if self.is_single_unstack() {
            write!(f, "{}", self.from())?;
        }
        write!(f, "{}", self.to())?;
        if self.is_double() {
            write!(f, "{}", self.to2())?;
        }
        Ok(())
    }
}

pub type MoveList = ArrayVec<Move, 256>;
