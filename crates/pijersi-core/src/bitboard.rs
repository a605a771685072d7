use std::fmt;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::constants::{ROW_COUNT, ROW_LENGTHS, ROW_STARTS};
use crate::types::Cell;

/// Bit offsets between a cell and its neighbour in each direction.
pub mod offsets {
    pub const NORTH_WEST: i32 = 6;
    pub const NORTH_EAST: i32 = 7;
    pub const WEST: i32 = -1;
    pub const EAST: i32 = 1;
    pub const SOUTH_WEST: i32 = -7;
    pub const SOUTH_EAST: i32 = -6;
}

const fn row_mask(row: usize) -> u64 {
    ((1u64 << ROW_LENGTHS[row]) - 1) << ROW_STARTS[row]
}

const fn column_mask(column: usize) -> u64 {
    let mut mask = 0;
    let mut row = 0;
    while row < ROW_COUNT {
        if column < ROW_LENGTHS[row] as usize {
            mask |= 1u64 << (ROW_STARTS[row] as usize + column);
        }
        row += 1;
    }
    mask
}

/// Last cell of every row, or only of the seven-cell rows.
const fn row_ends(long_rows_only: bool) -> u64 {
    let mut mask = 0;
    let mut row = 0;
    while row < ROW_COUNT {
        if !long_rows_only || ROW_LENGTHS[row] == 7 {
            mask |= 1u64 << (ROW_STARTS[row] + ROW_LENGTHS[row] - 1);
        }
        row += 1;
    }
    mask
}

/// First cell of every seven-cell row.
const fn long_row_starts() -> u64 {
    let mut mask = 0;
    let mut row = 0;
    while row < ROW_COUNT {
        if ROW_LENGTHS[row] == 7 {
            mask |= 1u64 << ROW_STARTS[row];
        }
        row += 1;
    }
    mask
}

/// A set of cells, one bit per cell. Bits above `g6` are padding.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self((1u64 << Cell::COUNT) - 1);

    pub const ROW_A: Self = Self(row_mask(0));
    pub const ROW_B: Self = Self(row_mask(1));
    pub const ROW_C: Self = Self(row_mask(2));
    pub const ROW_D: Self = Self(row_mask(3));
    pub const ROW_E: Self = Self(row_mask(4));
    pub const ROW_F: Self = Self(row_mask(5));
    pub const ROW_G: Self = Self(row_mask(6));
    pub const ROWS: [Self; ROW_COUNT] = [
        Self::ROW_A,
        Self::ROW_B,
        Self::ROW_C,
        Self::ROW_D,
        Self::ROW_E,
        Self::ROW_F,
        Self::ROW_G,
    ];

    pub const COLUMN_1: Self = Self(column_mask(0));
    pub const COLUMN_2: Self = Self(column_mask(1));
    pub const COLUMN_3: Self = Self(column_mask(2));
    pub const COLUMN_4: Self = Self(column_mask(3));
    pub const COLUMN_5: Self = Self(column_mask(4));
    pub const COLUMN_6: Self = Self(column_mask(5));
    pub const COLUMN_7: Self = Self(column_mask(6));
    pub const COLUMNS: [Self; 7] = [
        Self::COLUMN_1,
        Self::COLUMN_2,
        Self::COLUMN_3,
        Self::COLUMN_4,
        Self::COLUMN_5,
        Self::COLUMN_6,
        Self::COLUMN_7,
    ];

    pub const EAST_BORDER: Self = Self(row_ends(false));
    /// First cells of rows b, d and f.
    pub const BDF_1: Self = Self(long_row_starts());
    /// Last cells of rows b, d and f.
    pub const BDF_7: Self = Self(row_ends(true));

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn from_cell(cell: Cell) -> Self {
        Self(cell.bit())
    }

    pub const fn from_cell_or_empty(cell: Cell) -> Self {
        if cell.is_none() {
            Self::EMPTY
        } else {
            Self(cell.bit())
        }
    }

    pub const fn get(self, cell: Cell) -> bool {
        self.0 & cell.bit() != 0
    }

    pub fn set(&mut self, cell: Cell) {
        self.0 |= cell.bit();
    }

    pub fn clear(&mut self, cell: Cell) {
        self.0 &= !cell.bit();
    }

    pub fn toggle(&mut self, cell: Cell) {
        self.0 ^= cell.bit();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_any(self) -> bool {
        self.0 != 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Lowest set cell. The bitboard must not be empty.
    pub const fn lsb(self) -> Cell {
        debug_assert!(self.0 != 0);
        Cell::from_raw(self.0.trailing_zeros() as u8)
    }

    pub fn pop_lsb(&mut self) -> Cell {
        let cell = self.lsb();
        self.0 &= self.0 - 1;
        cell
    }

    pub const fn shift_north_west(self) -> Self {
        Self((self.0 & !(Self::BDF_1.0 | Self::ROW_G.0)) << offsets::NORTH_WEST)
    }

    pub const fn shift_north_east(self) -> Self {
        Self((self.0 & !(Self::BDF_7.0 | Self::ROW_G.0)) << offsets::NORTH_EAST)
    }

    pub const fn shift_west(self) -> Self {
        Self((self.0 & !Self::COLUMN_1.0) >> -offsets::WEST)
    }

    pub const fn shift_east(self) -> Self {
        Self((self.0 & !Self::EAST_BORDER.0) << offsets::EAST)
    }

    pub const fn shift_south_west(self) -> Self {
        Self((self.0 & !Self::BDF_1.0) >> -offsets::SOUTH_WEST)
    }

    pub const fn shift_south_east(self) -> Self {
        Self((self.0 & !Self::BDF_7.0) >> -offsets::SOUTH_EAST)
    }

    pub fn iter(self) -> BitboardIter {
        BitboardIter(self.0)
    }
}

impl From<Cell> for Bitboard {
    fn from(cell: Cell) -> Self {
        Self::from_cell(cell)
    }
}

macro_rules! impl_bit_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl $op for Bitboard {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0 $sym rhs.0)
            }
        }

        impl $op<u64> for Bitboard {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: u64) -> Self {
                Self(self.0 $sym rhs)
            }
        }

        impl $assign for Bitboard {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }

        impl $assign<u64> for Bitboard {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: u64) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

/// Complement within the board: padding bits stay clear.
impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl Shl<u32> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: u32) -> Self {
        Self(self.0 << rhs)
    }
}

impl Shr<u32> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: u32) -> Self {
        Self(self.0 >> rhs)
    }
}

impl ShlAssign<u32> for Bitboard {
    #[inline(always)]
    fn shl_assign(&mut self, rhs: u32) {
        self.0 <<= rhs;
    }
}

impl ShrAssign<u32> for Bitboard {
    #[inline(always)]
    fn shr_assign(&mut self, rhs: u32) {
        self.0 >>= rhs;
    }
}

pub struct BitboardIter(u64);

impl Iterator for BitboardIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let cell = Cell::from_raw(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Cell;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

/// Row `g` on top, short rows indented by one column.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROW_COUNT).rev() {
            let start = Cell::from_raw(ROW_STARTS[row]);
            let len = ROW_LENGTHS[row];
            if len == 6 {
                f.write_str(" ")?;
            }
            for column in 0..len {
                if column > 0 {
                    f.write_str(" ")?;
                }
                let mark = if self.get(start.offset(column)) { 'x' } else { '.' };
                write!(f, "{mark}")?;
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
