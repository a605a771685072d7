use std::fmt;

use crate::constants::{
    role_code, row_name, BLACK, EMPTY_GLYPH, ROW_COUNT, ROW_LENGTHS, ROW_STARTS, SINGLE_MARKER,
    WHITE,
};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u8);

impl Color {
    pub const WHITE: Self = Self(0);
    pub const BLACK: Self = Self(1);
    pub const NONE: Self = Self(2);

    pub const COUNT: usize = Self::NONE.0 as usize;
    pub const ALL: [Self; Self::COUNT] = [Self::WHITE, Self::BLACK];

    pub const fn from_raw(raw: u8) -> Self {
        debug_assert!(raw <= Self::NONE.0);
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    pub const fn is_some(self) -> bool {
        self.0 != Self::NONE.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    pub const fn flip(self) -> Self {
        debug_assert!(self.is_some());
        Self(self.0 ^ 1)
    }

    pub const fn to_code(self) -> char {
        match self.0 {
            0 => WHITE,
            1 => BLACK,
            _ => '-',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            WHITE => Some(Self::WHITE),
            BLACK => Some(Self::BLACK),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "White",
            1 => "Black",
            _ => "None",
        }
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Role(u8);

impl Role {
    pub const WISE: Self = Self(0);
    pub const ROCK: Self = Self(1);
    pub const PAPER: Self = Self(2);
    pub const SCISSORS: Self = Self(3);
    pub const NONE: Self = Self(4);

    pub const COUNT: usize = Self::NONE.0 as usize;
    pub const ALL: [Self; Self::COUNT] = [Self::WISE, Self::ROCK, Self::PAPER, Self::SCISSORS];

    pub const fn from_raw(raw: u8) -> Self {
        debug_assert!(raw <= Self::NONE.0);
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    pub const fn is_some(self) -> bool {
        self.0 != Self::NONE.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// The unstacked piece type carrying this role.
    pub const fn piece_type(self) -> PieceType {
        debug_assert!(self.is_some());
        PieceType::from_raw(self.0)
    }

    /// Lower-case letter used in position records.
    pub const fn to_code(self) -> char {
        debug_assert!(self.is_some());
        role_code(self.0 as usize & 0b11)
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Self::WISE),
            'r' => Some(Self::ROCK),
            'p' => Some(Self::PAPER),
            's' => Some(Self::SCISSORS),
            _ => None,
        }
    }
}

/// A bare role (codes 0..=3) or an "upper on lower" composite.
///
/// Composites are encoded as `lower_slot * 4 + upper`, where the lower slot is
/// the lower role's code except for wise, which takes slot 4 so that wise on
/// wise does not alias the bare wise code. This keeps `upper = code & 3` and
/// `lower = (code >> 2) & 3` for every composite.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceType(u8);

impl PieceType {
    pub const WISE: Self = Self(0);
    pub const ROCK: Self = Self(1);
    pub const PAPER: Self = Self(2);
    pub const SCISSORS: Self = Self(3);
    pub const ROCK_ON_ROCK: Self = Self(5);
    pub const PAPER_ON_ROCK: Self = Self(6);
    pub const SCISSORS_ON_ROCK: Self = Self(7);
    pub const ROCK_ON_PAPER: Self = Self(9);
    pub const PAPER_ON_PAPER: Self = Self(10);
    pub const SCISSORS_ON_PAPER: Self = Self(11);
    pub const ROCK_ON_SCISSORS: Self = Self(13);
    pub const PAPER_ON_SCISSORS: Self = Self(14);
    pub const SCISSORS_ON_SCISSORS: Self = Self(15);
    pub const WISE_ON_WISE: Self = Self(16);
    pub const ROCK_ON_WISE: Self = Self(17);
    pub const PAPER_ON_WISE: Self = Self(18);
    pub const SCISSORS_ON_WISE: Self = Self(19);
    pub const NONE: Self = Self(20);

    pub const COUNT: usize = Self::NONE.0 as usize;

    /// Every type that can appear on the board. Codes 4, 8 and 12 (wise on
    /// rock, paper or scissors) are reserved and never produced.
    pub const ALL: [Self; 17] = [
        Self::WISE,
        Self::ROCK,
        Self::PAPER,
        Self::SCISSORS,
        Self::ROCK_ON_ROCK,
        Self::PAPER_ON_ROCK,
        Self::SCISSORS_ON_ROCK,
        Self::ROCK_ON_PAPER,
        Self::PAPER_ON_PAPER,
        Self::SCISSORS_ON_PAPER,
        Self::ROCK_ON_SCISSORS,
        Self::PAPER_ON_SCISSORS,
        Self::SCISSORS_ON_SCISSORS,
        Self::WISE_ON_WISE,
        Self::ROCK_ON_WISE,
        Self::PAPER_ON_WISE,
        Self::SCISSORS_ON_WISE,
    ];

    pub const fn from_raw(raw: u8) -> Self {
        debug_assert!(raw <= Self::NONE.0);
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    pub const fn is_some(self) -> bool {
        self.0 != Self::NONE.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// Role of the top piece.
    pub const fn role(self) -> Role {
        debug_assert!(self.is_some());
        Role::from_raw(self.0 & 0b11)
    }

    pub const fn is_stack(self) -> bool {
        self.0 > Self::SCISSORS.0 && self.0 < Self::NONE.0
    }

    pub const fn upper(self) -> Self {
        debug_assert!(self.is_stack());
        Self(self.0 & 0b11)
    }

    pub const fn lower(self) -> Self {
        debug_assert!(self.is_stack());
        Self((self.0 >> 2) & 0b11)
    }

    /// A wise may only ride on another wise; everything else may ride on
    /// any bare piece.
    pub const fn can_stack_on(self, lower: Self) -> bool {
        if self.0 > Self::SCISSORS.0 || lower.0 > Self::SCISSORS.0 {
            return false;
        }
        self.0 != Self::WISE.0 || lower.0 == Self::WISE.0
    }

    pub const fn stacked_on(self, lower: Self) -> Self {
        debug_assert!(self.can_stack_on(lower));
        let lower_slot = ((lower.0 + 3) & 0b11) + 1;
        Self((lower_slot << 2) | self.0)
    }

    pub const fn try_stacked_on(self, lower: Self) -> Option<Self> {
        if self.can_stack_on(lower) {
            Some(self.stacked_on(lower))
        } else {
            None
        }
    }

    pub const fn with_color(self, color: Color) -> Piece {
        debug_assert!(self.is_some());
        debug_assert!(color.is_some());
        Piece::from_raw((self.0 << 1) | color.0)
    }
}

/// A piece type together with its color, encoded as `type * 2 + color`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_WISE: Self = PieceType::WISE.with_color(Color::WHITE);
    pub const BLACK_WISE: Self = PieceType::WISE.with_color(Color::BLACK);
    pub const WHITE_ROCK: Self = PieceType::ROCK.with_color(Color::WHITE);
    pub const BLACK_ROCK: Self = PieceType::ROCK.with_color(Color::BLACK);
    pub const WHITE_PAPER: Self = PieceType::PAPER.with_color(Color::WHITE);
    pub const BLACK_PAPER: Self = PieceType::PAPER.with_color(Color::BLACK);
    pub const WHITE_SCISSORS: Self = PieceType::SCISSORS.with_color(Color::WHITE);
    pub const BLACK_SCISSORS: Self = PieceType::SCISSORS.with_color(Color::BLACK);
    pub const WHITE_WISE_ON_WISE: Self = PieceType::WISE_ON_WISE.with_color(Color::WHITE);
    pub const BLACK_WISE_ON_WISE: Self = PieceType::WISE_ON_WISE.with_color(Color::BLACK);
    pub const NONE: Self = Self(40);

    pub const COUNT: usize = Self::NONE.0 as usize;

    pub const fn from_raw(raw: u8) -> Self {
        debug_assert!(raw <= Self::NONE.0);
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    pub const fn is_some(self) -> bool {
        self.0 != Self::NONE.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    pub const fn piece_type(self) -> PieceType {
        debug_assert!(self.is_some());
        PieceType::from_raw(self.0 >> 1)
    }

    pub const fn role(self) -> Role {
        self.piece_type().role()
    }

    pub const fn color(self) -> Color {
        debug_assert!(self.is_some());
        Color::from_raw(self.0 & 0b1)
    }

    pub const fn is_stack(self) -> bool {
        self.0 > Self::BLACK_SCISSORS.0 && self.0 < Self::NONE.0
    }

    pub const fn upper(self) -> Self {
        debug_assert!(self.is_stack());
        self.piece_type().upper().with_color(self.color())
    }

    pub const fn lower(self) -> Self {
        debug_assert!(self.is_stack());
        self.piece_type().lower().with_color(self.color())
    }

    pub const fn stacked_on(self, lower: Self) -> Self {
        debug_assert!(self.is_some() && lower.is_some());
        debug_assert!((self.0 & 1) == (lower.0 & 1));
        self.piece_type()
            .stacked_on(lower.piece_type())
            .with_color(self.color())
    }

    /// Two-character record token: upper (or only) role letter, then `-` or
    /// the lower role letter. Upper case is white.
    pub fn fen_chars(self) -> [char; 2] {
        debug_assert!(self.is_some());
        let white = self.color() == Color::WHITE;
        let case = |code: char| {
            if white {
                code.to_ascii_uppercase()
            } else {
                code
            }
        };

        if self.is_stack() {
            let piece_type = self.piece_type();
            [
                case(piece_type.upper().role().to_code()),
                case(piece_type.lower().role().to_code()),
            ]
        } else {
            [case(self.role().to_code()), SINGLE_MARKER]
        }
    }

    pub fn from_fen_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let top = chars.next()?;
        let bottom = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let color = if top.is_ascii_uppercase() {
            Color::WHITE
        } else {
            Color::BLACK
        };
        let upper = Role::from_code(top.to_ascii_lowercase())?.piece_type();

        if bottom == SINGLE_MARKER {
            return Some(upper.with_color(color));
        }
        if bottom.is_ascii_uppercase() != top.is_ascii_uppercase() {
            return None;
        }

        let lower = Role::from_code(bottom.to_ascii_lowercase())?.piece_type();
        upper
            .try_stacked_on(lower)
            .map(|stacked| stacked.with_color(color))
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str(EMPTY_GLYPH);
        }
        let [top, bottom] = self.fen_chars();
        write!(f, "{top}{bottom}")
    }
}

/// One of the 45 board cells, numbered row by row from `a1` (bit 0) to `g6`
/// (bit 44).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const A1: Self = Self(0);
    pub const A2: Self = Self(1);
    pub const A3: Self = Self(2);
    pub const A4: Self = Self(3);
    pub const A5: Self = Self(4);
    pub const A6: Self = Self(5);
    pub const B1: Self = Self(6);
    pub const B2: Self = Self(7);
    pub const B3: Self = Self(8);
    pub const B4: Self = Self(9);
    pub const B5: Self = Self(10);
    pub const B6: Self = Self(11);
    pub const B7: Self = Self(12);
    pub const C1: Self = Self(13);
    pub const C2: Self = Self(14);
    pub const C3: Self = Self(15);
    pub const C4: Self = Self(16);
    pub const C5: Self = Self(17);
    pub const C6: Self = Self(18);
    pub const D1: Self = Self(19);
    pub const D2: Self = Self(20);
    pub const D3: Self = Self(21);
    pub const D4: Self = Self(22);
    pub const D5: Self = Self(23);
    pub const D6: Self = Self(24);
    pub const D7: Self = Self(25);
    pub const E1: Self = Self(26);
    pub const E2: Self = Self(27);
    pub const E3: Self = Self(28);
    pub const E4: Self = Self(29);
    pub const E5: Self = Self(30);
    pub const E6: Self = Self(31);
    pub const F1: Self = Self(32);
    pub const F2: Self = Self(33);
    pub const F3: Self = Self(34);
    pub const F4: Self = Self(35);
    pub const F5: Self = Self(36);
    pub const F6: Self = Self(37);
    pub const F7: Self = Self(38);
    pub const G1: Self = Self(39);
    pub const G2: Self = Self(40);
    pub const G3: Self = Self(41);
    pub const G4: Self = Self(42);
    pub const G5: Self = Self(43);
    pub const G6: Self = Self(44);
    pub const NONE: Self = Self(45);

    pub const COUNT: usize = Self::NONE.0 as usize;

    pub const fn from_raw(raw: u8) -> Self {
        debug_assert!(raw <= Self::NONE.0);
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    pub const fn is_some(self) -> bool {
        self.0 != Self::NONE.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    pub const fn bit(self) -> u64 {
        debug_assert!(self.is_some());
        1u64 << self.0
    }

    /// Row index, 0 for row `a` through 6 for row `g`.
    pub const fn row(self) -> usize {
        debug_assert!(self.is_some());
        let mut row = ROW_COUNT - 1;
        while ROW_STARTS[row] > self.0 {
            row -= 1;
        }
        row
    }

    /// Zero-based position inside the row.
    pub const fn column(self) -> usize {
        (self.0 - ROW_STARTS[self.row()]) as usize
    }

    pub const fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row >= ROW_COUNT || column >= ROW_LENGTHS[row] as usize {
            return None;
        }
        Some(Self(ROW_STARTS[row] + column as u8))
    }

    pub const fn offset(self, by: u8) -> Self {
        debug_assert!(self.is_some());
        Self::from_raw(self.0 + by)
    }

    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let row = chars.next()?;
        let column = chars.next()?.to_digit(10)?;
        if chars.next().is_some() || column == 0 {
            return None;
        }
        let row = (row as u32).checked_sub('a' as u32)? as usize;
        Self::from_row_column(row, column as usize - 1)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("--");
        }
        write!(f, "{}{}", row_name(self.row()), self.column() + 1)
    }
}
