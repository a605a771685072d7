use crate::types::Cell;

pub const WHITE: char = 'w';
pub const BLACK: char = 'b';

/// Glyph used for an empty cell in board dumps.
pub const EMPTY_GLYPH: &str = "..";

/// Second character of the token of a piece that is not stacked.
pub const SINGLE_MARKER: char = '-';

pub const ROLE_CODES: [char; 4] = ['w', 'r', 'p', 's'];

pub const ROW_COUNT: usize = 7;
pub const ROW_NAMES: [char; ROW_COUNT] = ['a', 'b', 'c', 'd', 'e', 'f', 'g'];
pub const ROW_STARTS: [u8; ROW_COUNT] = [0, 6, 13, 19, 26, 32, 39];
pub const ROW_LENGTHS: [u8; ROW_COUNT] = [6, 7, 6, 7, 6, 7, 6];

pub const CELLS: [Cell; Cell::COUNT] = [
    Cell::A1,
    Cell::A2,
    Cell::A3,
    Cell::A4,
    Cell::A5,
    Cell::A6,
    Cell::B1,
    Cell::B2,
    Cell::B3,
    Cell::B4,
    Cell::B5,
    Cell::B6,
    Cell::B7,
    Cell::C1,
    Cell::C2,
    Cell::C3,
    Cell::C4,
    Cell::C5,
    Cell::C6,
    Cell::D1,
    Cell::D2,
    Cell::D3,
    Cell::D4,
    Cell::D5,
    Cell::D6,
    Cell::D7,
    Cell::E1,
    Cell::E2,
    Cell::E3,
    Cell::E4,
    Cell::E5,
    Cell::E6,
    Cell::F1,
    Cell::F2,
    Cell::F3,
    Cell::F4,
    Cell::F5,
    Cell::F6,
    Cell::F7,
    Cell::G1,
    Cell::G2,
    Cell::G3,
    Cell::G4,
    Cell::G5,
    Cell::G6,
];

pub const fn role_code(role_idx: usize) -> char {
    ROLE_CODES[role_idx]
}

pub const fn row_name(row: usize) -> char {
    ROW_NAMES[row]
}
