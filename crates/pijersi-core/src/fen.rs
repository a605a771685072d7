use arrayvec::ArrayVec;
use thiserror::Error;

use crate::constants::{row_name, ROW_COUNT, ROW_LENGTHS, ROW_STARTS};
use crate::types::{Cell, Color, Piece};

pub const STARTPOS: &str =
    "s-p-r-s-p-r-/p-r-s-wwr-s-p-/6/7/6/P-S-R-WWS-R-P-/R-P-S-R-P-S- w 0 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedFen {
    pub mailbox: [Piece; Cell::COUNT],
    pub stm: Color,
    pub halfmoves: u32,
    pub fullmoves: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 4 fields, received {0}")]
    FieldCount(usize),
    #[error("1st field (cells) is invalid [expected 7 rows, received {0}]")]
    RowCount(usize),
    #[error("1st field (cells) is invalid [expected {expected} cells in row {row}]")]
    RowLength { row: char, expected: u8 },
    #[error("1st field (cells) is invalid [invalid piece '{0}']")]
    InvalidPiece(String),
    #[error("2nd field (side to move) is invalid [expected 'w' or 'b', received {0}]")]
    InvalidSide(String),
    #[error("3rd field (halfmove clock) is invalid [expected an integer, received {0}]")]
    InvalidHalfmoves(String),
    #[error("4th field (fullmove number) is invalid [expected an integer, received {0}]")]
    InvalidFullmoves(String),
}

pub fn parse_fen(fen: &str) -> Result<ParsedFen, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(FenError::FieldCount(parts.len()));
    }

    let mut rows = ArrayVec::<&str, ROW_COUNT>::new();
    for row in parts[0].split('/').filter(|row| !row.is_empty()) {
        if rows.try_push(row).is_err() {
            let received = parts[0].split('/').filter(|row| !row.is_empty()).count();
            return Err(FenError::RowCount(received));
        }
    }
    if !rows.is_full() {
        return Err(FenError::RowCount(rows.len()));
    }

    // Row `g` comes first in the record.
    let mut mailbox = [Piece::NONE; Cell::COUNT];
    for (row, desc) in rows.iter().rev().enumerate() {
        parse_row(desc, row, &mut mailbox)?;
    }

    let mut side = parts[1].chars();
    let stm = match (side.next().and_then(Color::from_code), side.next()) {
        (Some(color), None) => color,
        _ => return Err(FenError::InvalidSide(parts[1].to_string())),
    };
    let halfmoves = parts[2]
        .parse::<u32>()
        .map_err(|_| FenError::InvalidHalfmoves(parts[2].to_string()))?;
    let fullmoves = parts[3]
        .parse::<u32>()
        .map_err(|_| FenError::InvalidFullmoves(parts[3].to_string()))?;

    Ok(ParsedFen {
        mailbox,
        stm,
        halfmoves,
        fullmoves,
    })
}

fn parse_row(desc: &str, row: usize, mailbox: &mut [Piece; Cell::COUNT]) -> Result<(), FenError> {
    let expected = ROW_LENGTHS[row];
    let start = usize::from(ROW_STARTS[row]);
    let wrong_length = || FenError::RowLength {
        row: row_name(row),
        expected,
    };

    let chars: Vec<char> = desc.chars().collect();
    let mut column = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if column >= usize::from(expected) {
            return Err(wrong_length());
        }

        if let Some(empties) = chars[i].to_digit(10) {
            column += empties as usize;
            i += 1;
            continue;
        }

        let token: String = chars[i..(i + 2).min(chars.len())].iter().collect();
        let Some(piece) = Piece::from_fen_token(&token) else {
            return Err(FenError::InvalidPiece(token));
        };
        mailbox[start + column] = piece;
        column += 1;
        i += 2;
    }

    if column != usize::from(expected) {
        return Err(wrong_length());
    }
    Ok(())
}

pub fn encode_fen(state: &ParsedFen) -> String {
    let mut placement = String::new();
    for row in (0..ROW_COUNT).rev() {
        let start = usize::from(ROW_STARTS[row]);
        let mut empties = 0u32;

        for piece in &state.mailbox[start..start + usize::from(ROW_LENGTHS[row])] {
            if piece.is_none() {
                empties += 1;
                continue;
            }
            if empties > 0 {
                placement.push(char::from_digit(empties, 10).unwrap_or('1'));
                empties = 0;
            }
            placement.extend(piece.fen_chars());
        }
        if empties > 0 {
            placement.push(char::from_digit(empties, 10).unwrap_or('1'));
        }
        if row > 0 {
            placement.push('/');
        }
    }

    format!(
        "{} {} {} {}",
        placement,
        state.stm.to_code(),
        state.halfmoves,
        state.fullmoves
    )
}
