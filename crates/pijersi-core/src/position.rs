use std::fmt;

use crate::bitboard::Bitboard;
use crate::constants::{CELLS, ROW_COUNT, ROW_LENGTHS, ROW_STARTS};
use crate::fen::{encode_fen, parse_fen, FenError, ParsedFen, STARTPOS};
use crate::moves::Move;
use crate::types::{Cell, Color, Piece, PieceType, Role};

/// Board state: per-color, per-type and per-role planes, the stacked plane,
/// and a cell-indexed mailbox that always agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    colors: [Bitboard; Color::COUNT],
    piece_types: [Bitboard; PieceType::COUNT],
    roles: [Bitboard; Role::COUNT],
    stacks: Bitboard,
    mailbox: [Piece; Cell::COUNT],
    stm: Color,
    halfmoves: u32,
    fullmoves: u32,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_fen(STARTPOS).expect("built-in start record must be valid")
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = parse_fen(fen)?;
        Ok(Self::from_parsed(&parsed))
    }

    pub fn fen(&self) -> String {
        encode_fen(&self.to_parsed_fen())
    }

    pub fn color_bb(&self, color: Color) -> Bitboard {
        debug_assert!(color.is_some());
        self.colors[color.idx()]
    }

    pub fn piece_type_bb(&self, piece_type: PieceType) -> Bitboard {
        debug_assert!(piece_type.is_some());
        self.piece_types[piece_type.idx()]
    }

    pub fn piece_bb(&self, piece: Piece) -> Bitboard {
        debug_assert!(piece.is_some());
        self.color_bb(piece.color()) & self.piece_type_bb(piece.piece_type())
    }

    pub fn role_bb(&self, role: Role) -> Bitboard {
        debug_assert!(role.is_some());
        self.roles[role.idx()]
    }

    pub fn stacks_bb(&self) -> Bitboard {
        self.stacks
    }

    pub fn occupied(&self) -> Bitboard {
        self.colors[Color::WHITE.idx()] | self.colors[Color::BLACK.idx()]
    }

    pub fn piece_on(&self, cell: Cell) -> Piece {
        debug_assert!(cell.is_some());
        self.mailbox[cell.idx()]
    }

    pub fn stm(&self) -> Color {
        self.stm
    }

    pub fn halfmoves(&self) -> u32 {
        self.halfmoves
    }

    pub fn fullmoves(&self) -> u32 {
        self.fullmoves
    }

    /// Returns the position after `mv`. The move must be legal here; only
    /// debug builds check that a piece of the side to move stands on `from`.
    pub fn apply_move(&self, mv: Move) -> Self {
        let mut next = *self;

        let moving = next.piece_on(mv.from());
        debug_assert!(moving.is_some(), "no piece on {}", mv.from());
        debug_assert_eq!(moving.color(), next.stm);

        let (captured, second_captured) = if mv.is_single_unstack() {
            let captured = next.add_piece(moving.upper(), mv.to());
            next.replace_piece(moving.lower(), mv.from());
            (captured, Piece::NONE)
        } else {
            let (arrived, captured) = next.move_piece(moving, mv.from(), mv.to());

            let second_captured = if !mv.is_double() {
                Piece::NONE
            } else if arrived != moving {
                // Merged with a friendly piece on the way: the new stack moves on.
                debug_assert!(!moving.is_stack());
                debug_assert!(arrived.is_stack());
                next.move_piece(arrived, mv.to(), mv.to2()).1
            } else {
                let captured = next.add_piece(arrived.upper(), mv.to2());
                next.replace_piece(arrived.lower(), mv.to());
                captured
            };

            (captured, second_captured)
        };

        if captured.is_some() || second_captured.is_some() {
            next.halfmoves = 0;
        } else {
            next.halfmoves = next.halfmoves.saturating_add(1);
        }

        if next.stm == Color::BLACK {
            next.fullmoves = next.fullmoves.saturating_add(1);
        }
        next.stm = next.stm.flip();

        debug_assert!(next.is_consistent());
        next
    }

    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        moves.iter().fold(*self, |pos, &mv| pos.apply_move(mv))
    }

    /// Checks that every plane agrees with the mailbox.
    pub fn is_consistent(&self) -> bool {
        let planes = self
            .colors
            .iter()
            .chain(&self.piece_types)
            .chain(&self.roles)
            .chain(std::iter::once(&self.stacks));
        if planes.into_iter().any(|plane| plane.raw() & !Bitboard::ALL.raw() != 0) {
            return false;
        }

        CELLS.into_iter().all(|cell| {
            let piece = self.mailbox[cell.idx()];
            let colors_ok = Color::ALL.into_iter().all(|color| {
                self.colors[color.idx()].get(cell) == (piece.is_some() && piece.color() == color)
            });
            let types_ok = (0..PieceType::COUNT as u8).all(|raw| {
                let piece_type = PieceType::from_raw(raw);
                self.piece_types[piece_type.idx()].get(cell)
                    == (piece.is_some() && piece.piece_type() == piece_type)
            });
            let roles_ok = Role::ALL.into_iter().all(|role| {
                self.roles[role.idx()].get(cell) == (piece.is_some() && piece.role() == role)
            });
            colors_ok && types_ok && roles_ok && self.stacks.get(cell) == piece.is_stack()
        })
    }

    fn blank() -> Self {
        Self {
            colors: [Bitboard::EMPTY; Color::COUNT],
            piece_types: [Bitboard::EMPTY; PieceType::COUNT],
            roles: [Bitboard::EMPTY; Role::COUNT],
            stacks: Bitboard::EMPTY,
            mailbox: [Piece::NONE; Cell::COUNT],
            stm: Color::WHITE,
            halfmoves: 0,
            fullmoves: 1,
        }
    }

    fn from_parsed(parsed: &ParsedFen) -> Self {
        let mut pos = Self::blank();
        pos.mailbox = parsed.mailbox;
        pos.stm = parsed.stm;
        pos.halfmoves = parsed.halfmoves;
        pos.fullmoves = parsed.fullmoves;

        for cell in CELLS {
            let piece = pos.mailbox[cell.idx()];
            if piece.is_some() {
                pos.flip_cells(piece, Bitboard::from_cell(cell));
            }
        }
        pos
    }

    fn to_parsed_fen(&self) -> ParsedFen {
        ParsedFen {
            mailbox: self.mailbox,
            stm: self.stm,
            halfmoves: self.halfmoves,
            fullmoves: self.fullmoves,
        }
    }

    /// Places `piece` on `cell`, stacking onto a lone friendly piece or
    /// capturing whatever else is there. Returns the captured piece.
    fn add_piece(&mut self, piece: Piece, cell: Cell) -> Piece {
        debug_assert!(piece.is_some());
        debug_assert!(cell.is_some());

        let occupant = self.mailbox[cell.idx()];
        if merges(piece, occupant) {
            self.add_stack(piece, occupant, cell);
            return Piece::NONE;
        }

        let mask = Bitboard::from_cell(cell);
        if occupant.is_some() {
            debug_assert_ne!(piece.color(), occupant.color());
            self.flip_cells(occupant, mask);
        }
        self.flip_cells(piece, mask);
        self.mailbox[cell.idx()] = piece;

        occupant
    }

    /// Puts `piece` on `cell` whatever stood there before.
    fn replace_piece(&mut self, piece: Piece, cell: Cell) {
        debug_assert!(piece.is_some());
        debug_assert!(cell.is_some());

        let mask = Bitboard::from_cell(cell);
        let occupant = self.mailbox[cell.idx()];
        if occupant.is_some() {
            self.flip_cells(occupant, mask);
        }
        self.flip_cells(piece, mask);
        self.mailbox[cell.idx()] = piece;
    }

    fn add_stack(&mut self, upper: Piece, lower: Piece, cell: Cell) -> Piece {
        debug_assert!(cell.is_some());
        debug_assert!(!upper.is_stack() && !lower.is_stack());
        debug_assert_eq!(upper.color(), lower.color());
        debug_assert_eq!(self.mailbox[cell.idx()], lower);

        let stacked = upper.stacked_on(lower);
        let mask = Bitboard::from_cell(cell);

        // The color plane is flipped twice and stays set.
        self.flip_cells(lower, mask);
        self.flip_cells(stacked, mask);
        self.mailbox[cell.idx()] = stacked;

        stacked
    }

    /// Moves `piece` as a whole. Returns the piece now on `to` (a new stack
    /// after a merge) and the captured piece, if any.
    fn move_piece(&mut self, piece: Piece, from: Cell, to: Cell) -> (Piece, Piece) {
        debug_assert!(piece.is_some());
        debug_assert!(from.is_some() && to.is_some());
        debug_assert_eq!(self.mailbox[from.idx()], piece);

        self.mailbox[from.idx()] = Piece::NONE;
        let occupant = self.mailbox[to.idx()];

        if merges(piece, occupant) {
            self.flip_cells(piece, Bitboard::from_cell(from));
            let stacked = self.add_stack(piece, occupant, to);
            return (stacked, Piece::NONE);
        }

        self.flip_cells(piece, Bitboard::from_cell(from) ^ Bitboard::from_cell(to));
        if occupant.is_some() {
            debug_assert_ne!(piece.color(), occupant.color());
            self.flip_cells(occupant, Bitboard::from_cell(to));
        }
        self.mailbox[to.idx()] = piece;

        (piece, occupant)
    }

    /// The only place planes change: color, type and role planes always
    /// move together, plus the stacked plane for stacks.
    fn flip_cells(&mut self, piece: Piece, mask: Bitboard) {
        debug_assert!(piece.is_some());

        self.colors[piece.color().idx()] ^= mask;
        self.piece_types[piece.piece_type().idx()] ^= mask;
        self.roles[piece.role().idx()] ^= mask;

        if piece.is_stack() {
            self.stacks ^= mask;
        }
    }
}

fn merges(piece: Piece, occupant: Piece) -> bool {
    occupant.is_some()
        && !piece.is_stack()
        && !occupant.is_stack()
        && piece.color() == occupant.color()
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROW_COUNT).rev() {
            let start = Cell::from_raw(ROW_STARTS[row]);
            let len = ROW_LENGTHS[row];
            for column in 0..len {
                let piece = self.piece_on(start.offset(column));
                if len == 7 && column == 0 {
                    write!(f, "{piece}")?;
                } else {
                    write!(f, "  {piece}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "\n{} to move", self.stm.name())
    }
}
