pub mod bitboard;
pub mod constants;
pub mod fen;
pub mod moves;
pub mod position;
pub mod types;

pub use bitboard::Bitboard;
pub use constants::{CELLS, ROW_COUNT, ROW_LENGTHS, ROW_STARTS};
pub use fen::{encode_fen, parse_fen, FenError, ParsedFen, STARTPOS};
pub use moves::{Move, MoveList};
pub use position::Position;
pub use types::{Cell, Color, Piece, PieceType, Role};
