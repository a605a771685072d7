use pijersi_core::{Bitboard, Cell, Color, Move, Piece, PieceType, Position, Role, STARTPOS};

fn cells(list: &[Cell]) -> Bitboard {
    list.iter()
        .fold(Bitboard::EMPTY, |acc, &cell| acc | Bitboard::from_cell(cell))
}

#[test]
fn start_position_planes() {
    let position = Position::startpos();

    assert!(position.is_consistent());
    assert_eq!(position.fen(), STARTPOS);
    assert_eq!(position.stm(), Color::WHITE);
    assert_eq!(position.halfmoves(), 0);
    assert_eq!(position.fullmoves(), 1);

    assert_eq!(position.color_bb(Color::WHITE).count(), 13);
    assert_eq!(position.color_bb(Color::BLACK).count(), 13);
    assert_eq!(position.occupied().count(), 26);
    assert_eq!((position.color_bb(Color::WHITE) & Bitboard::ROW_A).count(), 6);

    assert_eq!(position.role_bb(Role::ROCK).count(), 8);
    assert_eq!(position.role_bb(Role::PAPER).count(), 8);
    assert_eq!(position.role_bb(Role::SCISSORS).count(), 8);
    assert_eq!(position.role_bb(Role::WISE), cells(&[Cell::B4, Cell::F4]));

    assert_eq!(position.stacks_bb(), cells(&[Cell::B4, Cell::F4]));
    assert!(position.piece_type_bb(PieceType::WISE).is_empty());
    assert_eq!(
        position.piece_type_bb(PieceType::WISE_ON_WISE),
        cells(&[Cell::B4, Cell::F4])
    );
    assert_eq!(
        position.piece_bb(Piece::WHITE_ROCK),
        cells(&[Cell::A1, Cell::A4, Cell::B3, Cell::B6])
    );
    assert_eq!(position.piece_on(Cell::F4), Piece::BLACK_WISE_ON_WISE);
    assert_eq!(position.piece_on(Cell::D4), Piece::NONE);
}

#[test]
fn unstack_splits_the_wise_stack() {
    let start = Position::startpos();
    let next = start.apply_move(Move::simple_unstack(Cell::B4, Cell::D3));

    assert_eq!(next.piece_on(Cell::B4), Piece::WHITE_WISE);
    assert_eq!(next.piece_on(Cell::D3), Piece::WHITE_WISE);
    assert_eq!(
        next.role_bb(Role::WISE),
        cells(&[Cell::B4, Cell::D3, Cell::F4])
    );
    assert_eq!(
        next.piece_type_bb(PieceType::WISE),
        cells(&[Cell::B4, Cell::D3])
    );
    assert_eq!(
        next.piece_type_bb(PieceType::WISE_ON_WISE),
        cells(&[Cell::F4])
    );
    assert_eq!(next.stacks_bb(), cells(&[Cell::F4]));
    assert_eq!(next.color_bb(Color::WHITE).count(), 14);
    assert_eq!(next.stm(), Color::BLACK);
    assert_eq!(next.halfmoves(), 1);
    assert_eq!(next.fullmoves(), 1);
    assert!(next.is_consistent());
}

#[test]
fn apply_move_leaves_the_source_untouched() {
    let start = Position::startpos();
    let snapshot = start;

    let _ = start.apply_move(Move::double(Cell::A1, Cell::B2, Cell::D3));
    let _ = start.apply_move(Move::simple_unstack(Cell::B4, Cell::D3));

    assert_eq!(start, snapshot);
    assert_eq!(start.fen(), STARTPOS);
}

#[test]
fn moving_onto_a_lone_friend_builds_a_stack() {
    let position = Position::from_fen("6/7/6/7/6/7/R-P-4 w 0 1").unwrap();
    let next = position.apply_move(Move::simple(Cell::A1, Cell::A2));

    let rock_on_paper = PieceType::ROCK_ON_PAPER.with_color(Color::WHITE);
    assert_eq!(next.piece_on(Cell::A1), Piece::NONE);
    assert_eq!(next.piece_on(Cell::A2), rock_on_paper);
    assert_eq!(next.piece_bb(rock_on_paper), cells(&[Cell::A2]));
    assert_eq!(next.role_bb(Role::ROCK), cells(&[Cell::A2]));
    assert!(next.role_bb(Role::PAPER).is_empty());
    assert!(next.piece_type_bb(PieceType::PAPER).is_empty());
    assert_eq!(next.stacks_bb(), cells(&[Cell::A2]));
    assert_eq!(next.color_bb(Color::WHITE).count(), 1);
    assert_eq!(next.halfmoves(), 1);
    assert_eq!(next.fen(), "6/7/6/7/6/7/1RP4 b 1 1");
}

#[test]
fn capturing_a_stack_clears_every_plane() {
    let position = Position::from_fen("6/7/6/7/6/rs6/S-5 w 12 30").unwrap();
    let next = position.apply_move(Move::simple(Cell::A1, Cell::B1));

    assert_eq!(next.piece_on(Cell::B1), Piece::WHITE_SCISSORS);
    assert!(next.color_bb(Color::BLACK).is_empty());
    assert!(next.stacks_bb().is_empty());
    assert!(next.role_bb(Role::ROCK).is_empty());
    assert!(next
        .piece_type_bb(PieceType::ROCK_ON_SCISSORS)
        .is_empty());
    assert_eq!(next.role_bb(Role::SCISSORS), cells(&[Cell::B1]));
    assert_eq!(next.halfmoves(), 0);
    assert_eq!(next.fullmoves(), 30);
    assert!(next.is_consistent());
}

#[test]
fn fullmove_number_advances_after_black() {
    let position = Position::startpos().apply_moves(&[
        Move::simple_unstack(Cell::B4, Cell::D3),
        Move::simple_unstack(Cell::F4, Cell::D4),
        Move::simple(Cell::B3, Cell::C3),
        Move::simple(Cell::F3, Cell::E3),
    ]);

    assert_eq!(position.stm(), Color::WHITE);
    assert_eq!(position.fullmoves(), 3);
    assert_eq!(position.halfmoves(), 4);
    assert!(position.is_consistent());
}

#[test]
fn apply_moves_with_no_moves_is_identity() {
    let start = Position::startpos();
    assert_eq!(start.apply_moves(&[]), start);
}

#[test]
fn display_draws_rows_top_down() {
    let rendered = Position::startpos().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "  s-  p-  r-  s-  p-  r-");
    assert_eq!(lines[1], "p-  r-  s-  ww  r-  s-  p-");
    assert_eq!(lines[2], "  ..  ..  ..  ..  ..  ..");
    assert_eq!(lines[3], "..  ..  ..  ..  ..  ..  ..");
    assert_eq!(lines[5], "P-  S-  R-  WW  S-  R-  P-");
    assert_eq!(lines[6], "  R-  P-  S-  R-  P-  S-");
    assert_eq!(lines[7], "");
    assert_eq!(lines[8], "White to move");

    let black = Position::from_fen("6/7/6/7/6/7/6 b 0 1").unwrap();
    assert!(black.to_string().ends_with("\n\nBlack to move"));
}

#[test]
fn positions_from_equal_records_are_equal() {
    let a = Position::from_fen("6/7/6/3sr3/2p-3/RW6/6 b 10 20").unwrap();
    let b = Position::from_fen("6/7/6/3sr3/2p-3/RW6/6   b 10 20").unwrap();
    assert_eq!(a, b);

    let c = Position::from_fen("6/7/6/3sr3/2p-3/RW6/6 w 10 20").unwrap();
    assert_ne!(a, c);
}
