use pijersi_core::{Bitboard, Cell, CELLS};

type Shift = fn(Bitboard) -> Bitboard;

fn directions() -> [(Shift, Shift); 6] {
    [
        (Bitboard::shift_north_west, Bitboard::shift_south_east),
        (Bitboard::shift_north_east, Bitboard::shift_south_west),
        (Bitboard::shift_west, Bitboard::shift_east),
        (Bitboard::shift_south_east, Bitboard::shift_north_west),
        (Bitboard::shift_south_west, Bitboard::shift_north_east),
        (Bitboard::shift_east, Bitboard::shift_west),
    ]
}

fn neighbours(cell: Cell) -> Bitboard {
    directions()
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, (shift, _)| {
            acc | shift(Bitboard::from_cell(cell))
        })
}

#[test]
fn every_cell_maps_to_a_single_bit() {
    let mut seen = Bitboard::EMPTY;
    for cell in CELLS {
        let bb = Bitboard::from_cell(cell);
        assert_eq!(bb.count(), 1);
        assert_eq!(bb.lsb(), cell);
        assert!((seen & bb).is_empty());
        seen |= bb;
    }
    assert_eq!(seen, Bitboard::ALL);
    assert_eq!(Bitboard::from_cell_or_empty(Cell::NONE), Bitboard::EMPTY);
}

#[test]
fn shifts_never_leave_the_board() {
    for cell in CELLS {
        for (shift, _) in directions() {
            let moved = shift(Bitboard::from_cell(cell));
            assert!(moved.count() <= 1, "{cell}");
            assert_eq!(moved.raw() & !Bitboard::ALL.raw(), 0, "{cell}");
        }
    }
    for (shift, _) in directions() {
        assert_eq!(shift(Bitboard::ALL).raw() & !Bitboard::ALL.raw(), 0);
    }
}

#[test]
fn opposite_shifts_are_inverse() {
    for cell in CELLS {
        let bb = Bitboard::from_cell(cell);
        for (shift, back) in directions() {
            let moved = shift(bb);
            if moved.is_any() {
                assert_eq!(back(moved), bb, "{cell}");
            }
        }
    }
}

#[test]
fn borders_fall_off_the_edge() {
    assert!(Bitboard::ROW_G.shift_north_west().is_empty());
    assert!(Bitboard::ROW_G.shift_north_east().is_empty());
    assert!(Bitboard::ROW_A.shift_south_west().is_empty());
    assert!(Bitboard::ROW_A.shift_south_east().is_empty());
    assert!(Bitboard::COLUMN_1.shift_west().is_empty());
    assert!(Bitboard::EAST_BORDER.shift_east().is_empty());
    assert!(Bitboard::BDF_1.shift_north_west().is_empty());
    assert!(Bitboard::BDF_1.shift_south_west().is_empty());
    assert!(Bitboard::BDF_7.shift_north_east().is_empty());
    assert!(Bitboard::BDF_7.shift_south_east().is_empty());
}

#[test]
fn neighbour_counts() {
    assert_eq!(neighbours(Cell::D4).count(), 6);
    assert_eq!(neighbours(Cell::A1).count(), 3);
    assert_eq!(neighbours(Cell::B1).count(), 3);
    assert_eq!(neighbours(Cell::B7).count(), 3);
    assert_eq!(neighbours(Cell::G6).count(), 3);
    assert_eq!(neighbours(Cell::C1).count(), 5);

    let d4: Vec<Cell> = neighbours(Cell::D4).into_iter().collect();
    assert_eq!(
        d4,
        vec![Cell::C3, Cell::C4, Cell::D3, Cell::D5, Cell::E3, Cell::E4]
    );
}

#[test]
fn rows_and_columns_partition_the_board() {
    let rows = Bitboard::ROWS
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, row| acc | row);
    let columns = Bitboard::COLUMNS
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, column| acc | column);
    assert_eq!(rows, Bitboard::ALL);
    assert_eq!(columns, Bitboard::ALL);
    assert_eq!(
        Bitboard::ROWS.iter().map(|row| row.count()).sum::<u32>(),
        45
    );

    for cell in CELLS {
        assert!(Bitboard::ROWS[cell.row()].get(cell));
        assert!(Bitboard::COLUMNS[cell.column()].get(cell));
    }
}

#[test]
fn set_clear_and_pop() {
    let mut bb = Bitboard::EMPTY;
    bb.set(Cell::G6);
    bb.set(Cell::A1);
    bb.toggle(Cell::D4);
    assert_eq!(bb.count(), 3);

    bb.clear(Cell::D4);
    assert!(!bb.get(Cell::D4));
    assert_eq!(bb.pop_lsb(), Cell::A1);
    assert_eq!(bb.pop_lsb(), Cell::G6);
    assert!(bb.is_empty());
    assert_eq!(!Bitboard::EMPTY, Bitboard::ALL);
    assert_eq!(!Bitboard::ALL, Bitboard::EMPTY);
}
