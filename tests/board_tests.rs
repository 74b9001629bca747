use battleship_engine::{
    place_new_ship, process_attack, Board, BoardError, CellState, Orientation, Position,
    ShipClass, BOARD_SIZE,
};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.count_state(CellState::Empty), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(board.untargeted().len(), 100);
    assert!(board.open_hits().is_empty());
}

#[test]
fn test_out_of_range_lookups() {
    let board = Board::new();
    assert!(board.get(Position::new(10, 0)).is_none());
    assert!(board.state(Position::new(0, 10)).is_none());
    assert!(!board.is_untargeted(Position::new(12, 12)));
}

#[test]
fn test_clone_is_independent() -> Result<(), BoardError> {
    let mut board = Board::new();
    let mut ships = Vec::new();
    place_new_ship(
        &mut board,
        &mut ships,
        ShipClass::Cruiser,
        Position::new(2, 2),
        Orientation::Vertical,
    )?;
    let snapshot = board.clone();
    process_attack(&mut board, &mut ships, Position::new(2, 2))?;
    assert_eq!(snapshot.state(Position::new(2, 2)), Some(CellState::Ship));
    assert_eq!(board.state(Position::new(2, 2)), Some(CellState::Hit));
    Ok(())
}

#[test]
fn test_cell_records_ship_and_part() -> Result<(), BoardError> {
    let mut board = Board::new();
    let mut ships = Vec::new();
    let id = place_new_ship(
        &mut board,
        &mut ships,
        ShipClass::Battleship,
        Position::new(4, 3),
        Orientation::Horizontal,
    )?;
    for part in 0..4 {
        let cell = board.get(Position::new(4, 3 + part)).unwrap();
        assert_eq!(cell.state(), CellState::Ship);
        assert_eq!(cell.ship(), Some(id));
        assert_eq!(cell.part(), Some(part));
    }
    assert_eq!(board.get(Position::new(4, 7)).unwrap().ship(), None);
    Ok(())
}

#[test]
fn test_fog_view_hides_ships() -> Result<(), BoardError> {
    let mut board = Board::new();
    let mut ships = Vec::new();
    place_new_ship(
        &mut board,
        &mut ships,
        ShipClass::Destroyer,
        Position::new(0, 0),
        Orientation::Horizontal,
    )?;
    process_attack(&mut board, &mut ships, Position::new(0, 0))?;
    process_attack(&mut board, &mut ships, Position::new(5, 5))?;

    let view = board.fog_view();
    assert_eq!(view.state(Position::new(0, 0)), Some(CellState::Hit));
    assert_eq!(view.state(Position::new(0, 1)), Some(CellState::Unknown));
    assert_eq!(view.state(Position::new(5, 5)), Some(CellState::Miss));
    assert!(view.cells().all(|c| c.ship().is_none()));
    assert_eq!(view.count_state(CellState::Ship), 0);
    assert_eq!(view.untargeted().len(), 98);
    Ok(())
}

#[test]
fn test_adjacent_untargeted_dedups_and_clips() {
    let board = Board::new();
    let adj = board.adjacent_untargeted(&[Position::new(0, 0), Position::new(0, 1)]);
    // (0,0) -> (1,0), (0,1); (0,1) -> (1,1), (0,0), (0,2)
    assert_eq!(adj.len(), 5);
    assert!(adj.contains(&Position::new(1, 0)));
    assert!(adj.contains(&Position::new(0, 2)));
}

#[test]
fn test_position_display_and_parse() {
    assert_eq!(Position::new(4, 4).to_string(), "E5");
    assert_eq!(Position::new(9, 9).to_string(), "J10");
    assert_eq!("E5".parse::<Position>(), Ok(Position::new(4, 4)));
    assert_eq!("a1".parse::<Position>(), Ok(Position::new(0, 0)));
    assert_eq!(" j10 ".parse::<Position>(), Ok(Position::new(9, 9)));
    for bad in ["", "K1", "A0", "A11", "5E", "AA"] {
        assert_eq!(bad.parse::<Position>(), Err(BoardError::InvalidCoordinate), "{bad}");
    }
}

#[test]
fn test_neighbours_clip_at_corner() {
    let n: Vec<_> = Position::new(0, 0).neighbours().collect();
    assert_eq!(n, vec![Position::new(1, 0), Position::new(0, 1)]);
    assert_eq!(Position::new(5, 5).neighbours().count(), 4);
}
