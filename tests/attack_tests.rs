use battleship_engine::{
    all_sunk, is_valid_attack, place_new_ship, process_attack, AttackResult, Board, BoardError,
    CellState, Orientation, Position, Ship, ShipClass,
};

fn carrier_board() -> (Board, Vec<Ship>) {
    let mut board = Board::new();
    let mut ships = Vec::new();
    place_new_ship(
        &mut board,
        &mut ships,
        ShipClass::Carrier,
        Position::new(0, 0),
        Orientation::Horizontal,
    )
    .unwrap();
    (board, ships)
}

#[test]
fn test_carrier_sinks_on_fifth_hit() {
    let (mut board, mut ships) = carrier_board();
    for col in 0..4 {
        let res = process_attack(&mut board, &mut ships, Position::new(0, col)).unwrap();
        assert!(res.is_hit());
        assert!(!res.is_sunk());
        assert_eq!(board.state(Position::new(0, col)), Some(CellState::Hit));
    }
    let res = process_attack(&mut board, &mut ships, Position::new(0, 4)).unwrap();
    assert!(res.is_sunk());
    assert_eq!(res.sunk_class(), Some(ShipClass::Carrier));

    let res = process_attack(&mut board, &mut ships, Position::new(0, 5)).unwrap();
    assert_eq!(res, AttackResult::Miss);
    assert_eq!(board.state(Position::new(0, 5)), Some(CellState::Miss));
}

#[test]
fn test_sunk_ship_has_no_hit_cells() {
    let (mut board, mut ships) = carrier_board();
    for col in 0..5 {
        process_attack(&mut board, &mut ships, Position::new(0, col)).unwrap();
    }
    assert!(ships[0].is_sunk());
    assert_eq!(ships[0].hits(), 5);
    assert_eq!(board.count_state(CellState::Sunk), 5);
    assert_eq!(board.count_state(CellState::Hit), 0);
    assert!(all_sunk(&ships));
}

#[test]
fn test_second_attack_on_cell_fails() {
    let (mut board, mut ships) = carrier_board();
    process_attack(&mut board, &mut ships, Position::new(0, 2)).unwrap();
    process_attack(&mut board, &mut ships, Position::new(3, 3)).unwrap();
    let before = board.clone();

    assert_eq!(
        process_attack(&mut board, &mut ships, Position::new(0, 2)),
        Err(BoardError::AlreadyAttacked(Position::new(0, 2)))
    );
    assert_eq!(
        process_attack(&mut board, &mut ships, Position::new(3, 3)),
        Err(BoardError::AlreadyAttacked(Position::new(3, 3)))
    );
    assert_eq!(board, before);
    assert_eq!(ships[0].hits(), 1);
}

#[test]
fn test_out_of_bounds_attack() {
    let (mut board, mut ships) = carrier_board();
    assert_eq!(
        process_attack(&mut board, &mut ships, Position::new(10, 3)),
        Err(BoardError::OutOfBounds(Position::new(10, 3)))
    );
}

#[test]
fn test_is_valid_attack() {
    let (mut board, mut ships) = carrier_board();
    assert!(is_valid_attack(&board, Position::new(0, 0)));
    assert!(is_valid_attack(&board.fog_view(), Position::new(0, 0)));
    process_attack(&mut board, &mut ships, Position::new(0, 0)).unwrap();
    assert!(!is_valid_attack(&board, Position::new(0, 0)));
    assert!(!is_valid_attack(&board, Position::new(0, 10)));
}
