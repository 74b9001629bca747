use battleship_engine::{BitBoard, BitBoardError, Mask, Position};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u64, 8>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(Position::new(1, 1)).unwrap();
    assert!(bb.get(Position::new(1, 1)).unwrap());
    assert!(!bb.get(Position::new(1, 2)).unwrap());
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(matches!(
        bb.set(Position::new(4, 0)),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    ));
    assert!(!bb.contains(Position::new(0, 7)));
}

#[test]
fn test_from_positions_and_iter() {
    let cells = vec![Position::new(0, 1), Position::new(2, 3), Position::new(9, 9)];
    let mask = Mask::from_positions(cells.iter().copied()).unwrap();
    let collected: Vec<_> = mask.iter_set_bits().collect();
    assert_eq!(collected, cells);
}

#[test]
fn test_bit_ops() {
    let a = Mask::from_positions([Position::new(0, 0), Position::new(0, 1)]).unwrap();
    let b = Mask::from_positions([Position::new(0, 1), Position::new(5, 5)]).unwrap();
    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((!a).count_ones(), 98);
}
