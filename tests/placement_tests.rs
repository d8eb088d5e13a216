use flotilla::{generate_game, Coord, Direction, PlacementError, ShipClass, Side};

#[test]
fn test_horizontal_placement_runs_along_x() {
    let game = generate_game();
    let game = game
        .place_ship(Side::One, ShipClass::Carrier, Coord::new(1, 1), Direction::Horizontal)
        .unwrap();
    let ship = &game.board_one.ships()[0];
    let expected: Vec<Coord> = (1..6).map(|x| Coord::new(x, 1)).collect();
    assert_eq!(ship.location(), expected.as_slice());
    assert!(ship.is_alive());
    assert!(ship.hits().is_empty());
}

#[test]
fn test_zero_edges_are_valid_origins() {
    let game = generate_game();
    let game = game
        .place_ship(Side::One, ShipClass::Carrier, Coord::new(0, 1), Direction::Horizontal)
        .unwrap();
    let expected: Vec<Coord> = (0..5).map(|x| Coord::new(x, 1)).collect();
    assert_eq!(game.board_one.ships()[0].location(), expected.as_slice());

    let game = game
        .place_ship(Side::One, ShipClass::Battleship, Coord::new(7, 0), Direction::Vertical)
        .unwrap();
    let expected: Vec<Coord> = (0..4).map(|y| Coord::new(7, y)).collect();
    assert_eq!(game.board_one.ships()[1].location(), expected.as_slice());
}

#[test]
fn test_out_of_bounds_placement_leaves_game_unchanged() {
    let game = generate_game();
    let err = game
        .place_ship(Side::One, ShipClass::Carrier, Coord::new(8, 1), Direction::Horizontal)
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
    assert_eq!(game, generate_game());

    let err = game
        .place_ship(Side::One, ShipClass::Carrier, Coord::new(1, 8), Direction::Vertical)
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
    assert_eq!(game, generate_game());
}

#[test]
fn test_overlapping_placement_leaves_game_unchanged() {
    let game = generate_game()
        .place_ship(Side::One, ShipClass::Carrier, Coord::new(1, 1), Direction::Horizontal)
        .unwrap();
    // crosses the carrier at (2, 1)
    let err = game
        .place_ship(Side::One, ShipClass::Battleship, Coord::new(2, 0), Direction::Vertical)
        .unwrap_err();
    assert_eq!(err, PlacementError::Overlap);
    assert_eq!(game.board_one.ships().len(), 1);
}

#[test]
fn test_boards_do_not_share_occupancy() {
    // the same cells are free on the other board
    let game = generate_game()
        .place_ship(Side::One, ShipClass::Carrier, Coord::new(1, 1), Direction::Horizontal)
        .unwrap()
        .place_ship(Side::Two, ShipClass::Carrier, Coord::new(1, 1), Direction::Horizontal)
        .unwrap();
    assert_eq!(game.board_one.ships().len(), 1);
    assert_eq!(game.board_two.ships().len(), 1);
}

#[test]
fn test_placement_keeps_order_and_counter() {
    let game = generate_game()
        .place_ship(Side::One, ShipClass::Destroyer, Coord::new(0, 0), Direction::Horizontal)
        .unwrap()
        .place_ship(Side::One, ShipClass::Cruiser, Coord::new(0, 2), Direction::Horizontal)
        .unwrap();
    let classes: Vec<ShipClass> = game.board_one.ships().iter().map(|s| s.class()).collect();
    assert_eq!(classes, vec![ShipClass::Destroyer, ShipClass::Cruiser]);
    // placing ships is not a move
    assert_eq!(game.move_counter, 0);
    assert!(!game.player_one.turn);
    assert!(!game.player_two.turn);
}
