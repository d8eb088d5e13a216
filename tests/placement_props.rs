use flotilla::{
    footprint, generate_game, random_placement, Coord, Direction, Game, PlacementError,
    Side, BOARD_SIZE, FLEET,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Place the whole fleet randomly on both boards.
fn random_fleet_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = generate_game();
    for side in [Side::One, Side::Two] {
        for class in FLEET {
            let (origin, direction) = random_placement(&mut rng, game.board(side), class).unwrap();
            game = game.place_ship(side, class, origin, direction).unwrap();
        }
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn footprint_is_exact_contiguous_and_in_bounds(
        x in 0u8..BOARD_SIZE,
        y in 0u8..BOARD_SIZE,
        len in 1u8..=5,
        horizontal in any::<bool>(),
    ) {
        let direction = if horizontal { Direction::Horizontal } else { Direction::Vertical };
        match footprint(Coord::new(x, y), direction, len) {
            Ok(cells) => {
                prop_assert_eq!(cells.len(), len as usize);
                prop_assert!(cells.iter().all(|c| c.in_bounds()));
                for pair in cells.windows(2) {
                    match direction {
                        Direction::Horizontal => {
                            prop_assert_eq!(pair[1].x, pair[0].x + 1);
                            prop_assert_eq!(pair[1].y, pair[0].y);
                        }
                        Direction::Vertical => {
                            prop_assert_eq!(pair[1].x, pair[0].x);
                            prop_assert_eq!(pair[1].y, pair[0].y + 1);
                        }
                    }
                }
            }
            Err(e) => {
                prop_assert_eq!(e, PlacementError::OutOfBounds);
                // only runs that actually leave the grid may fail
                let reach = if horizontal { x } else { y } as u16 + len as u16 - 1;
                prop_assert!(reach >= BOARD_SIZE as u16);
            }
        }
    }

    #[test]
    fn random_fleets_never_overlap(seed in any::<u64>()) {
        let game = random_fleet_game(seed);
        for side in [Side::One, Side::Two] {
            let board = game.board(side);
            let placed: u8 = FLEET.iter().map(|c| c.length()).sum();
            // disjoint locations union to the sum of lengths
            prop_assert_eq!(board.occupancy().count_ones(), placed as usize);
            prop_assert!(board
                .ships()
                .iter()
                .flat_map(|s| s.location())
                .all(|c| c.in_bounds()));
        }
    }

    #[test]
    fn rejected_placement_returns_the_prior_game(
        seed in any::<u64>(),
        x in 0u8..BOARD_SIZE,
        y in 0u8..BOARD_SIZE,
        horizontal in any::<bool>(),
    ) {
        let game = random_fleet_game(seed);
        let direction = if horizontal { Direction::Horizontal } else { Direction::Vertical };
        for class in FLEET {
            if game.place_ship(Side::One, class, Coord::new(x, y), direction).is_err() {
                prop_assert_eq!(&game, &random_fleet_game(seed));
            }
        }
    }
}
