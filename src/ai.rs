//! Legal-move proposers for the computer player.
//!
//! Strategy stays deliberately dumb: the computer only needs to issue a
//! legal move, not a clever one. Anything smarter belongs to a caller.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::grid::{Coord, Direction};
use crate::ship::ShipClass;

/// Pick a uniformly random unstruck cell on `board`, or `None` once
/// every cell has been struck.
pub fn random_strike<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<Coord> {
    let mut open = Vec::with_capacity((BOARD_SIZE as usize).pow(2));
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let coord = Coord::new(x, y);
            if !board.received_strikes().contains(&coord) {
                open.push(coord);
            }
        }
    }
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}

/// Propose a random legal (origin, direction) for `class` on `board`.
/// Retries a bounded number of times; `None` if nothing fits.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    class: ShipClass,
) -> Option<(Coord, Direction)> {
    let len = class.length();
    let mut attempts = 0;
    while attempts < 100 {
        attempts += 1;
        let direction = if rng.random() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let max_x = if direction == Direction::Horizontal {
            BOARD_SIZE - len
        } else {
            BOARD_SIZE - 1
        };
        let max_y = if direction == Direction::Vertical {
            BOARD_SIZE - len
        } else {
            BOARD_SIZE - 1
        };
        let origin = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
        if board.with_ship(class, origin, direction).is_ok() {
            return Some((origin, direction));
        }
    }
    None
}
