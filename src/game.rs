//! The top-level game aggregate: two players, two boards, a move
//! counter, and the two state transitions (`place_ship`, `strike`).
//!
//! Every transition is a pure function of a `&Game` that returns a new
//! `Game`. The caller owns the current value and swaps it wholesale;
//! on error it keeps the prior value bit for bit.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use log::debug;

use crate::board::Board;
use crate::common::{PlacementError, StrikeError, StrikeOutcome};
use crate::grid::{Coord, Direction};
use crate::ship::ShipClass;

/// Which of the two players (and their boards) is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    Human,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub turn: bool,
}

/// Complete game state. This value is the entire serializable state;
/// the engine never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub player_one: Player,
    pub player_two: Player,
    pub board_one: Board,
    pub board_two: Board,
    pub move_counter: u32,
}

/// Produce the deterministic initial state: a human and a computer,
/// both boards empty, both turn flags false, move counter at zero.
/// Idempotent; repeated calls are structurally equal.
pub fn generate_game() -> Game {
    Game {
        player_one: Player {
            name: String::from("Player One"),
            kind: PlayerKind::Human,
            turn: false,
        },
        player_two: Player {
            name: String::from("Player Two"),
            kind: PlayerKind::Computer,
            turn: false,
        },
        board_one: Board::new(),
        board_two: Board::new(),
        move_counter: 0,
    }
}

impl Game {
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::One => &self.board_one,
            Side::Two => &self.board_two,
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::One => &self.player_one,
            Side::Two => &self.player_two,
        }
    }

    /// The side whose turn flag is set. While both flags are still
    /// false (fresh game), this reports `Two`, consistent with
    /// `target_side` aiming the first strike at board one.
    pub fn active_side(&self) -> Side {
        if self.player_one.turn {
            Side::One
        } else {
            Side::Two
        }
    }

    /// The board the next strike will land on: the active player
    /// strikes the opponent's board.
    pub fn target_side(&self) -> Side {
        self.active_side().opponent()
    }

    /// True once every ship on `side`'s board is dead. Derived, never
    /// stored; the engine does not reject strikes after this point.
    pub fn defeated(&self, side: Side) -> bool {
        self.board(side).all_sunk()
    }

    /// Validate a placement on `side`'s board and return the new game.
    ///
    /// Placement is not turn-gated; during setup either board may be
    /// filled in any order.
    pub fn place_ship(
        &self,
        side: Side,
        class: ShipClass,
        origin: Coord,
        direction: Direction,
    ) -> Result<Game, PlacementError> {
        let board = self.board(side).with_ship(class, origin, direction)?;
        debug!(
            "placed {} at {} {:?} on board {:?}",
            class, origin, direction, side
        );
        let mut next = self.clone();
        *next.board_mut(side) = board;
        Ok(next)
    }

    /// Resolve a strike at `target` on the current target board.
    ///
    /// On success the strike is recorded, any ship at the cell takes a
    /// hit, the move counter advances by one, and both turn flags flip
    /// regardless of hit, miss, or sink.
    pub fn strike(&self, target: Coord) -> Result<Game, StrikeError> {
        let side = self.target_side();
        let board = self.board(side).with_strike(target)?;
        let mut next = self.clone();
        *next.board_mut(side) = board;
        next.move_counter += 1;
        next.player_one.turn = !next.player_one.turn;
        next.player_two.turn = !next.player_two.turn;
        debug!(
            "strike {} on board {:?}: {:?} (move {})",
            target,
            side,
            next.outcome_at(side, target),
            next.move_counter
        );
        Ok(next)
    }

    /// Classify what a resolved strike at `target` did to `side`'s
    /// board. Meant to be called on the game returned by `strike`.
    pub fn outcome_at(&self, side: Side, target: Coord) -> StrikeOutcome {
        match self.board(side).ship_at(target) {
            Some(ship) if !ship.is_alive() => StrikeOutcome::Sunk(ship.class()),
            Some(_) => StrikeOutcome::Hit,
            None => StrikeOutcome::Miss,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::One => &mut self.board_one,
            Side::Two => &mut self.board_two,
        }
    }
}
