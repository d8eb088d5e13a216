#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod ai;
mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod mask;
#[cfg(feature = "std")]
mod render;
mod ship;

pub use ai::{random_placement, random_strike};
pub use board::Board;
pub use common::{PlacementError, StrikeError, StrikeOutcome};
pub use config::{BOARD_SIZE, FLEET, NUM_SHIPS};
pub use game::{generate_game, Game, Player, PlayerKind, Side};
pub use grid::{footprint, Coord, Direction};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::{CellMask, MaskError};
#[cfg(feature = "std")]
pub use render::{print_player_view, render_board};
pub use ship::{Ship, ShipClass};
