//! One player's grid: placed ships and the strikes it has received.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::{PlacementError, StrikeError};
use crate::config::BOARD_SIZE;
use crate::grid::{footprint, Coord, Direction};
use crate::mask::CellMask;
use crate::ship::{Ship, ShipClass};

type Mask = CellMask<u128, { BOARD_SIZE as usize }>;

/// A single player's board. Ships appear in placement order and
/// `received_strikes` in strike order, with no coordinate ever recorded
/// twice. Mutating operations return a new `Board` and leave `self`
/// untouched, so a rejected operation cannot corrupt anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    ships: Vec<Ship>,
    received_strikes: Vec<Coord>,
}

impl Board {
    /// An empty board: no ships, no strikes.
    pub fn new() -> Self {
        Board::default()
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Strikes this board has received, in order.
    pub fn received_strikes(&self) -> &[Coord] {
        &self.received_strikes
    }

    /// The ship occupying `coord`, if any. The no-overlap invariant
    /// means at most one ship can match.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    /// True when every ship on the board is dead. Vacuously true for an
    /// empty board; callers decide whether that counts as defeat.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| !s.is_alive())
    }

    /// Occupancy mask of all placed ships.
    pub fn occupancy(&self) -> Mask {
        let mut map = Mask::new();
        for ship in &self.ships {
            // locations were bounds-checked at placement
            for &cell in ship.location() {
                let _ = map.set(cell);
            }
        }
        map
    }

    /// Validate a placement and return the extended board.
    ///
    /// Bounds are checked before overlap: a run that leaves the grid is
    /// reported as `OutOfBounds` even if it would also overlap.
    pub(crate) fn with_ship(
        &self,
        class: ShipClass,
        origin: Coord,
        direction: Direction,
    ) -> Result<Board, PlacementError> {
        let location = footprint(origin, direction, class.length())?;
        let candidate = Mask::from_cells(location.iter().copied())?;
        if self.occupancy().intersects(&candidate) {
            return Err(PlacementError::Overlap);
        }
        let mut next = self.clone();
        next.ships.push(Ship::place(class, location));
        Ok(next)
    }

    /// Resolve a strike at `target` and return the updated board.
    pub(crate) fn with_strike(&self, target: Coord) -> Result<Board, StrikeError> {
        let struck = Mask::from_cells(self.received_strikes.iter().copied())?;
        if struck.get(target)? {
            return Err(StrikeError::InvalidTarget);
        }
        let mut next = self.clone();
        next.received_strikes.push(target);
        if let Some(ship) = next.ships.iter_mut().find(|s| s.contains(target)) {
            ship.record_hit(target);
        }
        Ok(next)
    }
}
