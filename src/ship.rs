//! Ship classes and the placed-ship record.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use crate::grid::Coord;

/// The fixed set of ship classes and their lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipClass {
    /// Number of cells a ship of this class occupies.
    pub const fn length(self) -> u8 {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship placed on a board.
///
/// `location` holds the occupied cells in order from the origin, always
/// exactly `class.length()` of them. `hits` is a duplicate-free subset
/// of `location`; `alive` drops to false once hits cover the location.
/// Only the engine constructs and mutates ships, which is what keeps
/// those invariants honest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    class: ShipClass,
    location: Vec<Coord>,
    hits: Vec<Coord>,
    alive: bool,
}

impl Ship {
    /// Record a placement with the already-validated cell run.
    pub(crate) fn place(class: ShipClass, location: Vec<Coord>) -> Self {
        Ship {
            class,
            location,
            hits: Vec::new(),
            alive: true,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Occupied cells in order from the origin.
    pub fn location(&self) -> &[Coord] {
        &self.location
    }

    /// Cells of this ship that have been struck.
    pub fn hits(&self) -> &[Coord] {
        &self.hits
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether `coord` is one of this ship's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.location.contains(&coord)
    }

    /// Register a strike on one of this ship's cells and refresh `alive`.
    pub(crate) fn record_hit(&mut self, coord: Coord) {
        if self.location.contains(&coord) && !self.hits.contains(&coord) {
            self.hits.push(coord);
        }
        // hits is a subset of location, so covering is a count comparison
        self.alive = self.location.is_empty() || self.hits.len() < self.location.len();
    }
}
