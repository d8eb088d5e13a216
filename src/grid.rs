//! Coordinates and placement geometry.
//!
//! `footprint` computes the run of cells a ship occupies from its origin,
//! direction, and length. Bounds are checked cell by cell so the caller
//! learns about an off-grid placement before anything else.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use crate::common::PlacementError;
use crate::config::BOARD_SIZE;

/// A cell on the grid, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Coord { x, y }
    }

    /// Whether the coordinate lies on the board. x=0 and y=0 are valid
    /// edges, not violations.
    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis a ship extends along. Horizontal steps x, vertical steps y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// Compute the cells a ship of `length` occupies starting at `origin`.
///
/// Cells are produced in unit steps along the chosen axis, in order from
/// the origin. Fails with `OutOfBounds` if any cell leaves the grid.
pub fn footprint(
    origin: Coord,
    direction: Direction,
    length: u8,
) -> Result<Vec<Coord>, PlacementError> {
    let mut cells = Vec::with_capacity(length as usize);
    for step in 0..length as u16 {
        // widen before stepping so an origin near u8::MAX cannot wrap
        let (x, y) = match direction {
            Direction::Horizontal => (origin.x as u16 + step, origin.y as u16),
            Direction::Vertical => (origin.x as u16, origin.y as u16 + step),
        };
        if x >= BOARD_SIZE as u16 || y >= BOARD_SIZE as u16 {
            return Err(PlacementError::OutOfBounds);
        }
        cells.push(Coord::new(x as u8, y as u8));
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_steps_along_x_when_horizontal() {
        let cells = footprint(Coord::new(1, 1), Direction::Horizontal, 5).unwrap();
        let expected: Vec<Coord> = (1..6).map(|x| Coord::new(x, 1)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn footprint_steps_along_y_when_vertical() {
        let cells = footprint(Coord::new(1, 0), Direction::Vertical, 5).unwrap();
        let expected: Vec<Coord> = (0..5).map(|y| Coord::new(1, y)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn footprint_rejects_runs_leaving_the_grid() {
        assert_eq!(
            footprint(Coord::new(8, 1), Direction::Horizontal, 5),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            footprint(Coord::new(1, 8), Direction::Vertical, 5),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn footprint_accepts_the_zero_edges() {
        assert!(footprint(Coord::new(0, 1), Direction::Horizontal, 5).is_ok());
        assert!(footprint(Coord::new(1, 0), Direction::Vertical, 5).is_ok());
    }
}
