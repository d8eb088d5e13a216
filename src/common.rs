//! Shared types: engine errors and strike outcomes.
//!
//! Errors are plain values. A rejected operation hands one back next to
//! the untouched prior state; nothing is thrown and no state is left
//! half-updated.

use crate::mask::MaskError;
use crate::ship::ShipClass;

/// Errors returned when a ship placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some cell of the placement leaves the 10×10 grid.
    OutOfBounds,
    /// Some cell of the placement intersects an existing ship.
    Overlap,
}

/// Errors returned when a strike is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeError {
    /// Coordinate was already struck, or lies off the grid.
    InvalidTarget,
}

/// What a resolved strike did to the struck board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// Struck an afloat ship segment.
    Hit,
    /// Struck open water.
    Miss,
    /// Struck the last afloat segment of the named ship.
    Sunk(ShipClass),
}

impl From<MaskError> for PlacementError {
    fn from(_: MaskError) -> Self {
        PlacementError::OutOfBounds
    }
}

impl From<MaskError> for StrikeError {
    // an off-grid cell can never be a legal target
    fn from(_: MaskError) -> Self {
        StrikeError::InvalidTarget
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds => {
                write!(f, "Please place the ship entirely on the board")
            }
            PlacementError::Overlap => write!(f, "Ships cannot overlap each other"),
        }
    }
}

impl core::fmt::Display for StrikeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StrikeError::InvalidTarget => {
                write!(f, "That coordinate has already been struck")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for StrikeError {}
