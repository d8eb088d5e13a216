//! Packed cell sets for an N×N grid.
//!
//! A `CellMask` stores one bit per grid cell in an unsigned integer `T`,
//! which keeps overlap and duplicate-strike checks to a couple of word
//! operations. The type is `no_std` friendly and allocation free.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::grid::Coord;

/// Errors returned by cell-mask operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// Coordinate lies outside the N×N grid.
    OutOfGrid { x: u8, y: u8 },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::OutOfGrid { x, y } => {
                write!(f, "OutOfGrid: x={}, y={}", x, y)
            }
        }
    }
}

/// A fixed-size N×N cell set stored in the unsigned integer `T`.
///
/// Bit index for a cell is `y * N + x`. `T` must provide at least
/// `N * N` bits; the 10×10 game grid fits in a `u128`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits (`N * N`).
    const GRID_BITS: usize = N * N;

    #[inline]
    fn word_mask() -> T {
        if Self::GRID_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::GRID_BITS) - T::one()
        }
    }

    /// Create an empty mask (all cells clear).
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    /// Number of occupied cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are occupied.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Tests the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<bool, MaskError> {
        let idx = Self::index(coord)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Marks the cell at `coord` occupied.
    pub fn set(&mut self, coord: Coord) -> Result<(), MaskError> {
        let idx = Self::index(coord)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the cell at `coord`.
    pub fn clear(&mut self, coord: Coord) -> Result<(), MaskError> {
        let idx = Self::index(coord)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Builds a mask from an iterator of coordinates.
    pub fn from_cells<I>(cells: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut mask = Self::new();
        for coord in cells {
            mask.set(coord)?;
        }
        Ok(mask)
    }

    /// Returns true if any cell is occupied in both masks.
    pub fn intersects(&self, other: &Self) -> bool {
        !(*self & *other).is_empty()
    }

    /// Returns true if every cell of `other` is also occupied here.
    pub fn covers(&self, other: &Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    #[inline]
    fn index(coord: Coord) -> Result<usize, MaskError> {
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= N || y >= N {
            Err(MaskError::OutOfGrid {
                x: coord.x,
                y: coord.y,
            })
        } else {
            Ok(y * N + x)
        }
    }

    /// Consumes the mask and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a mask from the raw integer, discarding out-of-grid bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        CellMask {
            bits: raw & Self::word_mask(),
        }
    }
}

impl<T, const N: usize> Default for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}, {}>:", any::type_name::<T>(), N)?;
        for y in 0..N {
            for x in 0..N {
                let bit = if ((self.bits >> (y * N + x)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Intersection of two masks.
impl<T, const N: usize> BitAnd for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask::from_raw(self.into_raw() & rhs.into_raw())
    }
}

/// Union of two masks.
impl<T, const N: usize> BitOr for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellMask::from_raw(self.into_raw() | rhs.into_raw())
    }
}

impl<T, const N: usize> BitOrAssign for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
