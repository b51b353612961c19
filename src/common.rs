//! Common types for the engine: cell values and placement errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water; the initial state of every cell.
    #[default]
    Water,
    /// Part of a placed ship. Only placement writes this, and nothing overwrites it.
    Ship,
    /// Marked by an ability.
    EffectZone,
}

impl Cell {
    /// Numeric code used by the numeric board view.
    pub const fn code(self) -> u8 {
        match self {
            Cell::Water => 0,
            Cell::Ship => 3,
            Cell::EffectZone => 5,
        }
    }

    /// Glyph used by the board view.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => '#',
            Cell::EffectZone => '*',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Errors returned when a ship cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one of the ship's cells lies outside the board.
    OutOfBounds,
    /// At least one of the ship's cells is already occupied by another ship.
    Overlap,
}

impl From<BitBoardError> for PlacementError {
    fn from(_: BitBoardError) -> Self {
        PlacementError::OutOfBounds
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "Ship placement overlaps with another ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// A placement failure inside a fleet, identifying the ship that stopped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetError {
    /// Position of the failing ship in the fleet.
    pub index: usize,
    /// Display name of the failing ship.
    pub ship: &'static str,
    /// Why the ship was rejected.
    pub reason: PlacementError,
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not place {} (#{}): {}", self.ship, self.index + 1, self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
