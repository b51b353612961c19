//! Ship definitions and the footprint each orientation produces.

use core::fmt;

use crate::board::BoardMask;
use crate::common::PlacementError;
use crate::config::SHIP_LENGTH;

/// Direction a ship extends from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along the row, towards higher columns.
    Horizontal,
    /// Down the column, towards higher rows.
    Vertical,
    /// Down and to the right (`\`).
    MainDiagonal,
    /// Down and to the left (`/`).
    AntiDiagonal,
}

impl Orientation {
    /// Every orientation, in the order ships are described.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::MainDiagonal,
        Orientation::AntiDiagonal,
    ];

    /// The `index`-th cell of a line starting at (`row`, `col`).
    ///
    /// Returns `None` when the cell would have a negative coordinate. Cells past the
    /// far edges are returned as-is; bounding them is the caller's job.
    pub fn step(self, row: usize, col: usize, index: usize) -> Option<(usize, usize)> {
        match self {
            Orientation::Horizontal => Some((row, col + index)),
            Orientation::Vertical => Some((row + index, col)),
            Orientation::MainDiagonal => Some((row + index, col + index)),
            Orientation::AntiDiagonal => col.checked_sub(index).map(|c| (row + index, c)),
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
            Orientation::MainDiagonal => "Main diagonal (\\)",
            Orientation::AntiDiagonal => "Anti-diagonal (/)",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A ship of [`SHIP_LENGTH`] cells anchored at (`row`, `col`).
///
/// Ships are plain data; placing one on a [`Board`](crate::Board) is done by
/// [`place`](crate::place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ship {
    name: &'static str,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl Ship {
    /// Define a ship. Usable in `const` and `static` scenario tables.
    pub const fn new(name: &'static str, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            name,
            row,
            col,
            orientation,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells the ship covers.
    pub const fn length(&self) -> usize {
        SHIP_LENGTH
    }

    /// Cells the ship covers, origin first. A cell is `None` when it falls off the
    /// top or left edge.
    pub fn cells(&self) -> impl Iterator<Item = Option<(usize, usize)>> + '_ {
        (0..SHIP_LENGTH).map(move |i| self.orientation.step(self.row, self.col, i))
    }

    /// Occupancy mask of the ship on the board.
    ///
    /// Fails with [`PlacementError::OutOfBounds`] if any cell lies off the board.
    pub fn footprint(&self) -> Result<BoardMask, PlacementError> {
        let mut mask = BoardMask::new();
        for cell in self.cells() {
            let (r, c) = cell.ok_or(PlacementError::OutOfBounds)?;
            mask.set(r, c)?;
        }
        Ok(mask)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({},{}) - {}",
            self.name, self.row, self.col, self.orientation
        )
    }
}
