//! Board state: a fixed grid of [`Cell`] values.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::Cell;
use crate::config::{BOARD_SIZE, TOTAL_CELLS};

const N: usize = BOARD_SIZE as usize;

/// Packed mask over the whole board: ship footprints and ability areas.
pub type BoardMask = BitBoard<u128, N>;

/// Cell counts of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    pub water: usize,
    pub ship: usize,
    pub effect: usize,
    pub total: usize,
}

/// The N×N grid shared by placement and ability projection.
///
/// Indexing is unchecked beyond Rust's own bounds checks: `get` and `set` panic on
/// coordinates outside the board, so callers validate first.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// Create a board with every cell set to [`Cell::Water`].
    pub fn new() -> Self {
        log::trace!("initializing {}x{} board", N, N);
        Board {
            cells: [[Cell::Water; N]; N],
        }
    }

    /// Side length of the board.
    pub const fn size(&self) -> usize {
        N
    }

    /// Cell at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Overwrite the cell at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Whether (`row`, `col`) lies on the board. Accepts signed coordinates so that
    /// projected offsets can be checked before conversion.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        (0..N as isize).contains(&row) && (0..N as isize).contains(&col)
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; N]> {
        self.cells.iter()
    }

    /// Row-major sweep over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &cell)| (r, c, cell)))
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, _, v)| v == cell).count()
    }

    /// Cell counts for the statistics summary.
    pub fn stats(&self) -> BoardStats {
        let mut stats = BoardStats {
            total: TOTAL_CELLS,
            ..BoardStats::default()
        };
        for (_, _, cell) in self.cells() {
            match cell {
                Cell::Water => stats.water += 1,
                Cell::Ship => stats.ship += 1,
                Cell::EffectZone => stats.effect += 1,
            }
        }
        stats
    }

    /// Occupancy mask of every ship cell.
    pub fn ship_map(&self) -> BoardMask {
        let mut map = BoardMask::new();
        for (r, c, cell) in self.cells() {
            if cell == Cell::Ship {
                // (r, c) comes from the grid itself, so it is always in bounds.
                let _ = map.set(r, c);
            }
        }
        map
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.rows() {
            write!(f, "  ")?;
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
