//! Ability stencils: generation of the fixed-size masks and their projection onto
//! a [`Board`].
//!
//! A stencil is a [`STENCIL_SIZE`]×[`STENCIL_SIZE`] boolean matrix whose center cell
//! `(k, k)`, `k = STENCIL_SIZE / 2`, lines up with the ability's origin on the board.
//! Every shape is generated by the same routine; shapes only differ in the
//! per-cell predicate.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::board::{Board, BoardMask};
use crate::common::Cell;
use crate::config::{STENCIL_CENTER, STENCIL_SIZE};

/// Packed stencil matrix.
pub type Stencil = BitBoard<u64, STENCIL_SIZE>;

/// Shapes an ability can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilShape {
    /// Triangular wedge opening downwards from the top row, cut off two rows past
    /// the center.
    Cone,
    /// Plus sign through the center row and column.
    Cross,
    /// Diamond: every cell within Manhattan distance `k` of the center.
    Octahedron,
}

impl StencilShape {
    /// Every shape, in generation order.
    pub const ALL: [StencilShape; 3] = [
        StencilShape::Cone,
        StencilShape::Cross,
        StencilShape::Octahedron,
    ];

    /// Whether cell (`i`, `j`) of the matrix belongs to this shape.
    pub fn contains(self, i: usize, j: usize) -> bool {
        let k = STENCIL_CENTER;
        match self {
            StencilShape::Cone => j.abs_diff(k) <= i && i <= k + 2,
            StencilShape::Cross => i == k || j == k,
            StencilShape::Octahedron => i.abs_diff(k) + j.abs_diff(k) <= k,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StencilShape::Cone => "CONE",
            StencilShape::Cross => "CROSS",
            StencilShape::Octahedron => "OCTAHEDRON",
        }
    }
}

impl fmt::Display for StencilShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Build a stencil from a per-cell predicate.
pub fn generate_with<F>(predicate: F) -> Stencil
where
    F: Fn(usize, usize) -> bool,
{
    let mut stencil = Stencil::new();
    for i in 0..STENCIL_SIZE {
        for j in 0..STENCIL_SIZE {
            if predicate(i, j) {
                // i, j < STENCIL_SIZE
                let _ = stencil.set(i, j);
            }
        }
    }
    stencil
}

/// Generate the matrix for `shape`. Pure: equal shapes give equal matrices.
pub fn generate(shape: StencilShape) -> Stencil {
    generate_with(|i, j| shape.contains(i, j))
}

/// A stencil bound to an origin cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ability {
    name: &'static str,
    shape: StencilShape,
    row: usize,
    col: usize,
    matrix: Stencil,
}

impl Ability {
    /// Create an ability centered on (`row`, `col`), generating its matrix.
    pub fn new(name: &'static str, shape: StencilShape, row: usize, col: usize) -> Self {
        Self {
            name,
            shape,
            row,
            col,
            matrix: generate(shape),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> StencilShape {
        self.shape
    }

    /// Board cell the stencil center is placed on.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn matrix(&self) -> &Stencil {
        &self.matrix
    }

    /// Board coordinates covered by the stencil, clipped to `board`.
    pub fn targets<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = (usize, usize)> + 'a {
        let k = STENCIL_CENTER;
        self.matrix.iter_set_bits().filter_map(move |(i, j)| {
            let br = self.row.checked_add(i)?.checked_sub(k)?;
            let bc = self.col.checked_add(j)?.checked_sub(k)?;
            let on_board = board.contains(isize::try_from(br).ok()?, isize::try_from(bc).ok()?);
            on_board.then_some((br, bc))
        })
    }
}

/// Project `ability` onto `board`.
///
/// Every in-bounds stencil cell that is not a ship becomes [`Cell::EffectZone`];
/// off-board and ship cells are skipped. Returns the number of cells written.
pub fn apply(board: &mut Board, ability: &Ability) -> usize {
    let (row, col) = ability.origin();
    log::debug!("applying {} at ({},{})", ability.name(), row, col);
    let mut area = BoardMask::new();
    for (r, c) in ability.targets(board) {
        let _ = area.set(r, c);
    }
    let mut written = 0;
    for (r, c) in area.iter_set_bits() {
        if board.get(r, c) != Cell::Ship {
            board.set(r, c, Cell::EffectZone);
            written += 1;
        }
    }
    log::debug!("{} marked {} cells", ability.name(), written);
    written
}
