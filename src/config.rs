/// Side length of the square board.
pub const BOARD_SIZE: u8 = 10;

/// Every ship occupies this many cells.
pub const SHIP_LENGTH: usize = 3;

/// Side length of an ability stencil. Must be odd so the stencil has a center cell.
pub const STENCIL_SIZE: usize = 7;

/// Row and column of the stencil's center cell.
pub const STENCIL_CENTER: usize = STENCIL_SIZE / 2;

/// Total number of cells on the board.
pub const TOTAL_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

const _: () = assert!(STENCIL_SIZE % 2 == 1);
