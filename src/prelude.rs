//! Commonly used types and utilities for ease of import.

pub use crate::{
    apply, generate, place, place_fleet, Ability, Board, Cell, Level, Orientation,
    PlacementError, Scenario, Ship, StencilShape,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, report::Report};
