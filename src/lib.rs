#![cfg_attr(not(feature = "std"), no_std)]

//! Board placement and area-of-effect engine for a naval-battle exercise.
//!
//! Ships of fixed length are placed on a square grid with [`place`], and ability
//! stencils are projected onto it with [`apply`]. Preset scenarios live in
//! [`scenario`]; rendering and the JSON summary need the `std` feature.

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
#[cfg(feature = "std")]
pub mod report;
pub mod scenario;
mod ship;
mod stencil;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use placement::*;
pub use scenario::{AbilitySpec, Level, Scenario, ScenarioError, ScenarioRun};
pub use ship::*;
pub use stencil::*;
