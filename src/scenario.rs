//! Preset scenarios and the runner that feeds them through the engine.
//!
//! A scenario is immutable data: an ordered fleet and an ordered list of abilities.
//! Running it places the whole fleet first, failing fast on the first rejected
//! ship, and only then projects the abilities in order.

use core::fmt;

use crate::board::{Board, BoardStats};
use crate::common::FleetError;
use crate::placement::place_fleet;
use crate::ship::{Orientation, Ship};
use crate::stencil::{apply, Ability, StencilShape};

/// An ability as it appears in a scenario table, before its matrix is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbilitySpec {
    pub name: &'static str,
    pub shape: StencilShape,
    pub row: usize,
    pub col: usize,
}

impl AbilitySpec {
    pub const fn new(name: &'static str, shape: StencilShape, row: usize, col: usize) -> Self {
        Self {
            name,
            shape,
            row,
            col,
        }
    }

    /// Generate the ability's matrix.
    pub fn build(&self) -> Ability {
        Ability::new(self.name, self.shape, self.row, self.col)
    }
}

/// A fixed fleet plus the abilities to project after it is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub summary: &'static str,
    pub ships: &'static [Ship],
    pub abilities: &'static [AbilitySpec],
}

/// Error returned when a scenario's fleet cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioError {
    pub scenario: &'static str,
    pub fleet: FleetError,
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} scenario failed: {}", self.scenario, self.fleet)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.fleet)
    }
}

/// Result of a successful scenario run.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRun<'a> {
    scenario: &'a Scenario,
    board: Board,
    ships_placed: usize,
    cells_marked: usize,
}

impl<'a> ScenarioRun<'a> {
    pub fn scenario(&self) -> &'a Scenario {
        self.scenario
    }

    /// The board after every ship and ability.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships_placed(&self) -> usize {
        self.ships_placed
    }

    /// Total cell writes made by the abilities, counting repeats.
    pub fn cells_marked(&self) -> usize {
        self.cells_marked
    }

    /// The abilities that were applied, in order.
    pub fn abilities(&self) -> impl Iterator<Item = Ability> + 'a {
        self.scenario.abilities.iter().map(AbilitySpec::build)
    }

    pub fn stats(&self) -> BoardStats {
        self.board.stats()
    }
}

impl Scenario {
    /// Run the scenario on a fresh board.
    pub fn run(&self) -> Result<ScenarioRun<'_>, ScenarioError> {
        log::info!("running {} scenario", self.name);
        let mut board = Board::new();
        let ships_placed = place_fleet(&mut board, self.ships).map_err(|fleet| {
            log::warn!("{}: {}", self.name, fleet);
            ScenarioError {
                scenario: self.name,
                fleet,
            }
        })?;
        log::info!("{}: {} ships placed", self.name, ships_placed);

        let mut cells_marked = 0;
        for spec in self.abilities {
            cells_marked += apply(&mut board, &spec.build());
        }
        if !self.abilities.is_empty() {
            log::info!(
                "{}: {} abilities applied",
                self.name,
                self.abilities.len()
            );
        }

        Ok(ScenarioRun {
            scenario: self,
            board,
            ships_placed,
            cells_marked,
        })
    }
}

/// Preset difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Two ships, horizontal and vertical.
    Novice,
    /// Four ships including both diagonals.
    Adventurer,
    /// Four ships and three abilities.
    Master,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Novice, Level::Adventurer, Level::Master];

    pub fn scenario(self) -> &'static Scenario {
        match self {
            Level::Novice => &NOVICE,
            Level::Adventurer => &ADVENTURER,
            Level::Master => &MASTER,
        }
    }
}

pub static NOVICE: Scenario = Scenario {
    name: "Novice",
    summary: "Basic placement of 2 ships",
    ships: &[
        Ship::new("Ship 1 (Horizontal)", 2, 1, Orientation::Horizontal),
        Ship::new("Ship 2 (Vertical)", 5, 7, Orientation::Vertical),
    ],
    abilities: &[],
};

pub static ADVENTURER: Scenario = Scenario {
    name: "Adventurer",
    summary: "Advanced placement of 4 ships with diagonal orientations",
    ships: &[
        Ship::new("Frigate", 2, 1, Orientation::Horizontal),
        Ship::new("Destroyer", 5, 7, Orientation::Vertical),
        Ship::new("Cruiser", 0, 4, Orientation::MainDiagonal),
        Ship::new("Submarine", 6, 5, Orientation::AntiDiagonal),
    ],
    abilities: &[],
};

// The submarine sits at (7,4): anchored on row 8 it would run off the bottom edge.
pub static MASTER: Scenario = Scenario {
    name: "Master",
    summary: "Full system with ships and special abilities",
    ships: &[
        Ship::new("Frigate", 1, 1, Orientation::Horizontal),
        Ship::new("Destroyer", 6, 8, Orientation::Vertical),
        Ship::new("Cruiser", 0, 5, Orientation::MainDiagonal),
        Ship::new("Submarine", 7, 4, Orientation::AntiDiagonal),
    ],
    abilities: &[
        AbilitySpec::new("CONE", StencilShape::Cone, 2, 5),
        AbilitySpec::new("CROSS", StencilShape::Cross, 7, 2),
        AbilitySpec::new("OCTAHEDRON", StencilShape::Octahedron, 4, 7),
    ],
};
