#![cfg(feature = "std")]

//! Machine-readable summary of a scenario run.

use serde::Serialize;

use crate::board::BoardStats;
use crate::scenario::{Scenario, ScenarioError, ScenarioRun};

/// One scenario's outcome, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Completed {
        scenario: &'static str,
        ships_placed: usize,
        abilities: Vec<&'static str>,
        stats: BoardStats,
    },
    Failed {
        scenario: &'static str,
        error: String,
    },
}

impl Report {
    /// Summarize the result of [`Scenario::run`].
    pub fn new(scenario: &Scenario, result: &Result<ScenarioRun<'_>, ScenarioError>) -> Self {
        match result {
            Ok(run) => Report::Completed {
                scenario: scenario.name,
                ships_placed: run.ships_placed(),
                abilities: run.abilities().map(|a| a.name()).collect(),
                stats: run.stats(),
            },
            Err(err) => Report::Failed {
                scenario: scenario.name,
                error: err.fleet.to_string(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
