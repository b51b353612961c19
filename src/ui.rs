#![cfg(feature = "std")]

//! Terminal rendering of boards, stencils and scenario results.

use std::fmt::Write;

use crate::{
    board::{Board, BoardStats},
    common::Cell,
    scenario::{Scenario, ScenarioRun},
    stencil::Ability,
};

fn header(out: &mut String, size: usize) {
    out.push_str("   ");
    for c in 0..size {
        let _ = write!(out, "{:2} ", c);
    }
    out.push('\n');
    out.push_str("   ");
    out.push_str(&"---".repeat(size));
    out.push('\n');
}

fn grid<F>(board: &Board, cell: F) -> String
where
    F: Fn(Cell) -> String,
{
    let mut out = String::new();
    header(&mut out, board.size());
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:2}|", r);
        for &c in row {
            out.push_str(&cell(c));
        }
        out.push('\n');
    }
    out
}

/// Board drawn with `~`, `#` and `*`.
pub fn board_view(board: &Board) -> String {
    grid(board, |c| format!(" {} ", c.glyph()))
}

/// Board drawn with the raw cell codes.
pub fn numeric_view(board: &Board) -> String {
    grid(board, |c| format!("{:2} ", c.code()))
}

/// An ability's matrix as rows of `1`/`0`.
pub fn stencil_view(ability: &Ability) -> String {
    format!(
        "=== {} MATRIX ===\n{}\n",
        ability.name(),
        ability.matrix()
    )
}

pub fn stats_view(stats: &BoardStats) -> String {
    format!(
        "Water cells: {}\nShip cells: {}\nEffect zone cells: {}\nTotal cells: {}\n",
        stats.water, stats.ship, stats.effect, stats.total
    )
}

pub fn print_board(board: &Board) {
    println!("=== BATTLE BOARD ===");
    println!("Legend: ~ = Water, # = Ship, * = Effect zone\n");
    println!("{}", board_view(board));
}

pub fn print_numeric_board(board: &Board) {
    println!("=== NUMERIC BOARD ===");
    println!("Values: 0 = Water, 3 = Ship, 5 = Effect zone\n");
    println!("{}", numeric_view(board));
}

pub fn print_stencil(ability: &Ability) {
    println!("{}", stencil_view(ability));
}

/// Print everything a scenario run produced.
pub fn print_run(run: &ScenarioRun<'_>, numeric: bool) {
    let scenario = run.scenario();
    print_scenario_header(scenario);
    if !scenario.abilities.is_empty() {
        println!("=== ABILITY MATRICES ===");
        for ability in run.abilities() {
            print_stencil(&ability);
        }
    }
    print_board(run.board());
    if numeric {
        print_numeric_board(run.board());
    }
    println!("=== SHIPS ===");
    for ship in scenario.ships {
        println!("{}", ship);
    }
    println!();
    println!("=== STATISTICS ===");
    print!("{}", stats_view(&run.stats()));
}

pub fn print_scenario_header(scenario: &Scenario) {
    println!("=== {} ===", scenario.name.to_uppercase());
    println!("{}\n", scenario.summary);
}
