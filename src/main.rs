#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battlegrid::{
    init_logging, report::Report, ui, Ability, Level, Scenario, StencilShape, STENCIL_CENTER,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum LevelArg {
    Novice,
    Adventurer,
    Master,
}

#[cfg(feature = "std")]
impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Novice => Level::Novice,
            LevelArg::Adventurer => Level::Adventurer,
            LevelArg::Master => Level::Master,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Run one preset scenario and print the resulting board.
    Run {
        #[arg(value_enum)]
        level: LevelArg,
        #[arg(long, help = "Also print the board as numeric cell codes")]
        numeric: bool,
        #[arg(long, help = "Print a JSON summary instead of the boards")]
        json: bool,
    },
    /// Run every preset scenario in order.
    All {
        #[arg(long, help = "Also print the board as numeric cell codes")]
        numeric: bool,
        #[arg(long, help = "Print one JSON summary per line instead of the boards")]
        json: bool,
    },
    /// Print the matrix of every ability shape.
    Stencils,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            level,
            numeric,
            json,
        } => {
            let scenario = Level::from(level).scenario();
            if !run_scenario(scenario, numeric, json)? {
                anyhow::bail!("{} scenario did not complete", scenario.name);
            }
        }
        Commands::All { numeric, json } => {
            let mut failed = 0;
            for level in Level::ALL {
                if !run_scenario(level.scenario(), numeric, json)? {
                    failed += 1;
                }
            }
            if failed > 0 {
                anyhow::bail!("{} of {} scenarios did not complete", failed, Level::ALL.len());
            }
        }
        Commands::Stencils => {
            for shape in StencilShape::ALL {
                let ability = Ability::new(shape.label(), shape, STENCIL_CENTER, STENCIL_CENTER);
                ui::print_stencil(&ability);
            }
        }
    }
    Ok(())
}

/// Run and print one scenario. Returns `false` if its fleet could not be placed.
#[cfg(feature = "std")]
fn run_scenario(scenario: &Scenario, numeric: bool, json: bool) -> anyhow::Result<bool> {
    let result = scenario.run();
    if json {
        println!("{}", Report::new(scenario, &result).to_json()?);
        return Ok(result.is_ok());
    }
    match result {
        Ok(run) => {
            ui::print_run(&run, numeric);
            println!();
            Ok(true)
        }
        Err(err) => {
            ui::print_scenario_header(scenario);
            eprintln!("Error placing ships: {}", err.fleet);
            Ok(false)
        }
    }
}
