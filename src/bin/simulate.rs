//! Headless self-play simulator.
//!
//! Plays many games with random clicks and history jumps, then prints a
//! summary of outcomes and engine behaviour.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --games N, -n N    Games to play (default: 1000)
//!   --seed N           Base RNG seed (default: 42)
//!   --random-seed      Seed every game from entropy
//!   --max-moves N      Committed moves per game before cutting off (default: 200)
//!   --jump-chance F    Chance per click of jumping back in history (default: 0.02)
//!   --json FILE        Also write the report as JSON
//!   --quiet, -q        Only the one-line summary
//!   --verbose          Log every finished game

use slidetoe::logging;
use slidetoe::simulator::{run_simulation, SimConfig};
use std::fs;
use std::process::ExitCode;

fn print_usage() {
    eprintln!(
        "SlideToe Self-Play Simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --games N, -n N    Games to play (default: 1000)\n\
         \x20 --seed N           Base RNG seed (default: 42)\n\
         \x20 --random-seed      Seed every game from entropy\n\
         \x20 --max-moves N      Moves per game before cutting off (default: 200)\n\
         \x20 --jump-chance F    Chance per click of a history jump (default: 0.02)\n\
         \x20 --json FILE        Also write the report as JSON\n\
         \x20 --quiet, -q        Only the one-line summary\n\
         \x20 --verbose          Log every finished game\n\
         \x20 --help, -h         Show this help"
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let (config, json_path) = match SimConfig::from_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    logging::init_stderr("info");
    tracing::info!(
        games = config.num_games,
        seed = ?config.seed,
        max_moves = config.max_moves,
        jump_chance = config.jump_chance,
        "running simulation"
    );

    let report = run_simulation(&config);

    if config.verbosity == 0 {
        println!("{}", report.summary_line());
    } else {
        println!("{}", report.to_text());
    }

    if let Some(path) = json_path {
        if let Err(e) = fs::write(&path, report.to_json()) {
            tracing::error!(%path, error = %e, "failed to write JSON report");
            return ExitCode::FAILURE;
        }
        tracing::info!(%path, "wrote JSON report");
    }

    if report.invariant_violations > 0 {
        tracing::warn!(count = report.invariant_violations, "invariant violations");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
