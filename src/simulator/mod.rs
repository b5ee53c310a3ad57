//! Headless random self-play for exercising the engine at scale.
//!
//! Each game feeds random cell clicks (and the occasional history jump)
//! into a `GameSession` until someone wins, the player to move is blocked,
//! or a cap is hit.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{invariants_hold, run_simulation, simulate_game, GameEnd, GameStats};
