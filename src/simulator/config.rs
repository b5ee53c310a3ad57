//! Simulation configuration.

use crate::constants::{SIM_DEFAULT_GAMES, SIM_DEFAULT_MAX_MOVES, SIM_DEFAULT_SEED};

/// Configuration for a batch of random self-play games.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_games: u32,

    /// Base seed; game `n` uses `seed + n`. None = seed from entropy
    pub seed: Option<u64>,

    /// Committed moves per game before it is cut off
    pub max_moves: u32,

    /// Chance per click of jumping back in history instead of clicking
    pub jump_chance: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per game)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_games: SIM_DEFAULT_GAMES,
            seed: Some(SIM_DEFAULT_SEED),
            max_moves: SIM_DEFAULT_MAX_MOVES,
            jump_chance: 0.02,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic batch for tests.
    pub fn quick(num_games: u32, seed: u64) -> Self {
        Self {
            num_games,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Parse `--games N --seed N --max-moves N --jump-chance F --quiet --verbose`.
    ///
    /// Returns the config and the optional `--json FILE` target.
    pub fn from_args(args: &[String]) -> Result<(Self, Option<String>), String> {
        let mut config = Self::default();
        let mut json_path = None;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--games" | "-n" => config.num_games = parse_value(arg, iter.next())?,
                "--seed" => config.seed = Some(parse_value(arg, iter.next())?),
                "--random-seed" => config.seed = None,
                "--max-moves" => config.max_moves = parse_value(arg, iter.next())?,
                "--jump-chance" => {
                    let chance: f64 = parse_value(arg, iter.next())?;
                    if !(0.0..=1.0).contains(&chance) {
                        return Err(format!("--jump-chance must be within 0..=1, got {}", chance));
                    }
                    config.jump_chance = chance;
                }
                "--json" => {
                    let path = iter
                        .next()
                        .ok_or_else(|| "--json requires a file path".to_string())?;
                    json_path = Some(path.clone());
                }
                "--quiet" | "-q" => config.verbosity = 0,
                "--verbose" => config.verbosity = 2,
                other => return Err(format!("Unknown argument: {}", other)),
            }
        }

        if config.num_games == 0 {
            return Err("--games must be at least 1".to_string());
        }

        Ok((config, json_path))
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} got an invalid value: {}", flag, value))
}
