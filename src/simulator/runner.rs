//! Random self-play driver.
//!
//! Games are played purely through `GameSession::on_cell_click` and
//! `GameSession::on_jump_to`, the same calls the terminal front-end makes.

use super::config::SimConfig;
use super::report::SimReport;
use crate::constants::{BOARD_CELLS, SIM_CLICKS_PER_MOVE_LIMIT};
use crate::game::{ClickOutcome, GameSession, Phase, Player};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// How a simulated game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEnd {
    Won(Player),
    /// The player to move had no legal slide.
    Blocked,
    /// Hit `max_moves`.
    MoveCap,
    /// Too many clicks in a row without a committed move.
    Stalled,
}

/// Statistics for one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameStats {
    pub end: GameEnd,
    /// Boards committed, including ones later discarded by a jump
    pub moves_played: u32,
    /// History cursor when the game ended
    pub final_move_index: usize,
    pub clicks: u32,
    pub ignored_clicks: u32,
    pub forced_center_selections: u32,
    pub jumps: u32,
    /// Move index of the first board in the moving phase
    pub moving_phase_at: Option<usize>,
    pub invariant_violations: u32,
}

/// Play every configured game and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut games = Vec::with_capacity(config.num_games as usize);

    for game_idx in 0..config.num_games {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(game_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_game(config, &mut rng);
        if config.verbosity >= 2 {
            tracing::info!(
                game = game_idx + 1,
                end = ?stats.end,
                moves = stats.moves_played,
                clicks = stats.clicks,
                "game finished"
            );
        }
        games.push(stats);
    }

    SimReport::from_games(games)
}

/// Play one game with random clicks.
pub fn simulate_game(config: &SimConfig, rng: &mut ChaCha8Rng) -> GameStats {
    let mut session = GameSession::new();
    let mut stats = GameStats {
        end: GameEnd::MoveCap,
        moves_played: 0,
        final_move_index: 0,
        clicks: 0,
        ignored_clicks: 0,
        forced_center_selections: 0,
        jumps: 0,
        moving_phase_at: None,
        invariant_violations: 0,
    };
    let mut clicks_since_move = 0;

    loop {
        if let Some(winner) = session.winner() {
            stats.end = GameEnd::Won(winner);
            break;
        }
        if session.is_blocked() {
            stats.end = GameEnd::Blocked;
            break;
        }
        if stats.moves_played >= config.max_moves {
            stats.end = GameEnd::MoveCap;
            break;
        }
        if clicks_since_move >= SIM_CLICKS_PER_MOVE_LIMIT {
            stats.end = GameEnd::Stalled;
            break;
        }

        let cursor = session.history().cursor();
        if cursor > 0 && rng.gen_bool(config.jump_chance) {
            let target = rng.gen_range(0..cursor);
            if session.on_jump_to(target) {
                stats.jumps += 1;
            }
            continue;
        }

        let outcome = session.on_cell_click(rng.gen_range(0..BOARD_CELLS));
        stats.clicks += 1;
        clicks_since_move += 1;

        match outcome {
            ClickOutcome::Placed(_) | ClickOutcome::Slid(_) => {
                stats.moves_played += 1;
                clicks_since_move = 0;
            }
            ClickOutcome::CenterForced => stats.forced_center_selections += 1,
            ClickOutcome::Ignored => stats.ignored_clicks += 1,
            ClickOutcome::Selected(_) | ClickOutcome::Deselected => {}
        }

        if stats.moving_phase_at.is_none() && session.phase() == Phase::Moving {
            stats.moving_phase_at = Some(session.history().cursor());
        }

        if !invariants_hold(&session) {
            stats.invariant_violations += 1;
        }
    }

    stats.final_move_index = session.history().cursor();
    stats
}

/// Structural checks that must hold after every click.
pub fn invariants_hold(session: &GameSession) -> bool {
    let history = session.history();
    let board = session.board();

    let cursor_in_range = history.cursor() < history.len();
    let starts_empty = history.boards()[0].piece_count() == 0;
    let at_most_three_each = [Player::X, Player::O]
        .iter()
        .all(|&p| board.pieces_of(p).count() <= 3);
    let selection_is_own_piece = session
        .selected_square()
        .map_or(true, |i| board.get(i) == Some(session.to_move()));
    let selection_only_when_moving =
        session.selected_square().is_none() || board.phase() == Phase::Moving;

    cursor_in_range
        && starts_empty
        && at_most_three_each
        && selection_is_own_piece
        && selection_only_when_moving
}
