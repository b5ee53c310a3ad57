//! Simulation report generation.

use super::runner::{GameEnd, GameStats};
use crate::game::Player;
use serde::Serialize;

/// Aggregated results from a batch of simulated games.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub generated_at: String,
    pub num_games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub blocked: u32,
    pub move_capped: u32,
    pub stalled: u32,

    /// Games decided before anyone slid a piece
    pub placing_phase_wins: u32,
    pub games_reaching_moving_phase: u32,

    pub avg_moves: f64,
    pub avg_clicks: f64,
    pub total_clicks: u64,
    pub total_ignored_clicks: u64,
    pub total_forced_center_selections: u64,
    pub total_jumps: u64,
    pub invariant_violations: u64,

    // Individual games for detailed analysis
    #[serde(skip)]
    pub games: Vec<GameStats>,
}

impl SimReport {
    pub fn from_games(games: Vec<GameStats>) -> Self {
        let num_games = games.len() as u32;
        let x_wins = count(&games, |g| g.end == GameEnd::Won(Player::X));
        let o_wins = count(&games, |g| g.end == GameEnd::Won(Player::O));
        let blocked = count(&games, |g| g.end == GameEnd::Blocked);
        let move_capped = count(&games, |g| g.end == GameEnd::MoveCap);
        let stalled = count(&games, |g| g.end == GameEnd::Stalled);
        let placing_phase_wins = count(&games, |g| {
            matches!(g.end, GameEnd::Won(_)) && g.moving_phase_at.is_none()
        });
        let games_reaching_moving_phase = count(&games, |g| g.moving_phase_at.is_some());

        let total_clicks: u64 = games.iter().map(|g| g.clicks as u64).sum();
        let total_moves: u64 = games.iter().map(|g| g.moves_played as u64).sum();
        let divisor = num_games.max(1) as f64;

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            num_games,
            x_wins,
            o_wins,
            blocked,
            move_capped,
            stalled,
            placing_phase_wins,
            games_reaching_moving_phase,
            avg_moves: total_moves as f64 / divisor,
            avg_clicks: total_clicks as f64 / divisor,
            total_clicks,
            total_ignored_clicks: games.iter().map(|g| g.ignored_clicks as u64).sum(),
            total_forced_center_selections: games
                .iter()
                .map(|g| g.forced_center_selections as u64)
                .sum(),
            total_jumps: games.iter().map(|g| g.jumps as u64).sum(),
            invariant_violations: games.iter().map(|g| g.invariant_violations as u64).sum(),
            games,
        }
    }

    fn percent(&self, n: u32) -> f64 {
        if self.num_games == 0 {
            0.0
        } else {
            n as f64 / self.num_games as f64 * 100.0
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SLIDETOE SELF-PLAY REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Games played:        {}\n", self.num_games));
        report.push_str(&format!(
            "X wins:              {} ({:.1}%)\n",
            self.x_wins,
            self.percent(self.x_wins)
        ));
        report.push_str(&format!(
            "O wins:              {} ({:.1}%)\n",
            self.o_wins,
            self.percent(self.o_wins)
        ));
        report.push_str(&format!(
            "Blocked:             {} ({:.1}%)\n",
            self.blocked,
            self.percent(self.blocked)
        ));
        report.push_str(&format!("Move cap reached:    {}\n", self.move_capped));
        report.push_str(&format!("Stalled:             {}\n\n", self.stalled));

        report.push_str("── Phases ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "Won while placing:   {} ({:.1}%)\n",
            self.placing_phase_wins,
            self.percent(self.placing_phase_wins)
        ));
        report.push_str(&format!(
            "Reached moving:      {} ({:.1}%)\n\n",
            self.games_reaching_moving_phase,
            self.percent(self.games_reaching_moving_phase)
        ));

        report.push_str("── Clicks ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("Avg moves per game:  {:.1}\n", self.avg_moves));
        report.push_str(&format!("Avg clicks per game: {:.1}\n", self.avg_clicks));
        report.push_str(&format!("Ignored clicks:      {}\n", self.total_ignored_clicks));
        report.push_str(&format!(
            "Forced center picks: {}\n",
            self.total_forced_center_selections
        ));
        report.push_str(&format!("History jumps:       {}\n", self.total_jumps));

        if self.invariant_violations > 0 {
            report.push_str(&format!(
                "\n  ⚠️  {} invariant violations detected\n",
                self.invariant_violations
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line summary for `--quiet` runs.
    pub fn summary_line(&self) -> String {
        format!(
            "games={} x={} o={} blocked={} capped={} stalled={} avg_moves={:.1}",
            self.num_games,
            self.x_wins,
            self.o_wins,
            self.blocked,
            self.move_capped,
            self.stalled,
            self.avg_moves
        )
    }
}

fn count(games: &[GameStats], pred: impl Fn(&GameStats) -> bool) -> u32 {
    games.iter().filter(|g| pred(g)).count() as u32
}
