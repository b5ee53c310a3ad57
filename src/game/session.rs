//! Per-session game state owned by whoever drives the engine.

use super::history::History;
use super::logic::{legal_moves, process_click, ClickOutcome};
use super::types::{Board, Cell, Phase, Player};
use crate::constants::{BOARD_CELLS, BOARD_SIDE};
use serde::Serialize;

/// Direction for keyboard focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Active game: the board history plus transient selection state.
///
/// Nothing here is persisted; a new session starts from the empty board.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    history: History,
    /// Piece picked up during the moving phase, awaiting a destination
    selected: Option<usize>,
    /// Cell under the keyboard focus (0-8)
    pub focus: usize,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn board(&self) -> &Board {
        self.history.current()
    }

    pub fn phase(&self) -> Phase {
        self.board().phase()
    }

    pub fn winner(&self) -> Option<Player> {
        self.board().winner()
    }

    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    pub fn x_is_next(&self) -> bool {
        self.to_move() == Player::X
    }

    pub fn selected_square(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected;
    }

    pub(crate) fn commit(&mut self, next: Board) {
        self.history.apply_move(next);
        self.selected = None;
    }

    /// A cell was clicked. Invalid clicks are no-ops.
    pub fn on_cell_click(&mut self, index: usize) -> ClickOutcome {
        process_click(self, index)
    }

    /// Show the board at `move_index`. Out-of-range indices are ignored and
    /// return `false`. Any pending selection is dropped.
    pub fn on_jump_to(&mut self, move_index: usize) -> bool {
        if !self.history.jump_to(move_index) {
            tracing::trace!(move_index, len = self.history.len(), "jump out of range");
            return false;
        }
        self.selected = None;
        tracing::debug!(move_index, "jumped in history");
        true
    }

    /// "Winner: X" once the game is decided, otherwise "Next player: O".
    pub fn status(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {}", winner),
            None => format!("Next player: {}", self.to_move()),
        }
    }

    pub fn move_list(&self) -> Vec<String> {
        self.history.move_list()
    }

    /// The player to move has pieces but none of them can slide.
    pub fn is_blocked(&self) -> bool {
        self.phase() == Phase::Moving
            && self.winner().is_none()
            && legal_moves(self.board(), self.to_move()).is_empty()
    }

    /// Move the keyboard focus one cell, stopping at the edges.
    pub fn move_focus(&mut self, direction: FocusDirection) {
        let row = self.focus / BOARD_SIDE;
        let col = self.focus % BOARD_SIDE;
        let (row, col) = match direction {
            FocusDirection::Up => (row.saturating_sub(1), col),
            FocusDirection::Down => ((row + 1).min(BOARD_SIDE - 1), col),
            FocusDirection::Left => (row, col.saturating_sub(1)),
            FocusDirection::Right => (row, (col + 1).min(BOARD_SIDE - 1)),
        };
        self.focus = row * BOARD_SIDE + col;
    }

    /// Snapshot of everything a renderer needs.
    pub fn view(&self) -> GameView {
        let board = self.board();
        GameView {
            cells: *board.cells(),
            phase: self.phase(),
            phase_label: self.phase().label(),
            selected: self.selected,
            winner: self.winner(),
            winning_line: board.winning_line(),
            status: self.status(),
            next_player: self.to_move(),
            blocked: self.is_blocked(),
            move_index: self.history.cursor(),
            moves: self.move_list(),
        }
    }
}

/// Read-only state handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub cells: [Cell; BOARD_CELLS],
    pub phase: Phase,
    pub phase_label: &'static str,
    pub selected: Option<usize>,
    pub winner: Option<Player>,
    pub winning_line: Option<[usize; 3]>,
    pub status: String,
    pub next_player: Player,
    pub blocked: bool,
    pub move_index: usize,
    pub moves: Vec<String>,
}
