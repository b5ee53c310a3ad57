//! Board data model for the slide variant of tic-tac-toe.
//!
//! Board layout (cells 0-8) and the lines a piece may slide along:
//! ```text
//! 0---1---2
//! | \ | / |
//! 3---4---5
//! | / | \ |
//! 6---7---8
//! ```
//! On top of the drawn lines, the edge midpoints form a diamond:
//! 1-3, 1-5, 7-3 and 7-5 are connected.

use crate::constants::{BOARD_CELLS, MOVING_PHASE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight three-in-a-row lines, in detection order: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Cells reachable by a single slide from each cell.
pub const ADJACENCIES: [&[usize]; BOARD_CELLS] = [
    // Corner 0: right, down, center
    &[1, 3, 4],
    // Edge 1: both row neighbours, center, and the diamond
    &[0, 2, 3, 4, 5],
    // Corner 2: left, down, center
    &[1, 4, 5],
    // Edge 3: up, down, center, and the diamond
    &[0, 1, 4, 6, 7],
    // Center: everything
    &[0, 1, 2, 3, 5, 6, 7, 8],
    // Edge 5: up, down, center, and the diamond
    &[1, 2, 4, 7, 8],
    // Corner 6: up, right, center
    &[3, 4, 7],
    // Edge 7: both row neighbours, center, and the diamond
    &[3, 4, 5, 6, 8],
    // Corner 8: up, left, center
    &[4, 5, 7],
];

/// One of the two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The player to move at a given history index.
    pub fn for_move_index(index: usize) -> Self {
        if index % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board cell: `None` is empty.
pub type Cell = Option<Player>;

/// Game phase, derived from the number of pieces on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Each player drops pieces on any empty cell.
    Placing,
    /// Pieces slide to adjacent empty cells.
    Moving,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Placing => "Placing phase",
            Phase::Moving => "Moving phase",
        }
    }
}

/// A slide of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub from: usize,
    pub to: usize,
}

/// Nine cells in row-major order.
///
/// `Board` is `Copy`: every move produces a fresh value and boards stored in
/// history are never written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells, mostly useful for tests and tools.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Cell contents; out-of-range indices read as empty.
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        index < BOARD_CELLS && self.cells[index].is_none()
    }

    /// Copy of this board with one cell replaced.
    pub fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }

    /// Copy of this board with `player`'s mark placed at `index`.
    pub fn with_placement(self, index: usize, player: Player) -> Self {
        self.with_cell(index, Some(player))
    }

    /// Copy of this board with the piece at `from` moved to `to` as `player`.
    pub fn with_slide(self, slide: Slide, player: Player) -> Self {
        self.with_cell(slide.from, None)
            .with_cell(slide.to, Some(player))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indices holding `player`'s pieces, ascending.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, &c)| c == Some(player))
            .map(|(i, _)| i)
    }

    pub fn phase(&self) -> Phase {
        if self.piece_count() < MOVING_PHASE_THRESHOLD {
            Phase::Placing
        } else {
            Phase::Moving
        }
    }

    /// First line (in `WIN_LINES` order) held entirely by one player.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        WIN_LINES.iter().copied().find(|&[a, b, c]| {
            self.cells[a].is_some()
                && self.cells[a] == self.cells[b]
                && self.cells[a] == self.cells[c]
        })
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_line().and_then(|[a, _, _]| self.cells[a])
    }

    /// `to` is empty and one slide away from `from`.
    pub fn is_valid_move(&self, from: usize, to: usize) -> bool {
        is_adjacent(from, to) && self.is_empty_at(to)
    }

    /// Whether `player` moving `from` -> `to` would complete a line for them.
    /// Works on a copy; `self` is untouched.
    pub fn would_win(&self, from: usize, to: usize, player: Player) -> bool {
        let candidate = self.with_slide(Slide { from, to }, player);
        candidate.winner() == Some(player)
    }
}

/// Fixed board topology, independent of occupancy.
pub fn is_adjacent(from: usize, to: usize) -> bool {
    from < BOARD_CELLS && ADJACENCIES[from].contains(&to)
}
