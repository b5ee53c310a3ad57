//! Linear board history with a movable cursor.

use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Snapshots of every board reached so far, plus the one being viewed.
///
/// Entry 0 is always the empty board. Jumping back only moves the cursor;
/// the discarded future is dropped when the next move is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    boards: Vec<Board>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Never true: the initial board is always present.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// The board at the cursor.
    pub fn current(&self) -> &Board {
        &self.boards[self.cursor]
    }

    pub fn is_latest(&self) -> bool {
        self.cursor + 1 == self.boards.len()
    }

    /// Whose turn it is at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_move_index(self.cursor)
    }

    /// Commit `next` as the successor of the current board.
    ///
    /// Entries after the cursor are discarded first. The caller guarantees
    /// `next` is a legal successor.
    pub fn apply_move(&mut self, next: Board) {
        self.boards.truncate(self.cursor + 1);
        self.boards.push(next);
        self.cursor = self.boards.len() - 1;
    }

    /// Move the cursor to `index`. Returns `false` and leaves the cursor
    /// alone when `index` is past the last entry.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.boards.len() {
            return false;
        }
        self.cursor = index;
        true
    }

    /// Labels for a jump-to-move list, one per entry.
    pub fn move_list(&self) -> Vec<String> {
        (0..self.boards.len())
            .map(|index| {
                if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", index)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_with_moves(cells: &[usize]) -> History {
        let mut history = History::new();
        for &cell in cells {
            let next = history
                .current()
                .with_placement(cell, history.to_move());
            history.apply_move(next);
        }
        history
    }

    #[test]
    fn test_new_history() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.cursor(), 0);
        assert_eq!(*history.current(), Board::new());
        assert_eq!(history.to_move(), Player::X);
        assert!(history.is_latest());
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let history = history_with_moves(&[0, 4]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current().get(0), Some(Player::X));
        assert_eq!(history.current().get(4), Some(Player::O));
        assert_eq!(history.to_move(), Player::X);
    }

    #[test]
    fn test_published_boards_are_not_rewritten() {
        let history = history_with_moves(&[0, 4, 8]);
        assert_eq!(history.boards()[0].piece_count(), 0);
        assert_eq!(history.boards()[1].piece_count(), 1);
        assert_eq!(history.boards()[2].piece_count(), 2);
        assert_eq!(history.boards()[3].piece_count(), 3);
    }

    #[test]
    fn test_jump_then_play_truncates_future() {
        // Length 5, cursor 4
        let mut history = history_with_moves(&[0, 1, 2, 3]);
        assert_eq!(history.len(), 5);
        assert_eq!(history.cursor(), 4);

        assert!(history.jump_to(2));
        assert_eq!(history.len(), 5); // jumping alone keeps the future
        assert_eq!(history.to_move(), Player::X);

        let next = history.current().with_placement(8, history.to_move());
        history.apply_move(next);

        assert_eq!(history.len(), 4);
        assert_eq!(history.cursor(), 3);
        assert_eq!(history.current().get(8), Some(Player::X));
        assert_eq!(history.current().get(2), None);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut history = history_with_moves(&[0, 1]);
        assert!(!history.jump_to(3));
        assert_eq!(history.cursor(), 2);
        assert!(history.jump_to(0));
        assert_eq!(history.cursor(), 0);
        assert!(!history.is_latest());
    }

    #[test]
    fn test_move_list_labels() {
        let history = history_with_moves(&[0, 1]);
        assert_eq!(
            history.move_list(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }
}
