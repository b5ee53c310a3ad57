//! Click resolution: placement, slide selection, and the forced center rule.

use super::session::{FocusDirection, GameSession};
use super::types::{Board, Phase, Player, Slide, ADJACENCIES};
use crate::constants::{BOARD_CELLS, CENTER};
use tracing::{debug, trace};

/// What a click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A mark was placed at the cell (placing phase).
    Placed(usize),
    /// A piece slid between two cells (moving phase).
    Slid(Slide),
    /// An own piece was picked up.
    Selected(usize),
    /// The center piece was picked up by the forced center rule.
    CenterForced,
    /// The selected piece was put back down.
    Deselected,
}

impl ClickOutcome {
    /// A board was committed to history.
    pub fn is_move(&self) -> bool {
        matches!(self, ClickOutcome::Placed(_) | ClickOutcome::Slid(_))
    }
}

/// Input actions for a game session (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardInput {
    Up,
    Down,
    Left,
    Right,
    /// Click the focused cell
    Select,
    /// Click a cell directly
    Cell(usize),
    HistoryBack,
    HistoryForward,
    HistoryStart,
    HistoryEnd,
    Other,
}

/// Process one input. Returns true if the input was handled.
pub fn process_input(session: &mut GameSession, input: BoardInput) -> bool {
    match input {
        BoardInput::Up => session.move_focus(FocusDirection::Up),
        BoardInput::Down => session.move_focus(FocusDirection::Down),
        BoardInput::Left => session.move_focus(FocusDirection::Left),
        BoardInput::Right => session.move_focus(FocusDirection::Right),
        BoardInput::Select => {
            let focus = session.focus;
            session.on_cell_click(focus);
        }
        BoardInput::Cell(index) => {
            if index >= BOARD_CELLS {
                return false;
            }
            session.focus = index;
            session.on_cell_click(index);
        }
        BoardInput::HistoryBack => {
            let cursor = session.history().cursor();
            return cursor > 0 && session.on_jump_to(cursor - 1);
        }
        BoardInput::HistoryForward => {
            let cursor = session.history().cursor();
            return session.on_jump_to(cursor + 1);
        }
        BoardInput::HistoryStart => {
            session.on_jump_to(0);
        }
        BoardInput::HistoryEnd => {
            let last = session.history().len() - 1;
            session.on_jump_to(last);
        }
        BoardInput::Other => return false,
    }
    true
}

/// All slides available to `player` on `board`, by source then destination.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Slide> {
    let mut moves = Vec::new();
    for from in board.pieces_of(player) {
        for &to in ADJACENCIES[from].iter() {
            if board.is_empty_at(to) {
                moves.push(Slide { from, to });
            }
        }
    }
    moves
}

/// Whether any single slide by `player` completes a line for them.
pub fn has_winning_move(board: &Board, player: Player) -> bool {
    legal_moves(board, player)
        .iter()
        .any(|slide| board.would_win(slide.from, slide.to, player))
}

/// Resolve a click on `index` against the board at the history cursor.
///
/// Phase and winner are read from the board before the click. A click that
/// does not lead to a selection change or a move leaves the session as it was.
pub fn process_click(session: &mut GameSession, index: usize) -> ClickOutcome {
    if index >= BOARD_CELLS {
        trace!(index, "click outside the board");
        return ClickOutcome::Ignored;
    }

    let board = *session.board();
    let phase = board.phase();

    if let Some(winner) = board.winner() {
        trace!(index, %winner, "click after game over");
        return ClickOutcome::Ignored;
    }

    let player = session.to_move();
    match phase {
        Phase::Placing => {
            if !board.is_empty_at(index) {
                trace!(index, "placing on an occupied cell");
                return ClickOutcome::Ignored;
            }
            let next = board.with_placement(index, player);
            session.commit(next);
            debug!(index, %player, "placed piece");
            if next.phase() == Phase::Moving {
                debug!("all pieces placed, entering moving phase");
            }
            ClickOutcome::Placed(index)
        }
        Phase::Moving => process_moving_click(session, &board, index, player),
    }
}

fn process_moving_click(
    session: &mut GameSession,
    board: &Board,
    index: usize,
    player: Player,
) -> ClickOutcome {
    let selected = session.selected_square();

    // Holding the center without a winning slide anywhere forces the center
    // piece to move, whatever was clicked.
    if board.get(CENTER) == Some(player) && !has_winning_move(board, player) {
        if selected != Some(CENTER) {
            session.set_selected(Some(CENTER));
            trace!(index, %player, "center piece forced");
            return ClickOutcome::CenterForced;
        }
        if index != CENTER && board.is_valid_move(CENTER, index) {
            return commit_slide(session, board, Slide { from: CENTER, to: index }, player);
        }
        trace!(index, "forced center piece cannot go there");
        return ClickOutcome::Ignored;
    }

    let own_piece = board.get(index) == Some(player);
    match selected {
        None if own_piece => {
            session.set_selected(Some(index));
            trace!(index, "selected piece");
            ClickOutcome::Selected(index)
        }
        Some(from) if from == index => {
            session.set_selected(None);
            trace!(index, "deselected piece");
            ClickOutcome::Deselected
        }
        Some(_) if own_piece => {
            session.set_selected(Some(index));
            trace!(index, "reselected piece");
            ClickOutcome::Selected(index)
        }
        Some(from) if board.is_valid_move(from, index) => {
            commit_slide(session, board, Slide { from, to: index }, player)
        }
        _ => {
            trace!(index, ?selected, "click has no effect");
            ClickOutcome::Ignored
        }
    }
}

fn commit_slide(
    session: &mut GameSession,
    board: &Board,
    slide: Slide,
    player: Player,
) -> ClickOutcome {
    session.commit(board.with_slide(slide, player));
    debug!(from = slide.from, to = slide.to, %player, "slid piece");
    ClickOutcome::Slid(slide)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play placements for both players, alternating from X.
    fn placed(cells: &[usize]) -> GameSession {
        let mut session = GameSession::new();
        for &cell in cells {
            assert!(session.on_cell_click(cell).is_move(), "placing at {}", cell);
        }
        session
    }

    #[test]
    fn test_placing_sets_current_mark() {
        let mut session = GameSession::new();
        assert_eq!(session.on_cell_click(4), ClickOutcome::Placed(4));
        assert_eq!(session.board().get(4), Some(Player::X));
        assert_eq!(session.on_cell_click(0), ClickOutcome::Placed(0));
        assert_eq!(session.board().get(0), Some(Player::O));
        assert_eq!(session.history().cursor(), 2);
    }

    #[test]
    fn test_placing_on_occupied_cell_is_noop() {
        let mut session = placed(&[4]);
        let before = *session.board();
        assert_eq!(session.on_cell_click(4), ClickOutcome::Ignored);
        assert_eq!(*session.board(), before);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.selected_square(), None);
    }

    #[test]
    fn test_out_of_range_click_is_noop() {
        let mut session = GameSession::new();
        assert_eq!(session.on_cell_click(9), ClickOutcome::Ignored);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_every_empty_cell_accepts_placement() {
        for cell in 0..BOARD_CELLS {
            let mut session = GameSession::new();
            assert_eq!(session.on_cell_click(cell), ClickOutcome::Placed(cell));
            assert_eq!(session.board().get(cell), Some(Player::X));
            assert_eq!(session.history().cursor(), 1);
        }
    }

    #[test]
    fn test_phase_changes_after_six_pieces() {
        let mut session = placed(&[0, 1, 5]);
        assert_eq!(session.phase(), Phase::Placing);
        session.on_cell_click(2);
        session.on_cell_click(3);
        assert_eq!(session.phase(), Phase::Placing);
        session.on_cell_click(6);
        assert_eq!(session.board().piece_count(), 6);
        assert_eq!(session.phase(), Phase::Moving);
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_win_freezes_game() {
        // X: 0, 1, 2 / O: 3, 4
        let mut session = placed(&[0, 3, 1, 4, 2]);
        assert_eq!(session.winner(), Some(Player::X));
        let len = session.history().len();
        for cell in 0..BOARD_CELLS {
            assert_eq!(session.on_cell_click(cell), ClickOutcome::Ignored);
        }
        assert_eq!(session.history().len(), len);
    }

    /// Moving-phase board, X to move without the center:
    /// ```text
    /// X O X
    /// O . .
    /// . X O
    /// ```
    fn moving_without_center() -> GameSession {
        let session = placed(&[0, 1, 2, 3, 7, 8]);
        assert_eq!(session.phase(), Phase::Moving);
        assert!(session.x_is_next());
        session
    }

    #[test]
    fn test_select_deselect_reselect() {
        let mut session = moving_without_center();
        assert_eq!(session.on_cell_click(0), ClickOutcome::Selected(0));
        assert_eq!(session.selected_square(), Some(0));

        // Toggle off
        assert_eq!(session.on_cell_click(0), ClickOutcome::Deselected);
        assert_eq!(session.selected_square(), None);

        // Reselect another own piece
        session.on_cell_click(0);
        assert_eq!(session.on_cell_click(2), ClickOutcome::Selected(2));
        assert_eq!(session.selected_square(), Some(2));
    }

    #[test]
    fn test_opponent_piece_or_empty_without_selection_is_noop() {
        let mut session = moving_without_center();
        assert_eq!(session.on_cell_click(1), ClickOutcome::Ignored);
        assert_eq!(session.on_cell_click(4), ClickOutcome::Ignored);
        assert_eq!(session.selected_square(), None);
        assert_eq!(session.history().len(), 7);
    }

    #[test]
    fn test_slide_to_adjacent_empty_cell() {
        let mut session = moving_without_center();
        session.on_cell_click(7);
        assert_eq!(
            session.on_cell_click(4),
            ClickOutcome::Slid(Slide { from: 7, to: 4 })
        );
        assert_eq!(session.board().get(7), None);
        assert_eq!(session.board().get(4), Some(Player::X));
        assert_eq!(session.selected_square(), None);
        assert!(!session.x_is_next());
    }

    #[test]
    fn test_slide_to_non_adjacent_cell_is_noop() {
        // X: 0, 2, 7   O: 1, 3, 8; empty: 4, 5, 6
        let mut session = moving_without_center();
        session.on_cell_click(0);
        // 0 -> 5 is not a slide
        assert_eq!(session.on_cell_click(5), ClickOutcome::Ignored);
        assert_eq!(session.selected_square(), Some(0));
        assert_eq!(session.history().len(), 7);
    }

    /// X holds the center with no winning slide:
    /// ```text
    /// X O .
    /// O X .
    /// . X O
    /// ```
    fn moving_with_center() -> GameSession {
        let session = placed(&[0, 1, 4, 3, 7, 8]);
        assert_eq!(session.board().get(4), Some(Player::X));
        assert!(session.x_is_next());
        assert!(!has_winning_move(session.board(), Player::X));
        session
    }

    #[test]
    fn test_center_forced_on_any_click() {
        let mut session = moving_with_center();
        // Clicking a different own piece still picks up the center
        assert_eq!(session.on_cell_click(0), ClickOutcome::CenterForced);
        assert_eq!(session.selected_square(), Some(CENTER));
        assert_eq!(session.history().len(), 7);
    }

    #[test]
    fn test_center_forced_then_moves() {
        let mut session = moving_with_center();
        session.on_cell_click(5);
        assert_eq!(
            session.on_cell_click(5),
            ClickOutcome::Slid(Slide { from: 4, to: 5 })
        );
        assert_eq!(session.board().get(4), None);
        assert_eq!(session.board().get(5), Some(Player::X));
        assert_eq!(session.selected_square(), None);
    }

    #[test]
    fn test_forced_center_ignores_deselect_and_reselect() {
        let mut session = moving_with_center();
        session.on_cell_click(2);
        // Re-clicking the center does not put it down
        assert_eq!(session.on_cell_click(4), ClickOutcome::Ignored);
        assert_eq!(session.selected_square(), Some(CENTER));
        // Clicking another own piece does not switch the selection
        assert_eq!(session.on_cell_click(0), ClickOutcome::Ignored);
        assert_eq!(session.selected_square(), Some(CENTER));
        // Occupied destination
        assert_eq!(session.on_cell_click(8), ClickOutcome::Ignored);
    }

    #[test]
    fn test_winning_move_lifts_center_rule() {
        // X: 0, 4, 5 / O: 1, 3, 7; X sliding 5 -> 8 completes 0-4-8
        let mut session = placed(&[0, 1, 4, 3, 5, 7]);
        assert!(session.x_is_next());
        assert!(has_winning_move(session.board(), Player::X));

        assert_eq!(session.on_cell_click(5), ClickOutcome::Selected(5));
        assert_eq!(
            session.on_cell_click(8),
            ClickOutcome::Slid(Slide { from: 5, to: 8 })
        );
        assert_eq!(session.winner(), Some(Player::X));
    }

    #[test]
    fn test_legal_moves_enumeration() {
        // X: 0, 2, 7   O: 1, 3, 8; empty: 4, 5, 6
        let session = moving_without_center();
        let moves = legal_moves(session.board(), Player::X);
        assert_eq!(
            moves,
            vec![
                Slide { from: 0, to: 4 },
                Slide { from: 2, to: 4 },
                Slide { from: 2, to: 5 },
                Slide { from: 7, to: 4 },
                Slide { from: 7, to: 5 },
                Slide { from: 7, to: 6 },
            ]
        );
    }

    #[test]
    fn test_process_input_focus_and_select() {
        let mut session = GameSession::new();
        assert!(process_input(&mut session, BoardInput::Right));
        assert!(process_input(&mut session, BoardInput::Down));
        assert!(process_input(&mut session, BoardInput::Select));
        assert_eq!(session.board().get(4), Some(Player::X));

        assert!(process_input(&mut session, BoardInput::Cell(8)));
        assert_eq!(session.focus, 8);
        assert_eq!(session.board().get(8), Some(Player::O));

        assert!(!process_input(&mut session, BoardInput::Cell(9)));
        assert!(!process_input(&mut session, BoardInput::Other));
    }

    #[test]
    fn test_process_input_history_navigation() {
        let mut session = placed(&[0, 1, 2]);
        assert!(process_input(&mut session, BoardInput::HistoryBack));
        assert_eq!(session.history().cursor(), 2);
        assert!(process_input(&mut session, BoardInput::HistoryStart));
        assert_eq!(session.history().cursor(), 0);
        assert!(!process_input(&mut session, BoardInput::HistoryBack));
        assert!(process_input(&mut session, BoardInput::HistoryForward));
        assert_eq!(session.history().cursor(), 1);
        assert!(process_input(&mut session, BoardInput::HistoryEnd));
        assert_eq!(session.history().cursor(), 3);
        assert!(!process_input(&mut session, BoardInput::HistoryForward));
    }
}
