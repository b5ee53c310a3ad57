//! Keyboard handling for the game screen.
//!
//! Maps terminal key events to engine inputs; the engine itself never sees
//! crossterm types.

use crate::game::{process_input, BoardInput, GameSession};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the main loop.
    Continue,
    /// Leave the program.
    Quit,
}

/// Translate a key into an engine input.
pub fn map_key(code: KeyCode) -> BoardInput {
    match code {
        KeyCode::Up | KeyCode::Char('k') => BoardInput::Up,
        KeyCode::Down | KeyCode::Char('j') => BoardInput::Down,
        KeyCode::Left | KeyCode::Char('h') => BoardInput::Left,
        KeyCode::Right | KeyCode::Char('l') => BoardInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => BoardInput::Select,
        KeyCode::Char(c @ '1'..='9') => BoardInput::Cell(c as usize - '1' as usize),
        KeyCode::Char('[') | KeyCode::PageUp => BoardInput::HistoryBack,
        KeyCode::Char(']') | KeyCode::PageDown => BoardInput::HistoryForward,
        KeyCode::Home => BoardInput::HistoryStart,
        KeyCode::End => BoardInput::HistoryEnd,
        _ => BoardInput::Other,
    }
}

/// Handle one key event against the session.
pub fn handle_key(key: KeyEvent, session: &mut GameSession) -> InputResult {
    // Windows terminals report releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') => {
            tracing::info!("new game");
            *session = GameSession::new();
            return InputResult::Continue;
        }
        _ => {}
    }

    process_input(session, map_key(key.code));
    InputResult::Continue
}
