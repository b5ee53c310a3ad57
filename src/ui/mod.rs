//! Terminal rendering for a game session.

pub mod board_scene;
pub mod game_common;
pub mod history_panel;

use crate::game::GameSession;
use ratatui::Frame;

/// Draw the whole screen for one frame.
pub fn draw_ui(frame: &mut Frame, session: &GameSession) {
    let area = frame.size();
    board_scene::render_board_scene(frame, area, session);
}
