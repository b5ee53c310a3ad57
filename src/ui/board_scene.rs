//! Board rendering.

use super::game_common::{create_game_layout, render_status_bar};
use super::history_panel::render_history_panel;
use crate::game::{is_adjacent, GameSession, GameView, Phase, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const BOARD_WIDTH: u16 = 15;
const BOARD_HEIGHT: u16 = 5;
const HISTORY_PANEL_WIDTH: u16 = 22;

/// Connecting lines drawn behind the pieces. Cells sit at x = 0, 6, 12 on
/// the even rows.
const BOARD_LINES: [&str; 5] = [
    "   \u{2500}\u{2500}\u{2500}   \u{2500}\u{2500}\u{2500}   ",
    " \u{2502} \u{2572}   \u{2502}   \u{2571} \u{2502} ",
    "   \u{2500}\u{2500}\u{2500}   \u{2500}\u{2500}\u{2500}   ",
    " \u{2502} \u{2571}   \u{2502}   \u{2572} \u{2502} ",
    "   \u{2500}\u{2500}\u{2500}   \u{2500}\u{2500}\u{2500}   ",
];

const LINE_COLOR: Color = Color::Rgb(80, 80, 80);
const X_COLOR: Color = Color::White;
const O_COLOR: Color = Color::LightRed;
const FOCUS_COLOR: Color = Color::Yellow;
const SELECTED_COLOR: Color = Color::Rgb(100, 200, 100);
const DESTINATION_COLOR: Color = Color::Rgb(200, 100, 200);
const WIN_COLOR: Color = Color::Green;

/// Render the full game screen: board, status bar, and move list.
pub fn render_board_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    let view = session.view();
    let title = format!(" SlideToe \u{2500} {} ", view.phase_label);
    let layout = create_game_layout(
        frame,
        area,
        &title,
        Color::Cyan,
        BOARD_HEIGHT,
        HISTORY_PANEL_WIDTH,
    );

    render_board(frame, layout.content, &view, session.focus);
    render_status(frame, layout.status_bar, &view);
    render_history_panel(frame, layout.info_panel, &view);
}

fn render_board(frame: &mut Frame, area: Rect, view: &GameView, focus: usize) {
    let x_offset = area.x + area.width.saturating_sub(BOARD_WIDTH) / 2;
    let y_offset = area.y + area.height.saturating_sub(BOARD_HEIGHT) / 2;

    for (i, line) in BOARD_LINES.iter().enumerate() {
        let row_y = y_offset + i as u16;
        if row_y >= area.y + area.height {
            break;
        }
        let text = Paragraph::new(*line).style(Style::default().fg(LINE_COLOR));
        frame.render_widget(text, Rect::new(x_offset, row_y, BOARD_WIDTH.min(area.width), 1));
    }

    let destinations = legal_destinations(view);

    for (index, cell) in view.cells.iter().enumerate() {
        let x = x_offset + (index % 3) as u16 * 6;
        let y = y_offset + (index / 3) as u16 * 2;
        if x + 3 > area.x + area.width || y >= area.y + area.height {
            continue;
        }

        let piece = match cell {
            Some(player) => player.symbol(),
            None if destinations.contains(&index) => '\u{25C6}', // ◆
            None => '\u{00B7}',                                  // ·
        };

        let mut style = match cell {
            Some(Player::X) => Style::default().fg(X_COLOR).add_modifier(Modifier::BOLD),
            Some(Player::O) => Style::default().fg(O_COLOR).add_modifier(Modifier::BOLD),
            None if destinations.contains(&index) => Style::default().fg(DESTINATION_COLOR),
            None => Style::default().fg(LINE_COLOR),
        };

        let on_winning_line = view
            .winning_line
            .is_some_and(|line| line.contains(&index));
        if on_winning_line {
            style = style.fg(WIN_COLOR);
        }

        let (open, close) = if index == focus && view.winner.is_none() {
            style = style.fg(FOCUS_COLOR);
            ('[', ']')
        } else if view.selected == Some(index) {
            style = style.fg(SELECTED_COLOR);
            ('<', '>')
        } else {
            (' ', ' ')
        };

        let token = format!("{}{}{}", open, piece, close);
        frame.render_widget(Paragraph::new(token).style(style), Rect::new(x, y, 3, 1));
    }
}

/// Cells the current click could land on.
fn legal_destinations(view: &GameView) -> Vec<usize> {
    if view.winner.is_some() {
        return Vec::new();
    }
    match (view.phase, view.selected) {
        (Phase::Placing, _) => (0..view.cells.len())
            .filter(|&i| view.cells[i].is_none())
            .collect(),
        (Phase::Moving, Some(from)) => (0..view.cells.len())
            .filter(|&to| view.cells[to].is_none() && is_adjacent(from, to))
            .collect(),
        (Phase::Moving, None) => Vec::new(),
    }
}

fn render_status(frame: &mut Frame, area: Rect, view: &GameView) {
    let (status_text, status_color) = if view.winner.is_some() {
        (view.status.clone(), WIN_COLOR)
    } else if view.blocked {
        (format!("{} (no slides left)", view.status), Color::LightRed)
    } else if view.selected.is_some() {
        (format!("{} \u{2500} pick a destination", view.status), Color::Cyan)
    } else {
        (view.status.clone(), Color::White)
    };

    let controls: &[(&str, &str)] = if view.winner.is_some() {
        &[("[ ]", "History"), ("[N]", "New"), ("[Q]", "Quit")]
    } else {
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Click"),
            ("[ ]", "History"),
            ("[Q]", "Quit"),
        ]
    };

    render_status_bar(frame, area, &status_text, status_color, controls);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_in_placing_phase() {
        let mut session = GameSession::new();
        session.on_cell_click(4);
        let dest = legal_destinations(&session.view());
        assert_eq!(dest, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_destinations_follow_selection() {
        let mut session = GameSession::new();
        // X: 0, 2, 7   O: 1, 3, 8
        for cell in [0, 1, 2, 3, 7, 8] {
            session.on_cell_click(cell);
        }
        assert!(legal_destinations(&session.view()).is_empty());

        session.on_cell_click(7);
        assert_eq!(legal_destinations(&session.view()), vec![4, 5, 6]);
    }

    #[test]
    fn test_board_lines_width() {
        for line in BOARD_LINES {
            assert_eq!(line.chars().count(), BOARD_WIDTH as usize);
        }
    }
}
