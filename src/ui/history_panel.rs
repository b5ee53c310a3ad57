//! Jump-to-move list shown beside the board.

use crate::game::GameView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_history_panel(frame: &mut Frame, area: Rect, view: &GameView) {
    let block = Block::default()
        .title(" Moves ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let first = first_visible_entry(view.move_index, view.moves.len(), visible);

    let lines: Vec<Line> = view
        .moves
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(index, label)| {
            if index == view.move_index {
                Line::from(vec![
                    Span::styled("\u{25B6} ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        label.clone(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("  {}", label),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// First entry to draw so the current one stays on screen.
fn first_visible_entry(current: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let last_start = total - visible;
    current.saturating_sub(visible - 1).min(last_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_list_starts_at_top() {
        assert_eq!(first_visible_entry(3, 5, 10), 0);
        assert_eq!(first_visible_entry(0, 1, 0), 0);
    }

    #[test]
    fn test_long_list_follows_current_entry() {
        // 20 entries, 5 rows
        assert_eq!(first_visible_entry(0, 20, 5), 0);
        assert_eq!(first_visible_entry(4, 20, 5), 0);
        assert_eq!(first_visible_entry(5, 20, 5), 1);
        assert_eq!(first_visible_entry(19, 20, 5), 15);
    }
}
