//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line form field with an inline error line below it
pub fn draw_field_with_error(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Bordered input
            Constraint::Length(1), // Error line
        ])
        .split(area);

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Error state wins over focus for the border color
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        text_style
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(value, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.block(block), chunks[0]);

    if let Some(message) = error {
        let error_line =
            Paragraph::new(format!(" {message}")).style(Style::default().fg(Color::Red));
        frame.render_widget(error_line, chunks[1]);
    }
}
