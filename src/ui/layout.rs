//! Layout components (content area, status bar)

use crate::platform::SAVE_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar with key hints
pub fn draw_status_bar(frame: &mut Frame) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = format!(" Tab:next  ↑/↓:choose  {SAVE_SHORTCUT}:save  Esc:quit");
    let status =
        Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(status, status_area);
}
