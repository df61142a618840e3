//! Demographics step form rendering

use super::field_renderer::draw_field_with_error;
use crate::app::App;
use crate::country;
use crate::state::Field;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the demographics step form
pub fn draw_step_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Age + error line
            Constraint::Length(4),             // Country + error line
            Constraint::Length(4),             // Education + error line
            Constraint::Length(BUTTON_HEIGHT), // Save row
            Constraint::Min(0),                // Document requirements
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Applicant Demographics (Step 1) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let state = &app.state;
    let form = &state.form;

    let age_display = state.data.age.map(|a| a.to_string()).unwrap_or_default();
    draw_field_with_error(
        frame,
        chunks[0],
        Field::Age.label(),
        &age_display,
        form.active_input() == Some(Field::Age),
        state.errors.message(Field::Age),
    );

    let country_display = match country::lookup(&state.data.country_of_origin) {
        Some(c) => c.option_label(),
        None => "Select a country".to_string(),
    };
    draw_field_with_error(
        frame,
        chunks[1],
        Field::CountryOfOrigin.label(),
        &country_display,
        form.active_input() == Some(Field::CountryOfOrigin),
        state.errors.message(Field::CountryOfOrigin),
    );

    let education_display = state
        .data
        .education_level
        .map(|l| l.label().to_string())
        .unwrap_or_else(|| "Select education level".to_string());
    draw_field_with_error(
        frame,
        chunks[2],
        Field::EducationLevel.label(),
        &education_display,
        form.active_input() == Some(Field::EducationLevel),
        state.errors.message(Field::EducationLevel),
    );

    let save_area = Rect {
        width: chunks[3].width.min(12),
        ..chunks[3]
    };
    render_button(frame, save_area, "Save", form.is_save_row_active());

    if !state.data.country_of_origin.is_empty() {
        draw_requirements(frame, chunks[4], &state.data.country_of_origin);
    }
}

/// One bullet line per document requirement, provider order preserved
fn requirement_items(code: &str) -> Vec<String> {
    country::document_requirements(code)
        .iter()
        .map(|req| format!("• {req}"))
        .collect()
}

/// Draw the country-specific document requirements panel
fn draw_requirements(frame: &mut Frame, area: Rect, code: &str) {
    let Some(country) = country::lookup(code) else {
        return;
    };

    let block = Block::default()
        .title(format!(" Required Documents for {} ", country.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let lines: Vec<Line> = requirement_items(code).into_iter().map(Line::from).collect();
    let list = Paragraph::new(lines)
        .style(Style::default().fg(Color::Blue))
        .wrap(Wrap { trim: false });

    frame.render_widget(list.block(block), area);
}
