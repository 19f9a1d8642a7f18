//! Registration form rendering
//!
//! Error labels stack above the inputs; the submit button renders disabled
//! while any field fails validation.

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::validation::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 52;
// Errors (3) + three fields (3 each) + button + hint + status, plus borders
const FORM_HEIGHT: u16 = 3 + 3 * 3 + BUTTON_HEIGHT + 1 + 1 + 2;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let column = centered(area, FORM_WIDTH, FORM_HEIGHT);

    let block = Block::default()
        .title(" New User ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(column);
    frame.render_widget(block, column);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Error labels
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(3),             // Repeat password
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(1),             // Hint
            Constraint::Length(1),             // Status
        ])
        .split(inner);

    draw_errors(frame, chunks[0], app);

    let fields = [
        (chunks[1], FieldId::Email),
        (chunks[2], FieldId::Password),
        (chunks[3], FieldId::RepeatPassword),
    ];
    for (field_area, id) in fields {
        draw_field(
            frame,
            field_area,
            app.form.field(id),
            app.form.active_field() == Some(id),
            app.engine.visible_error(id).is_some(),
        );
    }

    render_button(
        frame,
        chunks[4],
        "Register",
        app.form.on_submit_button(),
        app.engine.is_valid(),
    );

    if app.config.show_hints_enabled() {
        let hint = Paragraph::new(
            "8+ chars, upper & lower case, a digit and one of !@#$%^&*",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, chunks[5]);
    }

    if let Some(ref message) = app.status_message {
        let status = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Green));
        frame.render_widget(status, chunks[6]);
    }
}

/// One red line per field with a visible validation error
fn draw_errors(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = FieldId::ALL
        .into_iter()
        .filter_map(|field| app.engine.visible_error(field))
        .map(|message| Line::styled(message, Style::default().fg(Color::Red)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area)[1];
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(column)[1]
}
