//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod signup;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    signup::draw(frame, area, app);
}
