//! Drawing functions for the TUI
//!
//! Rendering is split by view mode, decided from the frame size on every
//! draw so resizes take effect immediately:
//! - `chart` - header plus the nested 3x3 goal grids
//! - `rotate` - guidance when the terminal is too narrow for the chart

mod chart;
mod rotate;


use ratatui::Frame;

use crate::app::App;
use crate::ui::viewport::ViewMode;

use chart::draw_chart;
use rotate::draw_rotate_prompt;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let mode = ViewMode::classify(area.width, area.height, app.config().guard.wide_columns);
    match mode {
        ViewMode::Chart => draw_chart(f, app),
        ViewMode::RotatePrompt => draw_rotate_prompt(f, app),
    }
}
