//! Chart page drawing
//!
//! Renders the header (title plus deadline badge) and the outer 3x3 grid
//! of mini-grids. Cell coloring follows the chart structure: the central
//! grid walks the palette around its ring and paints its center with the
//! main-theme gradient, while each detail grid uses its own palette slot
//! for all nine cells.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::chart::{outer_items, ring_color_index, GridItem, CENTER};
use crate::ui::cell::{CellFill, GoalCell};
use crate::ui::layout::{center_horizontal, split_3x3};
use crate::ui::theme::Theme;

pub(crate) fn draw_chart(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Chart body
        ])
        .split(area);

    draw_header(f, app, chunks[0], theme);
    draw_outer_grid(f, app, chunks[2], theme);
}

/// Draw the header line: app title left, deadline badge right
fn draw_header(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let deadline = &app.chart().deadline;
    let badge_width = if deadline.is_empty() {
        0
    } else {
        deadline.width() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(badge_width)])
        .split(area);

    let title = Paragraph::new(" GoalGrid").style(
        Style::default()
            .fg(theme.title)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    if badge_width > 0 {
        let badge = Paragraph::new(format!(" {deadline} "))
            .style(Style::default().fg(theme.badge_fg).bg(theme.badge_bg));
        f.render_widget(badge, chunks[1]);
    }
}

/// Draw the outer 3x3 grid of mini-grids, clamped and centered like a
/// max-width page container
fn draw_outer_grid(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let appearance = &app.config().appearance;
    let area = center_horizontal(area, appearance.max_grid_width);

    let items = outer_items(app.chart());
    let cells = split_3x3(area, appearance.outer_gap);
    for (item, cell) in items.iter().zip(cells) {
        draw_mini_grid(f, item, cell, appearance.gap, theme);
    }
}

fn draw_mini_grid(f: &mut Frame, item: &GridItem, area: Rect, gap: u16, theme: &Theme) {
    // Panel fill shows through the inner gaps.
    let panel = Block::default().style(Style::default().bg(theme.panel));
    f.render_widget(panel, area);

    let labels = item.labels();
    let cells = split_3x3(area, gap);
    for (position, (label, cell)) in labels.into_iter().zip(cells).enumerate() {
        let widget = GoalCell::new(label, theme)
            .fill(cell_fill(item, position))
            .bold(position == CENTER);
        f.render_widget(widget, cell);
    }
}

/// Fill for one cell of a mini-grid.
pub(super) fn cell_fill(item: &GridItem, position: usize) -> CellFill {
    match item.color_index() {
        Some(slot) => CellFill::Palette(slot),
        None if position == CENTER => CellFill::Center,
        None => CellFill::Palette(ring_color_index(position)),
    }
}
