//! Rotate prompt for terminals too narrow for the chart

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

/// Draw the centered guidance message shown instead of the chart.
pub(crate) fn draw_rotate_prompt(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg, area);

    let lines = vec![
        Line::styled(
            "Please widen your terminal",
            Style::default()
                .fg(theme.guard_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            "The goal chart is laid out for landscape windows.",
            Style::default().fg(theme.guard_text),
        ),
        Line::styled(
            format!("current size: {}x{}", area.width, area.height),
            Style::default().fg(theme.guard_text),
        ),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Fill(1),
        ])
        .split(area);

    let msg = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background));
    f.render_widget(msg, chunks[1]);
}
