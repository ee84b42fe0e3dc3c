//! Grid cell widget for the goal chart
//!
//! Renders one cell of a mini-grid:
//! - Gradient background sampled column by column
//! - Label word-wrapped to the cell width, centered both ways
//! - Ellipsis when the label cannot fit

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;

/// Which gradient fills the cell background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellFill {
    /// One of the eight palette slots, cycled modulo eight
    Palette(usize),
    /// The main-theme card gradient
    Center,
}

/// One cell of a 3x3 mini-grid.
pub struct GoalCell<'a> {
    text: &'a str,
    theme: &'a Theme,
    fill: CellFill,
    bold: bool,
}

impl<'a> GoalCell<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self {
            text,
            theme,
            fill: CellFill::Palette(0),
            bold: false,
        }
    }

    pub fn fill(mut self, fill: CellFill) -> Self {
        self.fill = fill;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl<'a> Widget for GoalCell<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (gradient, fg) = match self.fill {
            CellFill::Palette(idx) => (self.theme.palette_color(idx), self.theme.cell_fg),
            CellFill::Center => (self.theme.center, self.theme.center_fg),
        };

        // Paint the gradient, one background color per column.
        let span = f32::from(area.width.saturating_sub(1).max(1));
        for (i, x) in (area.x..area.x + area.width).enumerate() {
            let color = gradient.sample(i as f32 / span);
            for y in area.y..area.y + area.height {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(color);
                }
            }
        }

        // Narrow cells give up their padding rather than their label.
        let padding_x: u16 = if area.width >= 5 { 1 } else { 0 };
        let inner_width = area.width - padding_x * 2;

        let lines = wrap_text(self.text, inner_width as usize, area.height as usize);
        if lines.is_empty() {
            return;
        }

        let mut style = Style::default().fg(fg);
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }

        // Center the wrapped block vertically, each line horizontally. The
        // text style leaves bg unset so the gradient shows through.
        let start_y = area.y + (area.height - lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let line_width = line.width() as u16;
            let x = area.x + padding_x + inner_width.saturating_sub(line_width) / 2;
            buf.set_string(x, start_y + i as u16, line, style);
        }
    }
}

/// Greedy word wrap by display width. Returns at most `max_lines` lines, each
/// at most `max_width` columns; overflow ends in an ellipsis.
fn wrap_text(s: &str, max_width: usize, max_lines: usize) -> Vec<String> {
    if max_width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in s.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= max_width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // A single word wider than the cell gets hard-truncated.
            lines.push(truncate(word, max_width));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = truncate(&format!("{last}…"), max_width);
        }
    }
    lines
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}
