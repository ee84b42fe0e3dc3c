//! Grid composition for the goal chart.
//!
//! Everything here is pure index arithmetic over 3x3 grids:
//! - `place_around` puts a center item and its eight surrounding items into
//!   the nine row-major cells, used for the mini-grids and the outer grid
//!   alike
//! - `ring_color_index` maps a surrounding position onto a palette slot
//! - `GridItem` tags each outer cell as the central grid or a detail grid

use crate::goals::{GoalChart, SubTheme};

/// Cells in one 3x3 grid.
pub const GRID_CELLS: usize = 9;
/// Row-major index of the center cell.
pub const CENTER: usize = 4;
/// Surrounding (non-center) cells in one grid.
pub const RING: usize = 8;

/// Place a center item and eight surrounding items into a 3x3 grid.
///
/// Row-major: `surrounding[0..4]` fills positions 0-3, `center` takes
/// position 4, `surrounding[4..8]` fills positions 5-8. No sorting, no
/// filtering - the input order is the display order.
pub fn place_around<T>(center: T, surrounding: [T; RING]) -> [T; GRID_CELLS] {
    let [a, b, c, d, e, f, g, h] = surrounding;
    [a, b, c, d, center, e, f, g, h]
}

/// Palette slot for a surrounding cell of the central grid.
///
/// `position` must be a ring position (0-8, never 4). Positions past the
/// center shift down by one, so the eight ring cells cover slots 0-7 with
/// each slot used exactly once.
pub fn ring_color_index(position: usize) -> usize {
    debug_assert!(position < GRID_CELLS && position != CENTER);
    if position > CENTER {
        position - 1
    } else {
        position
    }
}

/// One cell of the outer grid, borrowing from the chart for a render pass.
#[derive(Debug, Clone, Copy)]
pub enum GridItem<'a> {
    /// The central mini-grid: the main theme surrounded by the sub-themes.
    Central {
        main_theme: &'a str,
        sub_themes: &'a [SubTheme; RING],
    },
    /// One detail mini-grid: a sub-theme surrounded by its detail items.
    /// `index` is the sub-theme's position in the chart and selects the
    /// grid's palette slot.
    Detail {
        sub_theme: &'a SubTheme,
        index: usize,
    },
}

impl<'a> GridItem<'a> {
    /// The nine cell labels of this mini-grid in row-major order.
    pub fn labels(&self) -> [&'a str; GRID_CELLS] {
        match *self {
            GridItem::Central {
                main_theme,
                sub_themes,
            } => place_around(
                main_theme,
                std::array::from_fn(|i| sub_themes[i].name.as_str()),
            ),
            GridItem::Detail { sub_theme, .. } => place_around(
                sub_theme.name.as_str(),
                std::array::from_fn(|i| sub_theme.details[i].as_str()),
            ),
        }
    }

    /// Palette slot shared by every cell of a detail grid. The central grid
    /// colors its ring per position instead, so it has no single slot.
    pub fn color_index(&self) -> Option<usize> {
        match *self {
            GridItem::Central { .. } => None,
            GridItem::Detail { index, .. } => Some(index),
        }
    }
}

/// Compose the outer 3x3 grid: central grid in the middle, detail grids
/// around it in sub-theme order.
pub fn outer_items(chart: &GoalChart) -> [GridItem<'_>; GRID_CELLS] {
    let central = GridItem::Central {
        main_theme: &chart.main_theme,
        sub_themes: &chart.sub_themes,
    };
    let details = std::array::from_fn(|i| GridItem::Detail {
        sub_theme: &chart.sub_themes[i],
        index: i,
    });
    place_around(central, details)
}
