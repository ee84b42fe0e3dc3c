//! Geometry for the nested 3x3 chart
//!
//! Provides:
//! - `split_3x3`: cut a rect into nine cells with a fixed gap
//! - `center_horizontal`: clamp the chart to a max width and center it

use ratatui::layout::Rect;

use crate::chart::GRID_CELLS;

/// Cut `area` into a row-major 3x3 grid separated by `gap` columns
/// horizontally and `gap` rows vertically. Remainders go to the leading
/// cells, so sizes differ by at most one.
pub fn split_3x3(area: Rect, gap: u16) -> [Rect; GRID_CELLS] {
    let cols = split_axis(area.x, area.width, gap);
    let rows = split_axis(area.y, area.height, gap);

    let mut cells = [Rect::default(); GRID_CELLS];
    for row in 0..3 {
        for col in 0..3 {
            let (x, width) = cols[col];
            let (y, height) = rows[row];
            cells[row * 3 + col] = Rect::new(x, y, width, height);
        }
    }
    cells
}

/// Split one axis into three segments with `gap` between them, returning
/// (offset, size) per segment. The gap collapses to zero when the axis
/// cannot fit three one-column cells around it.
fn split_axis(origin: u16, total: u16, gap: u16) -> [(u16, u16); 3] {
    let gap = if u32::from(total) >= 3 + 2 * u32::from(gap) {
        gap
    } else {
        0
    };
    let usable = total.saturating_sub(2 * gap);
    let base = usable / 3;
    let rem = usable % 3;

    let mut out = [(0u16, 0u16); 3];
    let mut cursor = origin;
    for (i, slot) in out.iter_mut().enumerate() {
        let size = base + u16::from((i as u16) < rem);
        *slot = (cursor, size);
        cursor = cursor.saturating_add(size + gap);
    }
    out
}

/// Clamp `area` to `max_width` columns and center the result, the terminal
/// equivalent of a max-width container with auto margins.
pub fn center_horizontal(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_exact_fit() {
        // 3 cells of 9 plus 2 gaps of 1 is exactly 29.
        let cells = split_3x3(Rect::new(0, 0, 29, 29), 1);
        assert_eq!(cells[0], Rect::new(0, 0, 9, 9));
        assert_eq!(cells[1], Rect::new(10, 0, 9, 9));
        assert_eq!(cells[2], Rect::new(20, 0, 9, 9));
        assert_eq!(cells[3], Rect::new(0, 10, 9, 9));
        assert_eq!(cells[8], Rect::new(20, 20, 9, 9));
    }

    #[test]
    fn test_split_distributes_remainder_to_leading_cells() {
        let cells = split_3x3(Rect::new(0, 0, 30, 29), 1);
        assert_eq!(cells[0].width, 10);
        assert_eq!(cells[1].width, 9);
        assert_eq!(cells[2].width, 9);
        // Offsets account for the wider first cell.
        assert_eq!(cells[1].x, 11);
        assert_eq!(cells[2].x, 21);
    }

    #[test]
    fn test_split_is_row_major_with_middle_center() {
        let cells = split_3x3(Rect::new(0, 0, 29, 29), 1);
        // Position 4 sits in the middle row and middle column.
        assert_eq!(cells[4].x, cells[1].x);
        assert_eq!(cells[4].y, cells[3].y);
    }

    #[test]
    fn test_split_respects_origin() {
        let cells = split_3x3(Rect::new(5, 7, 29, 29), 1);
        assert_eq!(cells[0].x, 5);
        assert_eq!(cells[0].y, 7);
        assert_eq!(cells[8].x, 25);
        assert_eq!(cells[8].y, 27);
    }

    #[test]
    fn test_split_stays_inside_area() {
        let area = Rect::new(3, 2, 41, 17);
        for cell in split_3x3(area, 2) {
            assert!(cell.x >= area.x);
            assert!(cell.y >= area.y);
            assert!(cell.x + cell.width <= area.x + area.width);
            assert!(cell.y + cell.height <= area.y + area.height);
        }
    }

    #[test]
    fn test_split_collapses_gap_when_cramped() {
        // Width 5 cannot fit three cells around two gaps of 2.
        let cells = split_3x3(Rect::new(0, 0, 5, 5), 2);
        assert_eq!(cells[0].width, 2);
        assert_eq!(cells[1].width, 2);
        assert_eq!(cells[2].width, 1);
        assert_eq!(cells[2].x, 4);
    }

    #[test]
    fn test_split_degenerate_area() {
        // Nothing to lay out; every cell collapses but none panics.
        for cell in split_3x3(Rect::new(0, 0, 2, 1), 1) {
            assert!(cell.width <= 1);
        }
    }

    #[test]
    fn test_center_horizontal_clamps_and_centers() {
        let area = Rect::new(0, 0, 100, 40);
        let centered = center_horizontal(area, 60);
        assert_eq!(centered, Rect::new(20, 0, 60, 40));
    }

    #[test]
    fn test_center_horizontal_small_area_unchanged() {
        let area = Rect::new(2, 1, 50, 40);
        assert_eq!(center_horizontal(area, 60), area);
    }
}
