//! Viewport classification for the orientation guard
//!
//! The chart needs landscape room. Narrow, tall terminals get a rotate
//! prompt instead of a squeezed grid.

/// What the current frame should show. Derived from the frame size every
/// draw, never stored, so resizes take effect immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Enough room for the full chart
    Chart,
    /// Too narrow; ask for a wider terminal
    RotatePrompt,
}

impl ViewMode {
    /// Classify a terminal size. The chart renders when the terminal is
    /// wide in absolute columns or clearly landscape. Terminal cells are
    /// roughly twice as tall as they are wide, so landscape here means
    /// width at least twice the height.
    pub fn classify(width: u16, height: u16, wide_columns: u16) -> Self {
        if width >= wide_columns || width >= height.saturating_mul(2) {
            ViewMode::Chart
        } else {
            ViewMode::RotatePrompt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: u16 = 100;

    #[test]
    fn test_standard_terminal_is_landscape() {
        assert_eq!(ViewMode::classify(80, 24, WIDE), ViewMode::Chart);
    }

    #[test]
    fn test_wide_terminal_renders_even_when_tall() {
        // 120 columns clears the wide threshold despite 120 < 2 * 80.
        assert_eq!(ViewMode::classify(120, 80, WIDE), ViewMode::Chart);
    }

    #[test]
    fn test_narrow_portrait_gets_prompt() {
        assert_eq!(ViewMode::classify(40, 60, WIDE), ViewMode::RotatePrompt);
    }

    #[test]
    fn test_narrow_squarish_gets_prompt() {
        assert_eq!(ViewMode::classify(80, 50, WIDE), ViewMode::RotatePrompt);
    }

    #[test]
    fn test_wide_threshold_boundary() {
        assert_eq!(ViewMode::classify(100, 80, WIDE), ViewMode::Chart);
        assert_eq!(ViewMode::classify(99, 80, WIDE), ViewMode::RotatePrompt);
    }

    #[test]
    fn test_landscape_ratio_boundary() {
        assert_eq!(ViewMode::classify(48, 24, WIDE), ViewMode::Chart);
        assert_eq!(ViewMode::classify(47, 24, WIDE), ViewMode::RotatePrompt);
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        assert_eq!(ViewMode::classify(0, 40, WIDE), ViewMode::RotatePrompt);
        // An absurdly tall height saturates instead of wrapping.
        assert_eq!(ViewMode::classify(90, u16::MAX, WIDE), ViewMode::RotatePrompt);
    }
}
