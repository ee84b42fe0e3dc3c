//! Theme system for the goal grid.
//!
//! Provides:
//! - `Gradient`, a two-stop color ramp sampled across a cell's width
//! - Theme struct with all UI colors plus the eight-slot palette
//! - Built-in presets (pastel, midnight, nord, gruvbox)
//! - Hex color parsing

use ratatui::style::Color;
use thiserror::Error;

use crate::chart::RING;

/// Preset names accepted by `--theme`, the config file, and theme cycling.
pub const PRESETS: [&str; 4] = ["pastel", "midnight", "nord", "gruvbox"];

/// A two-stop linear gradient, swept left to right across a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    /// A gradient with no ramp, used for flat palette overrides.
    pub const fn flat(color: Color) -> Self {
        Self {
            from: color,
            to: color,
        }
    }

    /// Sample the gradient at `t` in `[0, 1]` (clamped). Interpolates RGB
    /// endpoints; any other color kind falls back to the start color.
    pub fn sample(&self, t: f32) -> Color {
        match (self.from, self.to) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                let t = t.clamp(0.0, 1.0);
                let lerp =
                    |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
                Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
            }
            _ => self.from,
        }
    }
}

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page background behind everything
    pub background: Color,
    /// Mini-grid panel fill, visible through the cell gaps
    pub panel: Color,
    /// Header title text
    pub title: Color,
    /// Deadline badge text
    pub badge_fg: Color,
    /// Deadline badge fill
    pub badge_bg: Color,
    /// Label text on palette-colored cells
    pub cell_fg: Color,
    /// Label text on the main-theme card
    pub center_fg: Color,
    /// Rotate-prompt headline
    pub guard_title: Color,
    /// Rotate-prompt secondary text
    pub guard_text: Color,
    /// One gradient per sub-theme slot, cycled by `palette_color`
    pub palette: [Gradient; RING],
    /// Main-theme card gradient (center of the central mini-grid)
    pub center: Gradient,
}

impl Default for Theme {
    fn default() -> Self {
        Self::pastel()
    }
}

impl Theme {
    /// Pastel theme - default, the original Tailwind 200-to-300 hues
    pub fn pastel() -> Self {
        Self {
            background: Color::Rgb(241, 245, 249), // #f1f5f9 (slate-100)
            panel: Color::Rgb(226, 232, 240),      // #e2e8f0 (slate-200)
            title: Color::Rgb(51, 65, 85),         // #334155 (slate-700)
            badge_fg: Color::Rgb(107, 114, 128),   // #6b7280 (gray-500)
            badge_bg: Color::Rgb(249, 250, 251),   // #f9fafb (gray-50)
            cell_fg: Color::Rgb(30, 41, 59),       // #1e293b (slate-800)
            center_fg: Color::Rgb(255, 255, 255),  // #ffffff
            guard_title: Color::Rgb(55, 65, 81),   // #374151 (gray-700)
            guard_text: Color::Rgb(107, 114, 128), // #6b7280 (gray-500)
            palette: [
                Gradient::new(Color::Rgb(191, 219, 254), Color::Rgb(147, 197, 253)), // blue-200 -> blue-300
                Gradient::new(Color::Rgb(233, 213, 255), Color::Rgb(216, 180, 254)), // purple-200 -> purple-300
                Gradient::new(Color::Rgb(187, 247, 208), Color::Rgb(134, 239, 172)), // green-200 -> green-300
                Gradient::new(Color::Rgb(254, 240, 138), Color::Rgb(253, 224, 71)), // yellow-200 -> yellow-300
                Gradient::new(Color::Rgb(254, 202, 202), Color::Rgb(252, 165, 165)), // red-200 -> red-300
                Gradient::new(Color::Rgb(251, 207, 232), Color::Rgb(249, 168, 212)), // pink-200 -> pink-300
                Gradient::new(Color::Rgb(199, 210, 254), Color::Rgb(165, 180, 252)), // indigo-200 -> indigo-300
                Gradient::new(Color::Rgb(254, 215, 170), Color::Rgb(253, 186, 116)), // orange-200 -> orange-300
            ],
            center: Gradient::new(Color::Rgb(51, 65, 85), Color::Rgb(100, 116, 139)), // slate-700 -> slate-500
        }
    }

    /// Midnight theme - the same hues deepened onto a dark slate page
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),     // #0f172a (slate-900)
            panel: Color::Rgb(30, 41, 59),          // #1e293b (slate-800)
            title: Color::Rgb(226, 232, 240),       // #e2e8f0 (slate-200)
            badge_fg: Color::Rgb(148, 163, 184),    // #94a3b8 (slate-400)
            badge_bg: Color::Rgb(30, 41, 59),       // #1e293b (slate-800)
            cell_fg: Color::Rgb(248, 250, 252),     // #f8fafc (slate-50)
            center_fg: Color::Rgb(248, 250, 252),   // #f8fafc (slate-50)
            guard_title: Color::Rgb(226, 232, 240), // #e2e8f0 (slate-200)
            guard_text: Color::Rgb(148, 163, 184),  // #94a3b8 (slate-400)
            palette: [
                Gradient::new(Color::Rgb(29, 78, 216), Color::Rgb(59, 130, 246)), // blue-700 -> blue-500
                Gradient::new(Color::Rgb(126, 34, 206), Color::Rgb(168, 85, 247)), // purple-700 -> purple-500
                Gradient::new(Color::Rgb(21, 128, 61), Color::Rgb(34, 197, 94)), // green-700 -> green-500
                Gradient::new(Color::Rgb(161, 98, 7), Color::Rgb(234, 179, 8)), // yellow-700 -> yellow-500
                Gradient::new(Color::Rgb(185, 28, 28), Color::Rgb(239, 68, 68)), // red-700 -> red-500
                Gradient::new(Color::Rgb(190, 24, 93), Color::Rgb(236, 72, 153)), // pink-700 -> pink-500
                Gradient::new(Color::Rgb(67, 56, 202), Color::Rgb(99, 102, 241)), // indigo-700 -> indigo-500
                Gradient::new(Color::Rgb(194, 65, 12), Color::Rgb(249, 115, 22)), // orange-700 -> orange-500
            ],
            center: Gradient::new(Color::Rgb(71, 85, 105), Color::Rgb(30, 41, 59)), // slate-600 -> slate-800
        }
    }

    /// Nord theme - frost and aurora slots on nord0
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),     // #2e3440 (nord0)
            panel: Color::Rgb(59, 66, 82),          // #3b4252 (nord1)
            title: Color::Rgb(236, 239, 244),       // #eceff4 (nord6)
            badge_fg: Color::Rgb(216, 222, 233),    // #d8dee9 (nord4)
            badge_bg: Color::Rgb(59, 66, 82),       // #3b4252 (nord1)
            cell_fg: Color::Rgb(46, 52, 64),        // #2e3440 (nord0)
            center_fg: Color::Rgb(236, 239, 244),   // #eceff4 (nord6)
            guard_title: Color::Rgb(236, 239, 244), // #eceff4 (nord6)
            guard_text: Color::Rgb(216, 222, 233),  // #d8dee9 (nord4)
            palette: [
                Gradient::new(Color::Rgb(143, 188, 187), Color::Rgb(165, 206, 205)), // #8fbcbb (nord7)
                Gradient::new(Color::Rgb(136, 192, 208), Color::Rgb(159, 208, 222)), // #88c0d0 (nord8)
                Gradient::new(Color::Rgb(129, 161, 193), Color::Rgb(151, 180, 208)), // #81a1c1 (nord9)
                Gradient::new(Color::Rgb(94, 129, 172), Color::Rgb(114, 149, 189)), // #5e81ac (nord10)
                Gradient::new(Color::Rgb(191, 97, 106), Color::Rgb(208, 138, 145)), // #bf616a (nord11)
                Gradient::new(Color::Rgb(208, 135, 112), Color::Rgb(221, 162, 143)), // #d08770 (nord12)
                Gradient::new(Color::Rgb(235, 203, 139), Color::Rgb(242, 220, 171)), // #ebcb8b (nord13)
                Gradient::new(Color::Rgb(163, 190, 140), Color::Rgb(184, 207, 166)), // #a3be8c (nord14)
            ],
            center: Gradient::new(Color::Rgb(76, 86, 106), Color::Rgb(94, 129, 172)), // nord3 -> nord10
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),     // #282828 (bg)
            panel: Color::Rgb(60, 56, 54),          // #3c3836 (bg1)
            title: Color::Rgb(235, 219, 178),       // #ebdbb2 (fg)
            badge_fg: Color::Rgb(168, 153, 132),    // #a89984 (gray)
            badge_bg: Color::Rgb(60, 56, 54),       // #3c3836 (bg1)
            cell_fg: Color::Rgb(40, 40, 40),        // #282828 (bg)
            center_fg: Color::Rgb(235, 219, 178),   // #ebdbb2 (fg)
            guard_title: Color::Rgb(235, 219, 178), // #ebdbb2 (fg)
            guard_text: Color::Rgb(168, 153, 132),  // #a89984 (gray)
            palette: [
                Gradient::new(Color::Rgb(69, 133, 136), Color::Rgb(131, 165, 152)), // blue -> bright blue
                Gradient::new(Color::Rgb(177, 98, 134), Color::Rgb(211, 134, 155)), // purple -> bright purple
                Gradient::new(Color::Rgb(152, 151, 26), Color::Rgb(184, 187, 38)), // green -> bright green
                Gradient::new(Color::Rgb(215, 153, 33), Color::Rgb(250, 189, 47)), // yellow -> bright yellow
                Gradient::new(Color::Rgb(204, 36, 29), Color::Rgb(251, 73, 52)), // red -> bright red
                Gradient::new(Color::Rgb(214, 93, 14), Color::Rgb(254, 128, 25)), // orange -> bright orange
                Gradient::new(Color::Rgb(104, 157, 106), Color::Rgb(142, 192, 124)), // aqua -> bright aqua
                Gradient::new(Color::Rgb(146, 131, 116), Color::Rgb(168, 153, 132)), // gray -> bright gray
            ],
            center: Gradient::new(Color::Rgb(29, 32, 33), Color::Rgb(80, 73, 69)), // bg0_h -> bg2
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pastel" | "default" => Some(Self::pastel()),
            "midnight" | "dark" => Some(Self::midnight()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }

    /// Position of a preset name (including its aliases) in `PRESETS`,
    /// used to seed theme cycling.
    pub fn preset_index(name: &str) -> Option<usize> {
        match name.to_lowercase().as_str() {
            "pastel" | "default" => Some(0),
            "midnight" | "dark" => Some(1),
            "nord" => Some(2),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(3),
            _ => None,
        }
    }

    /// The palette gradient for a color index. Cyclic with period eight, so
    /// any index is valid.
    pub fn palette_color(&self, color_index: usize) -> Gradient {
        self.palette[color_index % RING]
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');

    match s.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[1..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[2..3], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        // #rrggbb
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r, g, b))
        }
        // #rrggbbaa (alpha ignored)
        8 => {
            let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ColorError::InvalidHex)?;
            // Alpha (s[6..8]) ignored for TUI
            Ok(Color::Rgb(r, g, b))
        }
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Serde (de)serializers for hex colors in the config file
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }

    pub fn serialize_option<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(Color::Rgb(r, g, b)) => {
                serializer.serialize_some(&format!("#{r:02x}{g:02x}{b:02x}"))
            }
            Some(other) => serializer.serialize_some(&other.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ring_color_index;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Ok(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#f1f5f9"), Ok(Color::Rgb(241, 245, 249)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("0f0"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_8() {
        assert_eq!(parse_hex_color("#ff0000ff"), Ok(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex_color("invalid").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#ff00").is_err());
    }

    #[test]
    fn test_presets() {
        for name in PRESETS {
            assert!(Theme::from_preset(name).is_some(), "missing preset {name}");
        }
        assert!(Theme::from_preset("default").is_some());
        assert!(Theme::from_preset("nonexistent").is_none());
    }

    #[test]
    fn test_preset_index_matches_preset_order() {
        for (idx, name) in PRESETS.iter().enumerate() {
            assert_eq!(Theme::preset_index(name), Some(idx));
        }
        assert_eq!(Theme::preset_index("dark"), Some(1));
        assert_eq!(Theme::preset_index("nonexistent"), None);
    }

    #[test]
    fn test_palette_cycles_with_period_eight() {
        let theme = Theme::pastel();
        for k in 0..16 {
            assert_eq!(theme.palette_color(k), theme.palette_color(k + 8));
        }
    }

    #[test]
    fn test_palette_slots_distinct() {
        for name in PRESETS {
            let theme = Theme::from_preset(name).unwrap();
            for a in 0..8 {
                for b in (a + 1)..8 {
                    assert_ne!(
                        theme.palette[a], theme.palette[b],
                        "{name} palette slots {a} and {b} collide"
                    );
                }
            }
        }
    }

    #[test]
    fn test_central_ring_uses_every_slot_once() {
        let theme = Theme::pastel();
        let ring_positions = [0usize, 1, 2, 3, 5, 6, 7, 8];
        let colors: Vec<Gradient> = ring_positions
            .iter()
            .map(|&p| theme.palette_color(ring_color_index(p)))
            .collect();
        for a in 0..colors.len() {
            for b in (a + 1)..colors.len() {
                assert_ne!(colors[a], colors[b], "ring repeats a palette color");
            }
        }
    }

    #[test]
    fn test_gradient_sample_endpoints() {
        let g = Gradient::new(Color::Rgb(0, 0, 0), Color::Rgb(255, 255, 255));
        assert_eq!(g.sample(0.0), Color::Rgb(0, 0, 0));
        assert_eq!(g.sample(1.0), Color::Rgb(255, 255, 255));
        // Out-of-range samples clamp.
        assert_eq!(g.sample(-1.0), Color::Rgb(0, 0, 0));
        assert_eq!(g.sample(2.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_gradient_flat() {
        let g = Gradient::flat(Color::Rgb(10, 20, 30));
        assert_eq!(g.sample(0.5), Color::Rgb(10, 20, 30));
    }
}
