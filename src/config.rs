use anyhow::{bail, Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ui::theme::{parse_hex_color, serde_color, Gradient, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub guard: GuardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset: "pastel", "midnight", "nord", "gruvbox"
    pub theme: String,
    /// Gap between cells inside a mini-grid, in terminal cells
    pub gap: u16,
    /// Gap between mini-grids
    pub outer_gap: u16,
    /// Upper bound on the chart width in columns
    pub max_grid_width: u16,
    /// Page background override, hex like "#0d1116"
    #[serde(
        serialize_with = "serde_color::serialize_option",
        deserialize_with = "serde_color::deserialize_option"
    )]
    pub background: Option<Color>,
    /// Palette override: exactly eight hex colors, one per sub-theme slot
    pub palette: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Width in columns at which the chart renders regardless of aspect
    pub wide_columns: u16,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "pastel".to_string(),
            gap: 1,
            outer_gap: 2,
            max_grid_width: 120,
            background: None,
            palette: None,
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { wide_columns: 100 }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the effective theme: the named preset with appearance
    /// overrides applied. An unknown preset name falls back to the default
    /// with a warning; a malformed palette override is an error.
    pub fn resolve_theme(&self) -> Result<Theme> {
        let mut theme = match Theme::from_preset(&self.appearance.theme) {
            Some(theme) => theme,
            None => {
                tracing::warn!(
                    "Unknown theme preset {:?}, falling back to default",
                    self.appearance.theme
                );
                Theme::default()
            }
        };

        if let Some(background) = self.appearance.background {
            theme.background = background;
        }

        if let Some(ref palette) = self.appearance.palette {
            if palette.len() != theme.palette.len() {
                bail!(
                    "palette override has {} colors, expected {}",
                    palette.len(),
                    theme.palette.len()
                );
            }
            for (slot, hex) in theme.palette.iter_mut().zip(palette) {
                let color = parse_hex_color(hex)
                    .with_context(|| format!("Invalid palette color {hex:?}"))?;
                *slot = Gradient::flat(color);
            }
        }

        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.appearance.theme, "pastel");
        assert_eq!(config.appearance.gap, 1);
        assert_eq!(config.appearance.outer_gap, 2);
        assert_eq!(config.guard.wide_columns, 100);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [appearance]
            theme = "nord"
            gap = 0

            [guard]
            wide_columns = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.appearance.theme, "nord");
        assert_eq!(config.appearance.gap, 0);
        // Unset fields keep their defaults.
        assert_eq!(config.appearance.max_grid_width, 120);
        assert_eq!(config.guard.wide_columns, 120);
    }

    #[test]
    fn test_resolve_theme_with_overrides() {
        let config: Config = toml::from_str(
            r##"
            [appearance]
            theme = "midnight"
            background = "#000000"
            palette = [
                "#111111", "#222222", "#333333", "#444444",
                "#555555", "#666666", "#777777", "#888888",
            ]
            "##,
        )
        .unwrap();
        let theme = config.resolve_theme().unwrap();
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.palette[0], Gradient::flat(Color::Rgb(0x11, 0x11, 0x11)));
        assert_eq!(theme.palette[7], Gradient::flat(Color::Rgb(0x88, 0x88, 0x88)));
        // Non-overridden colors come from the preset.
        assert_eq!(theme.title, Theme::midnight().title);
    }

    #[test]
    fn test_resolve_theme_rejects_short_palette() {
        let config: Config = toml::from_str(
            r##"
            [appearance]
            palette = ["#111111", "#222222"]
            "##,
        )
        .unwrap();
        assert!(config.resolve_theme().is_err());
    }

    #[test]
    fn test_resolve_theme_rejects_bad_hex() {
        let config: Config = toml::from_str(
            r##"
            [appearance]
            palette = [
                "#111111", "#222222", "#333333", "#444444",
                "#555555", "#666666", "#777777", "not-a-color",
            ]
            "##,
        )
        .unwrap();
        assert!(config.resolve_theme().is_err());
    }

    #[test]
    fn test_unknown_preset_falls_back_to_default() {
        let config: Config = toml::from_str(
            r#"
            [appearance]
            theme = "no-such-theme"
            "#,
        )
        .unwrap();
        let theme = config.resolve_theme().unwrap();
        assert_eq!(theme.background, Theme::default().background);
    }

    #[test]
    fn test_bad_background_is_a_parse_error() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
            [appearance]
            background = "nope"
            "#,
        );
        assert!(result.is_err());
    }
}
