use anyhow::Result;

use crate::config::Config;
use crate::goals::{self, GoalChart};
use crate::ui::theme::{Theme, PRESETS};

/// Application state: the chart data plus presentation settings.
///
/// The chart itself is static; the only runtime state is which theme
/// preset is active.
pub struct App {
    chart: GoalChart,
    config: Config,
    theme: Theme,
    preset_idx: usize,
}

impl App {
    /// Build the app from config. Fails if the config's theme overrides
    /// are malformed, so bad palettes surface at startup instead of as a
    /// miscolored grid.
    pub fn new(config: Config) -> Result<Self> {
        let theme = config.resolve_theme()?;
        let preset_idx = Theme::preset_index(&config.appearance.theme).unwrap_or(0);
        Ok(Self {
            chart: goals::sample(),
            config,
            theme,
            preset_idx,
        })
    }

    /// Get the goal chart
    pub fn chart(&self) -> &GoalChart {
        &self.chart
    }

    /// Get config reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the resolved theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next theme preset
    pub fn next_theme(&mut self) {
        self.set_preset(self.preset_idx + 1);
    }

    /// Switch to the previous theme preset
    pub fn prev_theme(&mut self) {
        self.set_preset(self.preset_idx + PRESETS.len() - 1);
    }

    fn set_preset(&mut self, idx: usize) {
        self.preset_idx = idx % PRESETS.len();
        self.config.appearance.theme = PRESETS[self.preset_idx].to_string();
        // Overrides were already validated in `new`.
        match self.config.resolve_theme() {
            Ok(theme) => self.theme = theme,
            Err(err) => tracing::warn!("Theme switch failed: {err:#}"),
        }
    }
}
