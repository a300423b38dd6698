use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_DISPLAY_LENGTH_MINUTES, Viewport};
use crate::error::{SelectorError, SelectorResult};

use super::SelectorStyle;

/// Default snapping step: 15 minutes.
pub const DEFAULT_GRID_INTERVAL_MS: i64 = 15 * 60 * 1000;

/// Public selector bootstrap configuration.
///
/// This type is serializable so host applications can persist/load selector
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalSelectorConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_display_length_minutes")]
    pub display_length_minutes: u32,
    #[serde(default = "default_grid_interval_ms")]
    pub grid_interval_ms: i64,
    /// Offset used for ruler labels and day boundaries. `None` uses the local
    /// offset at construction time.
    #[serde(default)]
    pub display_utc_offset_seconds: Option<i32>,
    /// First visible instant. `None` starts the window at the current time.
    #[serde(default)]
    pub window_start: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub style: SelectorStyle,
}

impl IntervalSelectorConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            display_length_minutes: default_display_length_minutes(),
            grid_interval_ms: default_grid_interval_ms(),
            display_utc_offset_seconds: None,
            window_start: None,
            style: SelectorStyle::default(),
        }
    }

    #[must_use]
    pub fn with_display_length_minutes(mut self, minutes: u32) -> Self {
        self.display_length_minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_grid_interval_ms(mut self, grid_interval_ms: i64) -> Self {
        self.grid_interval_ms = grid_interval_ms;
        self
    }

    #[must_use]
    pub fn with_display_utc_offset_seconds(mut self, offset_seconds: i32) -> Self {
        self.display_utc_offset_seconds = Some(offset_seconds);
        self
    }

    #[must_use]
    pub fn with_window_start(mut self, start: DateTime<FixedOffset>) -> Self {
        self.window_start = Some(start);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SelectorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn to_json_pretty(&self) -> SelectorResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SelectorError::invalid(format!("failed to serialize selector config: {e}")))
    }

    /// Parses a config; fields left out fall back to their defaults.
    pub fn from_json_str(input: &str) -> SelectorResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SelectorError::invalid(format!("failed to parse selector config: {e}")))
    }
}

impl Default for IntervalSelectorConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

fn default_display_length_minutes() -> u32 {
    DEFAULT_DISPLAY_LENGTH_MINUTES
}

fn default_grid_interval_ms() -> i64 {
    DEFAULT_GRID_INTERVAL_MS
}
