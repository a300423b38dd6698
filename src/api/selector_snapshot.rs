use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::{TimeInterval, Viewport};
use crate::error::{SelectorError, SelectorResult};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{IntervalSelector, SelectorGeometry};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorSnapshot {
    pub viewport: Viewport,
    pub window_start: DateTime<FixedOffset>,
    pub window_end: DateTime<FixedOffset>,
    pub display_length_minutes: u32,
    pub grid_interval_ms: i64,
    pub display_utc_offset_seconds: i32,
    pub enabled: bool,
    pub interaction_mode: InteractionMode,
    pub interval: Option<TimeInterval>,
    pub interval_listener_count: usize,
    pub geometry: Option<SelectorGeometry>,
}

impl<R: Renderer> IntervalSelector<R> {
    #[must_use]
    pub fn snapshot(&self) -> SelectorSnapshot {
        let interval = self.interval();
        SelectorSnapshot {
            viewport: self.viewport,
            window_start: self.window.start(),
            window_end: self.window.end(),
            display_length_minutes: self.window.length_minutes(),
            grid_interval_ms: self.grid_interval_ms,
            display_utc_offset_seconds: self.display_offset.local_minus_utc(),
            enabled: self.enabled,
            interaction_mode: self.interaction.mode(),
            interval: interval.as_ref().map(|interval| interval.get()),
            interval_listener_count: interval.map_or(0, |interval| interval.listener_count()),
            geometry: self.geometry,
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression
    /// checks.
    pub fn snapshot_json_pretty(&self) -> SelectorResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SelectorError::invalid(format!("failed to serialize snapshot: {e}")))
    }
}
