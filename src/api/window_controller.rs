use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::core::TimelineWindow;
use crate::error::{SelectorError, SelectorResult};
use crate::render::Renderer;

use super::IntervalSelector;
use super::validation::{validate_grid_interval_ms, validate_utc_offset_seconds};

impl<R: Renderer> IntervalSelector<R> {
    #[must_use]
    pub fn window(&self) -> TimelineWindow {
        self.window
    }

    #[must_use]
    pub fn window_start(&self) -> DateTime<FixedOffset> {
        self.window.start()
    }

    #[must_use]
    pub fn window_end(&self) -> DateTime<FixedOffset> {
        self.window.end()
    }

    /// Moves the visible window so it begins at `start`.
    ///
    /// Fails with `InvalidArgument` when the window end would fall outside
    /// the representable time range; the window is left unchanged.
    pub fn set_window_start(&mut self, start: DateTime<FixedOffset>) -> SelectorResult<()> {
        self.window.set_start(start.with_timezone(&self.display_offset))?;
        self.redraw.request();
        Ok(())
    }

    #[must_use]
    pub fn display_length_minutes(&self) -> u32 {
        self.window.length_minutes()
    }

    /// Changes how many minutes are visible, keeping the window start.
    ///
    /// Fails with `InvalidArgument` outside `[180, 1440]`.
    pub fn set_display_length_minutes(&mut self, minutes: u32) -> SelectorResult<()> {
        self.window.set_length_minutes(minutes)?;
        debug!(display_length_minutes = minutes, "display length changed");
        self.redraw.request();
        Ok(())
    }

    #[must_use]
    pub fn grid_interval_ms(&self) -> i64 {
        self.grid_interval_ms
    }

    /// Sets the snapping step applied to drag gestures.
    pub fn set_grid_interval_ms(&mut self, grid_interval_ms: i64) -> SelectorResult<()> {
        self.grid_interval_ms = validate_grid_interval_ms(grid_interval_ms)?;
        debug!(grid_interval_ms, "grid interval changed");
        Ok(())
    }

    #[must_use]
    pub fn display_offset(&self) -> FixedOffset {
        self.display_offset
    }

    /// Changes the offset used for ruler labels and day boundaries. The
    /// visible instants are kept.
    pub fn set_display_utc_offset_seconds(&mut self, offset_seconds: i32) -> SelectorResult<()> {
        let offset_seconds = validate_utc_offset_seconds(offset_seconds)?;
        let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(|| {
            SelectorError::invalid(format!("invalid utc offset: {offset_seconds}s"))
        })?;
        self.display_offset = offset;
        self.window = self.window.with_offset(offset);
        self.redraw.request();
        Ok(())
    }
}
