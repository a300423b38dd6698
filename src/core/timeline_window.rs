use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::Serialize;

use crate::core::{LinearScale, TimeInterval};
use crate::error::{SelectorError, SelectorResult};

/// Shortest span the selector may display.
pub const MIN_DISPLAY_LENGTH_MINUTES: u32 = 3 * 60;
/// Longest span the selector may display.
pub const MAX_DISPLAY_LENGTH_MINUTES: u32 = 24 * 60;
pub const DEFAULT_DISPLAY_LENGTH_MINUTES: u32 = 6 * 60;

const RECENTER_LEAD_MINUTES: i64 = 60;

/// Visible time range of the selector: `[start, start + length)`.
///
/// The end is recomputed from the start and the display length on every
/// change, and a change whose end is not representable is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    length_minutes: u32,
}

impl TimelineWindow {
    pub fn new(start: DateTime<FixedOffset>, length_minutes: u32) -> SelectorResult<Self> {
        validate_display_length(length_minutes)?;
        Ok(Self {
            start,
            end: window_end(start, length_minutes)?,
            length_minutes,
        })
    }

    /// Window that begins one hour before the interval start.
    pub fn leading(interval: TimeInterval, length_minutes: u32) -> SelectorResult<Self> {
        let start = interval
            .start()
            .checked_sub_signed(TimeDelta::minutes(RECENTER_LEAD_MINUTES))
            .ok_or_else(|| SelectorError::invalid("interval start is outside the supported range"))?;
        Self::new(start, length_minutes)
    }

    #[must_use]
    pub fn start(self) -> DateTime<FixedOffset> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<FixedOffset> {
        self.end
    }

    #[must_use]
    pub fn length_minutes(self) -> u32 {
        self.length_minutes
    }

    #[must_use]
    pub fn duration_ms(self) -> i64 {
        i64::from(self.length_minutes) * 60_000
    }

    /// Changes the display length, keeping the start.
    pub fn set_length_minutes(&mut self, length_minutes: u32) -> SelectorResult<()> {
        *self = Self::new(self.start, length_minutes)?;
        Ok(())
    }

    /// Moves the window start, keeping the display length.
    pub fn set_start(&mut self, start: DateTime<FixedOffset>) -> SelectorResult<()> {
        *self = Self::new(start, self.length_minutes)?;
        Ok(())
    }

    /// Re-expresses the window in another offset; the instants are kept.
    #[must_use]
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            start: self.start.with_timezone(&offset),
            end: self.end.with_timezone(&offset),
            length_minutes: self.length_minutes,
        }
    }

    /// Pans the window by a signed amount of milliseconds.
    pub fn pan_by_ms(&mut self, delta_ms: i64) -> SelectorResult<()> {
        let start = TimeDelta::try_milliseconds(delta_ms)
            .and_then(|delta| self.start.checked_add_signed(delta))
            .ok_or_else(|| SelectorError::invalid("pan leaves the supported time range"))?;
        self.set_start(start)
    }

    #[must_use]
    pub fn is_before_start(self, instant: DateTime<FixedOffset>) -> bool {
        instant < self.start
    }

    #[must_use]
    pub fn is_after_end(self, instant: DateTime<FixedOffset>) -> bool {
        instant > self.end()
    }

    /// `true` when both interval bounds lie inside `[start, end]`.
    #[must_use]
    pub fn contains_interval(self, interval: TimeInterval) -> bool {
        !self.is_before_start(interval.start()) && !self.is_after_end(interval.end())
    }

    /// `true` when some part of the interval is visible.
    #[must_use]
    pub fn overlaps(self, interval: TimeInterval) -> bool {
        interval.start() < self.end() && interval.end() > self.start
    }

    /// Milliseconds from the window start to `instant`, negative before it.
    #[must_use]
    pub fn offset_ms(self, instant: DateTime<FixedOffset>) -> i64 {
        (instant - self.start).num_milliseconds()
    }

    /// Scale whose domain is milliseconds relative to the window start.
    pub fn scale(self) -> SelectorResult<LinearScale> {
        LinearScale::new(0.0, self.duration_ms() as f64)
    }
}

fn window_end(
    start: DateTime<FixedOffset>,
    length_minutes: u32,
) -> SelectorResult<DateTime<FixedOffset>> {
    start
        .checked_add_signed(TimeDelta::minutes(i64::from(length_minutes)))
        .ok_or_else(|| SelectorError::invalid("window end is outside the supported time range"))
}

pub(crate) fn validate_display_length(length_minutes: u32) -> SelectorResult<()> {
    if !(MIN_DISPLAY_LENGTH_MINUTES..=MAX_DISPLAY_LENGTH_MINUTES).contains(&length_minutes) {
        return Err(SelectorError::invalid(format!(
            "display length must be between {MIN_DISPLAY_LENGTH_MINUTES} and \
             {MAX_DISPLAY_LENGTH_MINUTES} minutes, got {length_minutes}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};

    use super::TimelineWindow;
    use crate::core::TimeInterval;

    fn utc(hour: u32, minute: u32) -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("utc")
            .with_ymd_and_hms(2024, 5, 1, hour, minute, 0)
            .single()
            .expect("instant")
    }

    #[test]
    fn end_tracks_length_changes() {
        let mut window = TimelineWindow::new(utc(6, 0), 180).expect("window");
        assert_eq!(window.end(), utc(9, 0));
        window.set_length_minutes(240).expect("valid length");
        assert_eq!(window.start(), utc(6, 0));
        assert_eq!(window.end(), utc(10, 0));
    }

    #[test]
    fn leading_window_starts_one_hour_early() {
        let interval = TimeInterval::new(utc(8, 30), utc(10, 0)).expect("interval");
        let window = TimelineWindow::leading(interval, 360).expect("window");
        assert_eq!(window.start(), utc(7, 30));
        assert!(window.contains_interval(interval));
    }

    #[test]
    fn overlap_excludes_touching_edges() {
        let window = TimelineWindow::new(utc(6, 0), 180).expect("window");
        let before = TimeInterval::new(utc(5, 0), utc(6, 0)).expect("interval");
        let after = TimeInterval::new(utc(9, 0), utc(10, 0)).expect("interval");
        let straddling = TimeInterval::new(utc(5, 0), utc(6, 15)).expect("interval");
        assert!(!window.overlaps(before));
        assert!(!window.overlaps(after));
        assert!(window.overlaps(straddling));
        assert!(!window.contains_interval(straddling));
    }

    #[test]
    fn unrepresentable_end_is_rejected() {
        let late = DateTime::<chrono::Utc>::MAX_UTC.fixed_offset() - TimeDelta::hours(2);
        assert!(TimelineWindow::new(late, 180).is_err());

        let mut window = TimelineWindow::new(late - TimeDelta::hours(4), 180).expect("window");
        let before = window;
        assert!(window.set_length_minutes(480).is_err());
        assert!(window.pan_by_ms(4 * 3_600_000).is_err());
        assert!(window.set_start(late).is_err());
        assert_eq!(window, before);
    }
}
