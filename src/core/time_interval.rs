use std::cmp::Ordering;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveTime, TimeDelta, Timelike,
};
use serde::{Deserialize, Serialize};

use crate::error::{SelectorError, SelectorResult};

/// Closed span between two timezone-aware instants.
///
/// Values are immutable: every `with_*` method validates and returns a new
/// interval, so a rejected change can never leave a half-applied state behind.
/// Equality and hashing compare the instants, not their offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeInterval")]
pub struct TimeInterval {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeInterval {
    /// Creates an interval, rejecting `start > end`.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> SelectorResult<Self> {
        ensure_ordered(start, end)?;
        Ok(Self { start, end })
    }

    /// Zero-length interval anchored at `start`.
    #[must_use]
    pub fn starting_at(start: DateTime<FixedOffset>) -> Self {
        Self { start, end: start }
    }

    /// Zero-length interval at the current local instant.
    #[must_use]
    pub fn now() -> Self {
        Self::starting_at(Local::now().fixed_offset())
    }

    /// Builds an interval from optional bounds.
    ///
    /// A missing start defaults to now and a missing end defaults to the start.
    pub fn from_parts(
        start: Option<DateTime<FixedOffset>>,
        end: Option<DateTime<FixedOffset>>,
    ) -> SelectorResult<Self> {
        let start = start.unwrap_or_else(|| Local::now().fixed_offset());
        Self::new(start, end.unwrap_or(start))
    }

    #[must_use]
    pub fn start(self) -> DateTime<FixedOffset> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Length of the interval in milliseconds. Negative only for values built
    /// through the unchecked `shifted_*` methods.
    #[must_use]
    pub fn duration_ms(self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    #[must_use]
    pub fn is_ordered(self) -> bool {
        self.start <= self.end
    }

    /// Orders intervals by their start instant only.
    #[must_use]
    pub fn cmp_start(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start)
    }

    pub fn with_start(self, start: DateTime<FixedOffset>) -> SelectorResult<Self> {
        Self::new(start, self.end)
    }

    pub fn with_end(self, end: DateTime<FixedOffset>) -> SelectorResult<Self> {
        Self::new(self.start, end)
    }

    /// Replaces the calendar date of the start, keeping its wall-clock time.
    pub fn with_start_date(self, year: i32, month: u32, day: u32) -> SelectorResult<Self> {
        self.with_start(replace_date(self.start, year, month, day)?)
    }

    pub fn with_start_month_day(self, month: u32, day: u32) -> SelectorResult<Self> {
        self.with_start_date(self.start.year(), month, day)
    }

    pub fn with_start_day(self, day: u32) -> SelectorResult<Self> {
        self.with_start_date(self.start.year(), self.start.month(), day)
    }

    /// Replaces the wall-clock hour and minute of the start, keeping its date
    /// and sub-minute precision.
    pub fn with_start_time(self, hour: u32, minute: u32) -> SelectorResult<Self> {
        self.with_start(replace_time(self.start, hour, minute)?)
    }

    pub fn with_end_date(self, year: i32, month: u32, day: u32) -> SelectorResult<Self> {
        self.with_end(replace_date(self.end, year, month, day)?)
    }

    pub fn with_end_month_day(self, month: u32, day: u32) -> SelectorResult<Self> {
        self.with_end_date(self.end.year(), month, day)
    }

    pub fn with_end_day(self, day: u32) -> SelectorResult<Self> {
        self.with_end_date(self.end.year(), self.end.month(), day)
    }

    pub fn with_end_time(self, hour: u32, minute: u32) -> SelectorResult<Self> {
        self.with_end(replace_time(self.end, hour, minute)?)
    }

    /// Moves the start by a signed amount of milliseconds.
    ///
    /// This does not check `start <= end`; callers that need the invariant
    /// must test `is_ordered` on the result. Fails only when the instant
    /// leaves the representable range.
    pub fn shifted_start(self, milliseconds: i64) -> SelectorResult<Self> {
        Ok(Self {
            start: shift_instant(self.start, milliseconds)?,
            end: self.end,
        })
    }

    /// Moves the end by a signed amount of milliseconds, unchecked like
    /// `shifted_start`.
    pub fn shifted_end(self, milliseconds: i64) -> SelectorResult<Self> {
        Ok(Self {
            start: self.start,
            end: shift_instant(self.end, milliseconds)?,
        })
    }

    /// Moves both bounds, preserving the duration.
    pub fn shifted(self, milliseconds: i64) -> SelectorResult<Self> {
        Ok(Self {
            start: shift_instant(self.start, milliseconds)?,
            end: shift_instant(self.end, milliseconds)?,
        })
    }
}

impl Default for TimeInterval {
    fn default() -> Self {
        Self::now()
    }
}

#[derive(Deserialize)]
struct RawTimeInterval {
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
}

impl TryFrom<RawTimeInterval> for TimeInterval {
    type Error = SelectorError;

    fn try_from(raw: RawTimeInterval) -> Result<Self, Self::Error> {
        let start = raw.start.ok_or(SelectorError::MissingTimestamp("interval start"))?;
        let end = raw.end.ok_or(SelectorError::MissingTimestamp("interval end"))?;
        Self::new(start, end)
    }
}

fn ensure_ordered(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> SelectorResult<()> {
    if start > end {
        return Err(SelectorError::invalid(format!(
            "interval start {} must not be after end {}",
            start.to_rfc3339(),
            end.to_rfc3339()
        )));
    }
    Ok(())
}

fn shift_instant(
    instant: DateTime<FixedOffset>,
    milliseconds: i64,
) -> SelectorResult<DateTime<FixedOffset>> {
    TimeDelta::try_milliseconds(milliseconds)
        .and_then(|delta| instant.checked_add_signed(delta))
        .ok_or_else(|| {
            SelectorError::invalid(format!(
                "shifting {} by {milliseconds} ms leaves the supported range",
                instant.to_rfc3339()
            ))
        })
}

fn replace_date(
    instant: DateTime<FixedOffset>,
    year: i32,
    month: u32,
    day: u32,
) -> SelectorResult<DateTime<FixedOffset>> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SelectorError::invalid(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
    })?;
    date.and_time(instant.time())
        .and_local_timezone(*instant.offset())
        .single()
        .ok_or_else(|| SelectorError::invalid("date is outside the supported range"))
}

fn replace_time(
    instant: DateTime<FixedOffset>,
    hour: u32,
    minute: u32,
) -> SelectorResult<DateTime<FixedOffset>> {
    let time =
        NaiveTime::from_hms_nano_opt(hour, minute, instant.second(), instant.nanosecond())
            .ok_or_else(|| {
                SelectorError::invalid(format!("{hour:02}:{minute:02} is not a wall-clock time"))
            })?;
    instant
        .date_naive()
        .and_time(time)
        .and_local_timezone(*instant.offset())
        .single()
        .ok_or_else(|| SelectorError::invalid("time is outside the supported range"))
}
