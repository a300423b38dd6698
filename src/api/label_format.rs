use chrono::{DateTime, FixedOffset, Timelike};

const DATE_LABEL_FORMAT: &str = "%d/%m/%Y";
const TIME_LABEL_FORMAT: &str = "%H:%M";

/// Day label shown on the ruler, e.g. `07/03/2024`.
#[must_use]
pub fn format_date_label(instant: DateTime<FixedOffset>) -> String {
    instant.format(DATE_LABEL_FORMAT).to_string()
}

/// Clock label for interval bounds, e.g. `08:30`.
#[must_use]
pub fn format_time_label(instant: DateTime<FixedOffset>) -> String {
    instant.format(TIME_LABEL_FORMAT).to_string()
}

/// Hour number drawn next to hour and day lines, without zero padding.
#[must_use]
pub fn format_hour_label(instant: DateTime<FixedOffset>) -> String {
    instant.hour().to_string()
}
