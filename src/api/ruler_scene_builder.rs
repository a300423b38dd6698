use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};

use crate::core::TimelineWindow;
use crate::error::{SelectorError, SelectorResult};
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::SelectorStyle;
use super::label_format::{format_date_label, format_hour_label};
use super::render_frame_builder::PlotArea;

/// Spacing between ruler guide lines.
pub const RULER_STEP_MINUTES: i64 = 30;

/// Baseline of the date label, relative to the plot top.
pub(super) const DATE_BASELINE_PX: f64 = 10.0;
/// Baseline of the hour labels, relative to the plot top.
const HOUR_BASELINE_PX: f64 = 20.0;
const LABEL_INSET_PX: f64 = 2.0;
/// Date label anchor used until a day boundary is seen.
const DEFAULT_DATE_ANCHOR_PX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerLineKind {
    Day,
    Hour,
    HalfHour,
}

/// One 30-minute guide line, before it is turned into primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerLine {
    pub kind: RulerLineKind,
    pub x: f64,
    pub instant: DateTime<FixedOffset>,
}

/// Walks the window in 30-minute steps in the display offset, starting at
/// the last boundary at or before the window start.
pub(super) fn resolve_ruler_lines(
    window: TimelineWindow,
    offset: FixedOffset,
    plot: PlotArea,
) -> SelectorResult<Vec<RulerLine>> {
    let window_minutes = i64::from(window.length_minutes());
    let offset_minutes = i64::from(offset.local_minus_utc()) / 60;
    let start_local_minutes = window.start().timestamp().div_euclid(60) + offset_minutes;
    let first_line_minutes = start_local_minutes - start_local_minutes.rem_euclid(RULER_STEP_MINUTES);

    let first_instant =
        DateTime::from_timestamp((first_line_minutes - offset_minutes) * 60, 0)
            .ok_or_else(|| SelectorError::invalid("window start is outside the supported range"))?
            .with_timezone(&offset);

    let line_count = window_minutes / RULER_STEP_MINUTES + 1;
    let mut lines = Vec::with_capacity(usize::try_from(line_count).unwrap_or_default());
    let mut day: NaiveDate = first_instant.date_naive();

    for step in 0..line_count {
        let step_minutes = step * RULER_STEP_MINUTES;
        let instant = first_instant
            .checked_add_signed(TimeDelta::minutes(step_minutes))
            .ok_or_else(|| SelectorError::invalid("ruler line is outside the supported range"))?;
        let minutes_from_start = first_line_minutes + step_minutes - start_local_minutes;
        let x = plot.left
            + (plot.width * minutes_from_start as f64 / window_minutes as f64).floor();
        let kind = if instant.date_naive() != day {
            day = instant.date_naive();
            RulerLineKind::Day
        } else if (minutes_from_start + start_local_minutes).rem_euclid(60) == 0 {
            RulerLineKind::Hour
        } else {
            RulerLineKind::HalfHour
        };
        lines.push(RulerLine { kind, x, instant });
    }

    Ok(lines)
}

/// Appends guide lines to `frame`, with the hour and date labels on the
/// underlay text layer.
pub(super) fn append_ruler(
    frame: &mut RenderFrame,
    lines: &[RulerLine],
    plot: PlotArea,
    style: SelectorStyle,
) {
    let bottom = plot.bottom();
    let mut date_anchor_x = DEFAULT_DATE_ANCHOR_PX;
    let mut date_anchor = lines.first().map(|line| line.instant);

    for line in lines {
        let (color, top, labeled) = match line.kind {
            RulerLineKind::Day => {
                date_anchor_x = line.x + LABEL_INSET_PX;
                date_anchor = Some(line.instant);
                (style.day_line_color, plot.top, true)
            }
            RulerLineKind::Hour => (style.hour_line_color, plot.top, true),
            RulerLineKind::HalfHour => (
                style.half_hour_line_color,
                plot.top + DATE_BASELINE_PX + 1.0,
                false,
            ),
        };

        frame.lines.push(LinePrimitive::vertical(
            line.x,
            top,
            bottom,
            style.ruler_line_width,
            color,
        ));
        if labeled {
            frame.underlay_texts.push(label(
                format_hour_label(line.instant),
                line.x + LABEL_INSET_PX,
                plot.top + HOUR_BASELINE_PX - style.hour_font_size_px,
                style.hour_font_size_px,
                color,
            ));
        }
    }

    if let Some(anchor) = date_anchor {
        frame.underlay_texts.push(
            label(
                format_date_label(anchor),
                date_anchor_x,
                plot.top + DATE_BASELINE_PX - style.date_font_size_px,
                style.date_font_size_px,
                style.day_line_color,
            )
            .bold(),
        );
    }
}

fn label(text: String, x: f64, y: f64, font_size_px: f64, color: Color) -> TextPrimitive {
    TextPrimitive::new(text, x, y, font_size_px, color, TextHAlign::Left)
}
