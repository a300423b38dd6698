use chrono::FixedOffset;

use crate::core::{TimeInterval, TimelineWindow};
use crate::error::SelectorResult;
use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::label_format::format_time_label;
use super::render_frame_builder::PlotArea;
use super::{KNOB_WIDTH_PX, SelectorGeometry, SelectorStyle};

/// Top edge of the interval body in component pixels.
pub const INTERVAL_TOP_PX: f64 = 12.0;
const TIME_LABEL_INSET_PX: f64 = 2.0;
const TIME_LABEL_GAP_PX: f64 = 2.0;

/// Horizontal pixel of `instant` inside the plot, floored to whole pixels.
fn project_x(
    window: TimelineWindow,
    instant_offset_ms: i64,
    plot: PlotArea,
) -> SelectorResult<f64> {
    let scale = window.scale()?;
    let x = scale.domain_to_pixel(instant_offset_ms as f64, plot.width)?;
    Ok(plot.left + x.floor())
}

/// Appends the interval body, its knobs and its time labels.
///
/// Returns the hit-test geometry, or `None` when the interval does not
/// intersect the window and nothing was drawn.
pub(super) fn append_interval(
    frame: &mut RenderFrame,
    interval: TimeInterval,
    window: TimelineWindow,
    offset: FixedOffset,
    plot: PlotArea,
    style: SelectorStyle,
) -> SelectorResult<Option<SelectorGeometry>> {
    if !window.overlaps(interval) {
        return Ok(None);
    }

    let x_start = project_x(window, window.offset_ms(interval.start()), plot)?;
    let x_end = project_x(window, window.offset_ms(interval.end()), plot)?;
    let height = (plot.bottom() - INTERVAL_TOP_PX).max(0.0);
    let geometry = SelectorGeometry::for_span(x_start, x_end, INTERVAL_TOP_PX, height);

    let body = geometry.body;
    frame.rects.push(
        RectPrimitive::new(body.x, body.y, body.width, body.height, style.interval_fill_color)
            .with_border(style.interval_border_width, style.interval_border_color),
    );
    for knob in [geometry.start_knob, geometry.end_knob] {
        frame.rects.push(RectPrimitive::new(
            knob.x,
            knob.y,
            knob.width,
            knob.height,
            style.knob_color,
        ));
    }

    let label_top = INTERVAL_TOP_PX + 1.0;
    frame.texts.push(
        TextPrimitive::new(
            format_time_label(interval.start().with_timezone(&offset)),
            x_start + KNOB_WIDTH_PX + TIME_LABEL_INSET_PX,
            label_top,
            style.time_font_size_px,
            style.interval_text_color,
            TextHAlign::Left,
        )
        .bold(),
    );
    frame.texts.push(
        TextPrimitive::new(
            format_time_label(interval.end().with_timezone(&offset)),
            body.right() - KNOB_WIDTH_PX - TIME_LABEL_INSET_PX,
            label_top + style.time_font_size_px + TIME_LABEL_GAP_PX,
            style.time_font_size_px,
            style.interval_text_color,
            TextHAlign::Right,
        )
        .bold(),
    );

    Ok(Some(geometry))
}
