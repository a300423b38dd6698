use crate::core::Viewport;
use crate::error::{SelectorError, SelectorResult};

use super::{IntervalSelectorConfig, SelectorStyle};

pub(super) fn validate_viewport(viewport: Viewport) -> SelectorResult<Viewport> {
    if !viewport.is_valid() {
        return Err(SelectorError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_grid_interval_ms(grid_interval_ms: i64) -> SelectorResult<i64> {
    if grid_interval_ms <= 0 {
        return Err(SelectorError::invalid(format!(
            "grid interval must be > 0 ms, got {grid_interval_ms}"
        )));
    }
    Ok(grid_interval_ms)
}

pub(super) fn validate_utc_offset_seconds(offset_seconds: i32) -> SelectorResult<i32> {
    if !(-14 * 3600..=14 * 3600).contains(&offset_seconds) {
        return Err(SelectorError::invalid(
            "display offset must be between -14h and +14h",
        ));
    }
    Ok(offset_seconds)
}

pub(super) fn validate_style(style: SelectorStyle) -> SelectorResult<SelectorStyle> {
    for color in [
        style.background_color,
        style.disabled_background_color,
        style.day_line_color,
        style.hour_line_color,
        style.half_hour_line_color,
        style.interval_fill_color,
        style.interval_border_color,
        style.knob_color,
        style.interval_text_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("ruler line width", style.ruler_line_width),
        ("date font size", style.date_font_size_px),
        ("hour font size", style.hour_font_size_px),
        ("time font size", style.time_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SelectorError::invalid(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    if !style.interval_border_width.is_finite() || style.interval_border_width < 0.0 {
        return Err(SelectorError::invalid(
            "interval border width must be finite and >= 0",
        ));
    }

    Ok(style)
}

pub(super) fn validate_config(
    config: IntervalSelectorConfig,
) -> SelectorResult<IntervalSelectorConfig> {
    validate_viewport(config.viewport)?;
    crate::core::timeline_window::validate_display_length(config.display_length_minutes)?;
    validate_grid_interval_ms(config.grid_interval_ms)?;
    if let Some(offset_seconds) = config.display_utc_offset_seconds {
        validate_utc_offset_seconds(offset_seconds)?;
    }
    validate_style(config.style)?;
    Ok(config)
}
