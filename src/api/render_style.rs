use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Style contract for the selector render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorStyle {
    pub background_color: Color,
    /// Background shown while the selector is disabled.
    pub disabled_background_color: Color,
    pub day_line_color: Color,
    pub hour_line_color: Color,
    pub half_hour_line_color: Color,
    pub ruler_line_width: f64,
    pub interval_fill_color: Color,
    pub interval_border_color: Color,
    pub interval_border_width: f64,
    pub knob_color: Color,
    pub interval_text_color: Color,
    pub date_font_size_px: f64,
    pub hour_font_size_px: f64,
    pub time_font_size_px: f64,
}

impl Default for SelectorStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            disabled_background_color: Color::gray8(235),
            day_line_color: Color::gray8(100),
            hour_line_color: Color::gray8(150),
            half_hour_line_color: Color::gray8(180),
            ruler_line_width: 1.0,
            interval_fill_color: Color::rgba(0.8, 0.9, 1.0, 0.8),
            interval_border_color: Color::gray8(50),
            interval_border_width: 1.0,
            knob_color: Color::rgb(0.2, 0.3, 0.4),
            interval_text_color: Color::BLACK,
            date_font_size_px: 10.0,
            hour_font_size_px: 10.0,
            time_font_size_px: 8.0,
        }
    }
}
