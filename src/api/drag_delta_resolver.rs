use crate::core::LinearScale;
use crate::error::{SelectorError, SelectorResult};

/// Converts a horizontal pointer displacement into a time displacement.
///
/// `scale` maps the visible window onto `viewport_width_px`. Positive
/// `delta_px` (pointer moving right) yields a positive delta. The result is
/// truncated toward zero to whole milliseconds.
pub(super) fn resolve_drag_delta_ms(
    delta_px: f64,
    viewport_width_px: f64,
    scale: LinearScale,
) -> SelectorResult<i64> {
    let delta_ms = scale.pixel_delta_to_domain(delta_px, viewport_width_px)?;
    if !delta_ms.is_finite() || delta_ms.abs() >= i64::MAX as f64 {
        return Err(SelectorError::invalid(
            "computed drag delta time must be finite",
        ));
    }
    Ok(delta_ms.trunc() as i64)
}

/// Snaps a delta to whole grid steps, truncating toward zero.
///
/// Returns `None` when the delta is shorter than one grid interval in either
/// direction, so the caller can keep accumulating motion.
pub(super) fn snap_delta_to_grid(delta_ms: i64, grid_interval_ms: i64) -> Option<i64> {
    if grid_interval_ms <= 0 || delta_ms.abs() < grid_interval_ms {
        return None;
    }
    Some(delta_ms / grid_interval_ms * grid_interval_ms)
}
