use tracing::{debug, trace, warn};

use crate::core::{MAX_DISPLAY_LENGTH_MINUTES, MIN_DISPLAY_LENGTH_MINUTES};
use crate::error::SelectorResult;
use crate::interaction::{CursorHint, DragStep, DragTarget, InteractionMode};
use crate::render::Renderer;

use super::IntervalSelector;
use super::drag_delta_resolver::{resolve_drag_delta_ms, snap_delta_to_grid};

/// Display-length change per wheel notch.
pub const WHEEL_STEP_MINUTES: i64 = 15;

impl<R: Renderer> IntervalSelector<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Starts a drag gesture at `(x, y)`.
    ///
    /// The press is classified against the geometry of the last render pass:
    /// start knob, end knob, interval body, then the rest of the component.
    /// Returns `None` while the selector is disabled.
    pub fn pointer_press(&mut self, x: f64, y: f64) -> Option<DragTarget> {
        if !self.enabled {
            return None;
        }
        let target = self
            .geometry
            .map_or(DragTarget::Component, |geometry| geometry.hit_test(x, y));
        self.interaction.on_press(target, x);
        debug!(?target, x, y, "drag started");
        Some(target)
    }

    /// Applies pointer motion during a drag.
    ///
    /// Motion is measured from the position of the last applied step, so
    /// moves shorter than one grid interval accumulate until they reach it.
    pub fn pointer_drag(&mut self, x: f64, _y: f64) -> SelectorResult<DragStep> {
        if !self.enabled {
            return Ok(DragStep::Ignored);
        }
        let (Some(target), Some(last_x)) = (
            self.interaction.drag_target(),
            self.interaction.last_pointer_x(),
        ) else {
            return Ok(DragStep::Ignored);
        };

        let raw_delta_ms = resolve_drag_delta_ms(
            x - last_x,
            f64::from(self.viewport.width),
            self.window.scale()?,
        )?;
        let Some(delta_ms) = snap_delta_to_grid(raw_delta_ms, self.grid_interval_ms) else {
            return Ok(DragStep::BelowGrid);
        };

        let applied = match target {
            DragTarget::Component => {
                // Content follows the pointer, so the window moves the other way.
                self.window.pan_by_ms(-delta_ms)?;
                true
            }
            DragTarget::IntervalBody | DragTarget::StartKnob | DragTarget::EndKnob => {
                self.drag_interval(target, delta_ms)?
            }
        };
        if !applied {
            return Ok(DragStep::Refused);
        }

        trace!(?target, delta_ms, "drag step applied");
        self.interaction.on_drag_step(x);
        self.redraw.request();
        Ok(DragStep::Applied { delta_ms })
    }

    /// Ends the current drag gesture.
    pub fn pointer_release(&mut self) {
        if let Some(target) = self.interaction.drag_target() {
            debug!(?target, "drag ended");
        }
        self.interaction.on_release();
    }

    /// Cursor shape for a hovering pointer. Purely advisory.
    #[must_use]
    pub fn pointer_hover(&self, x: f64, y: f64) -> CursorHint {
        self.geometry
            .map_or(CursorHint::Move, |geometry| geometry.cursor_hint(x, y))
    }

    /// Zooms by `notches` wheel steps of 15 minutes each; positive values
    /// show more time.
    ///
    /// Returns `false` without changing anything when the selector is
    /// disabled or the resulting length would leave `[180, 1440]` minutes.
    pub fn wheel(&mut self, notches: i32) -> bool {
        if !self.enabled || notches == 0 {
            return false;
        }
        let requested = i64::from(self.window.length_minutes())
            + WHEEL_STEP_MINUTES * i64::from(notches);
        let in_range = (i64::from(MIN_DISPLAY_LENGTH_MINUTES)
            ..=i64::from(MAX_DISPLAY_LENGTH_MINUTES))
            .contains(&requested);
        let Some(minutes) = u32::try_from(requested).ok().filter(|_| in_range) else {
            trace!(requested, "wheel zoom out of range ignored");
            return false;
        };

        match self.set_display_length_minutes(minutes) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "wheel zoom rejected");
                false
            }
        }
    }

    fn drag_interval(&mut self, target: DragTarget, delta_ms: i64) -> SelectorResult<bool> {
        let Some(interval) = self.interval() else {
            return Ok(false);
        };

        let current = interval.get();
        let candidate = match target {
            DragTarget::StartKnob => current.shifted_start(delta_ms)?,
            DragTarget::EndKnob => current.shifted_end(delta_ms)?,
            DragTarget::IntervalBody | DragTarget::Component => current.shifted(delta_ms)?,
        };
        if !candidate.is_ordered() {
            trace!(?target, delta_ms, "drag step would invert interval");
            return Ok(false);
        }

        let moved = match target {
            DragTarget::StartKnob => interval.shift_start(delta_ms)?,
            DragTarget::EndKnob => interval.shift_end(delta_ms)?,
            DragTarget::IntervalBody | DragTarget::Component => interval.shift(delta_ms)?,
        };

        let left_window = match target {
            DragTarget::StartKnob => self.window.is_before_start(moved.start()),
            DragTarget::EndKnob => self.window.is_after_end(moved.end()),
            DragTarget::IntervalBody | DragTarget::Component => {
                self.window.is_before_start(moved.start()) || self.window.is_after_end(moved.end())
            }
        };
        if left_window {
            self.window.pan_by_ms(delta_ms)?;
        }
        Ok(true)
    }
}
