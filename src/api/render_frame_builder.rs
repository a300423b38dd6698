use tracing::trace;

use crate::error::SelectorResult;
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer};

use super::interval_scene_builder::append_interval;
use super::ruler_scene_builder::{RulerLine, append_ruler, resolve_ruler_lines};
use super::{IntervalSelector, SelectorGeometry};

/// Width of the frame drawn around the component.
pub const BORDER_WIDTH_PX: f64 = 1.0;

/// Drawable region inside the component border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PlotArea {
    pub(super) left: f64,
    pub(super) top: f64,
    pub(super) width: f64,
    pub(super) height: f64,
}

impl PlotArea {
    fn inset(width: f64, height: f64, border: f64) -> Self {
        Self {
            left: border,
            top: border,
            width: (width - 2.0 * border).max(0.0),
            height: (height - 2.0 * border).max(0.0),
        }
    }

    pub(super) fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Frame plus the hit-test regions it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorScene {
    pub frame: RenderFrame,
    /// `None` when no interval is visible.
    pub geometry: Option<SelectorGeometry>,
}

impl<R: Renderer> IntervalSelector<R> {
    /// Ruler guide lines for the current window, in drawing order.
    pub fn ruler_lines(&self) -> SelectorResult<Vec<RulerLine>> {
        resolve_ruler_lines(self.window, self.display_offset, self.plot_area())
    }

    fn plot_area(&self) -> PlotArea {
        PlotArea::inset(
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
            BORDER_WIDTH_PX,
        )
    }

    /// Materializes the current state into a backend-agnostic frame.
    ///
    /// Drawing order is background, ruler, component border, then the
    /// interval overlay. A disabled selector yields only its disabled
    /// background.
    pub fn build_render_frame(&self) -> SelectorResult<SelectorScene> {
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);

        if !self.enabled {
            let frame = RenderFrame::new(self.viewport, self.style.disabled_background_color);
            frame.validate()?;
            return Ok(SelectorScene {
                frame,
                geometry: None,
            });
        }

        let mut frame = RenderFrame::new(self.viewport, self.style.background_color);
        // Rects are painted after lines, so the border rect is left unfilled.
        frame.rects.push(
            RectPrimitive::new(0.0, 0.0, width, height, Color::TRANSPARENT)
                .with_border(BORDER_WIDTH_PX, self.style.interval_border_color),
        );

        let plot = self.plot_area();
        let lines = self.ruler_lines()?;
        append_ruler(&mut frame, &lines, plot, self.style);

        let geometry = match self.binding.as_ref() {
            Some(binding) => append_interval(
                &mut frame,
                binding.interval.get(),
                self.window,
                self.display_offset,
                plot,
                self.style,
            )?,
            None => None,
        };

        frame.validate()?;
        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.text_count(),
            has_interval = geometry.is_some(),
            "selector frame built"
        );
        Ok(SelectorScene { frame, geometry })
    }
}
