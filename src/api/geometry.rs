use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PixelRect;
use crate::interaction::{CursorHint, DragTarget};

/// Width of the resize handles at both interval edges.
pub const KNOB_WIDTH_PX: f64 = 5.0;

/// Hit-test regions produced by one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorGeometry {
    pub body: PixelRect,
    pub start_knob: PixelRect,
    pub end_knob: PixelRect,
}

impl SelectorGeometry {
    /// Builds body and knob regions for an interval spanning
    /// `[x_start, x_end]` horizontally.
    #[must_use]
    pub fn for_span(x_start: f64, x_end: f64, top: f64, height: f64) -> Self {
        let width = (x_end - x_start).max(0.0);
        Self {
            body: PixelRect::new(x_start, top, width, height),
            start_knob: PixelRect::new(x_start, top, KNOB_WIDTH_PX, height),
            end_knob: PixelRect::new(x_start + width - KNOB_WIDTH_PX, top, KNOB_WIDTH_PX, height),
        }
    }

    /// Classifies a point. Knobs win over the body, the start knob over the
    /// end knob.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> DragTarget {
        let regions: SmallVec<[(DragTarget, PixelRect); 3]> = SmallVec::from_buf([
            (DragTarget::StartKnob, self.start_knob),
            (DragTarget::EndKnob, self.end_knob),
            (DragTarget::IntervalBody, self.body),
        ]);
        regions
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map_or(DragTarget::Component, |(target, _)| target)
    }

    #[must_use]
    pub fn cursor_hint(&self, x: f64, y: f64) -> CursorHint {
        match self.hit_test(x, y) {
            DragTarget::StartKnob => CursorHint::ResizeStart,
            DragTarget::EndKnob => CursorHint::ResizeEnd,
            DragTarget::IntervalBody | DragTarget::Component => CursorHint::Move,
        }
    }
}
