use serde::{Deserialize, Serialize};

/// What a pointer press grabbed, and therefore what a drag will move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    /// Empty ruler area: dragging pans the visible window.
    Component,
    IntervalBody,
    StartKnob,
    EndKnob,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging(DragTarget),
}

/// Advisory pointer shape for hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    Move,
    ResizeStart,
    ResizeEnd,
}

impl CursorHint {
    /// CSS cursor name understood by GTK and browsers.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::ResizeStart => "e-resize",
            Self::ResizeEnd => "w-resize",
        }
    }
}

/// Outcome of one drag motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragStep {
    /// No drag in progress, or the selector is disabled.
    Ignored,
    /// Motion since the last applied step is still under one grid interval.
    BelowGrid,
    /// The step would have inverted the interval and was dropped.
    Refused,
    /// A grid-aligned delta in milliseconds was applied.
    Applied { delta_ms: i64 },
}

/// Pointer gesture state. The last pointer x is only tracked while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    last_pointer_x: Option<f64>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn drag_target(self) -> Option<DragTarget> {
        match self.mode {
            InteractionMode::Idle => None,
            InteractionMode::Dragging(target) => Some(target),
        }
    }

    #[must_use]
    pub fn last_pointer_x(self) -> Option<f64> {
        self.last_pointer_x
    }

    pub fn on_press(&mut self, target: DragTarget, x: f64) {
        self.mode = InteractionMode::Dragging(target);
        self.last_pointer_x = Some(x);
    }

    /// Records the pointer position at which a drag step was applied.
    pub fn on_drag_step(&mut self, x: f64) {
        if self.drag_target().is_some() {
            self.last_pointer_x = Some(x);
        }
    }

    pub fn on_release(&mut self) {
        self.mode = InteractionMode::Idle;
        self.last_pointer_x = None;
    }
}
