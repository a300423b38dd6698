mod binding_controller;
mod drag_delta_resolver;
mod geometry;
mod interaction_controller;
mod interval_scene_builder;
mod label_format;
mod redraw;
mod render_frame_builder;
mod render_style;
mod ruler_scene_builder;
mod selector;
mod selector_config;
mod selector_snapshot;
mod validation;
mod window_controller;

pub use geometry::{KNOB_WIDTH_PX, SelectorGeometry};
pub use interaction_controller::WHEEL_STEP_MINUTES;
pub use interval_scene_builder::INTERVAL_TOP_PX;
pub use label_format::{format_date_label, format_hour_label, format_time_label};
pub use redraw::{RedrawHook, RedrawRequest};
pub use render_frame_builder::{BORDER_WIDTH_PX, SelectorScene};
pub use render_style::SelectorStyle;
pub use ruler_scene_builder::{RULER_STEP_MINUTES, RulerLine, RulerLineKind};
pub use selector::IntervalSelector;
pub use selector_config::{DEFAULT_GRID_INTERVAL_MS, IntervalSelectorConfig};
pub use selector_snapshot::SelectorSnapshot;
