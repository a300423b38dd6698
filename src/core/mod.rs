pub mod scale;
pub mod shared_interval;
pub mod time_interval;
pub mod timeline_window;
pub mod types;

pub use scale::LinearScale;
pub use shared_interval::{IntervalListener, ListenerId, SharedInterval};
pub use time_interval::TimeInterval;
pub use timeline_window::{
    DEFAULT_DISPLAY_LENGTH_MINUTES, MAX_DISPLAY_LENGTH_MINUTES, MIN_DISPLAY_LENGTH_MINUTES,
    TimelineWindow,
};
pub use types::{PixelRect, Viewport};
