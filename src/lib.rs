//! interval-selector: timeline widget engine for picking a time interval.
//!
//! The crate keeps a strict split between a headless engine
//! (`api::IntervalSelector`), backend-agnostic render frames (`render`) and
//! an optional GTK4 adapter (`platform_gtk`).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{IntervalSelector, IntervalSelectorConfig};
pub use crate::core::{SharedInterval, TimeInterval};
pub use error::{SelectorError, SelectorResult};
