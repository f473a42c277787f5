//! linechart-core: data and geometry core for multi-series line charts.
//!
//! The crate owns series data, derives the shared value range used for
//! y scaling, maps pointer input to nearby points and pixel coordinates, and
//! derives legend descriptors from per-series style. Drawing, theming and
//! event plumbing live in the host renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartModel, ChartModelConfig};
pub use error::{ChartError, ChartResult};
