pub mod legend;
pub mod locator;
pub mod primitives;
pub mod range;
pub mod series;
pub mod style;
pub mod types;

pub use legend::{LegendDescriptor, SERIES_LEGEND_PRIORITY, build_legends};
pub use locator::{TouchReading, locate_touch, nearest_index, nearest_points, pixel_locations};
pub use range::{BaselinePolicy, ValueRange, compute_value_range, min_value, range};
pub use series::{ChartDataset, Series, SeriesId};
pub use style::{
    Color, GradientAnchor, GradientStop, LineCap, LineJoin, StrokeStyle, StyleVariant,
};
pub use types::{CanvasSize, DataPoint, PixelLocation, PointId};
