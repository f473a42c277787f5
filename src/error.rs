use thiserror::Error;

use crate::core::SeriesId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("dataset contains no series")]
    EmptyDataset,

    #[error("series `{series_id}` contains no data points")]
    EmptySeries { series_id: SeriesId },

    #[error("value range is zero (all values collapse onto {min_value}); cannot scale y axis")]
    ZeroRange { min_value: f64 },

    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
