use serde::{Deserialize, Serialize};

use crate::core::ChartDataset;
use crate::core::primitives::ensure_finite;
use crate::error::ChartResult;

/// Rule selecting the y-axis minimum and therefore the scaling range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BaselinePolicy {
    /// Axis starts at zero; range is the global maximum.
    Zero,
    /// Axis starts at the smallest value in the dataset.
    #[default]
    MinimumValue,
    /// Axis starts at the smaller of the dataset minimum and the given ceiling.
    MinimumWithCeiling(f64),
}

impl BaselinePolicy {
    /// Rejects a NaN or infinite ceiling.
    pub fn validate(self) -> ChartResult<()> {
        if let Self::MinimumWithCeiling(ceiling) = self {
            ensure_finite(ceiling, "baseline ceiling")?;
        }
        Ok(())
    }
}

/// Shared y scaling for the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min_value: f64,
    pub range: f64,
}

impl ValueRange {
    #[must_use]
    pub fn max_value(self) -> f64 {
        self.min_value + self.range
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.range == 0.0
    }
}

/// Reduces the dataset into `(min_value, range)` for `baseline`.
///
/// This is a pure reduction; a zero range is returned as-is and callers that
/// divide by it must check.
pub fn compute_value_range(
    dataset: &ChartDataset,
    baseline: BaselinePolicy,
) -> ChartResult<ValueRange> {
    baseline.validate()?;
    let (global_min, global_max) = dataset.value_extent()?;

    let min_value = match baseline {
        BaselinePolicy::Zero => 0.0,
        BaselinePolicy::MinimumValue => global_min,
        BaselinePolicy::MinimumWithCeiling(ceiling) => global_min.min(ceiling),
    };

    Ok(ValueRange {
        min_value,
        range: global_max - min_value,
    })
}

pub fn range(dataset: &ChartDataset, baseline: BaselinePolicy) -> ChartResult<f64> {
    compute_value_range(dataset, baseline).map(|value_range| value_range.range)
}

pub fn min_value(dataset: &ChartDataset, baseline: BaselinePolicy) -> ChartResult<f64> {
    compute_value_range(dataset, baseline).map(|value_range| value_range.min_value)
}
