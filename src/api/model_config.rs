use serde::{Deserialize, Serialize};

use crate::core::BaselinePolicy;
use crate::error::{ChartError, ChartResult};

/// Where the renderer takes x-axis labels from.
///
/// The core only stores the selection; resolving labels is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "labels", rename_all = "snake_case")]
pub enum XAxisLabelSource {
    /// Per-point `x_label` of the first series.
    #[default]
    FromDataPoint,
    /// Explicit label list supplied with the chart data.
    FromChartData(Vec<String>),
}

impl XAxisLabelSource {
    /// Explicit labels, when this source carries them.
    #[must_use]
    pub fn explicit_labels(&self) -> Option<&[String]> {
        match self {
            Self::FromDataPoint => None,
            Self::FromChartData(labels) => Some(labels),
        }
    }
}

/// Serializable chart setup so hosts can persist and reload it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModelConfig {
    #[serde(default = "default_baseline_policy")]
    pub baseline_policy: BaselinePolicy,
    #[serde(default = "default_x_axis_label_source")]
    pub x_axis_label_source: XAxisLabelSource,
}

impl Default for ChartModelConfig {
    fn default() -> Self {
        Self {
            baseline_policy: default_baseline_policy(),
            x_axis_label_source: default_x_axis_label_source(),
        }
    }
}

impl ChartModelConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_baseline_policy(mut self, policy: BaselinePolicy) -> Self {
        self.baseline_policy = policy;
        self
    }

    #[must_use]
    pub fn with_x_axis_label_source(mut self, source: XAxisLabelSource) -> Self {
        self.x_axis_label_source = source;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.baseline_policy.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart model config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart model config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_baseline_policy() -> BaselinePolicy {
    BaselinePolicy::MinimumValue
}

fn default_x_axis_label_source() -> XAxisLabelSource {
    XAxisLabelSource::FromDataPoint
}
