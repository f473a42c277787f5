use serde::{Deserialize, Serialize};

use crate::core::{LegendDescriptor, ValueRange};
use crate::error::{ChartError, ChartResult};

use super::{ChartModel, ChartModelConfig};

pub const CHART_MODEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable state snapshot used by regression tests and debugging tools.
///
/// `value_range` is `None` when the dataset cannot produce one (empty
/// dataset or empty series).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModelSnapshot {
    pub config: ChartModelConfig,
    pub legends: Vec<LegendDescriptor>,
    pub value_range: Option<ValueRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModelSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartModelSnapshot,
}

impl ChartModel {
    #[must_use]
    pub fn snapshot(&self) -> ChartModelSnapshot {
        ChartModelSnapshot {
            config: self.config(),
            legends: self.legends().to_vec(),
            value_range: self.current_value_range().ok(),
        }
    }
}

impl ChartModelSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartModelSnapshotJsonContractV1 {
            schema_version: CHART_MODEL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartModelSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartModelSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != CHART_MODEL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
