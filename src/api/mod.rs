mod chart_model;
mod model_config;
mod model_snapshot;

pub use chart_model::{ChartModel, ChartModelChange};
pub use model_config::{ChartModelConfig, XAxisLabelSource};
pub use model_snapshot::{
    CHART_MODEL_SNAPSHOT_JSON_SCHEMA_V1, ChartModelSnapshot, ChartModelSnapshotJsonContractV1,
};
