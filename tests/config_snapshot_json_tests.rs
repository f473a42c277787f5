use linechart_core::api::{
    CHART_MODEL_SNAPSHOT_JSON_SCHEMA_V1, ChartModel, ChartModelConfig, ChartModelSnapshot,
    XAxisLabelSource,
};
use linechart_core::core::{BaselinePolicy, ChartDataset, Color, Series, StyleVariant};

fn sample_model() -> ChartModel {
    let dataset = ChartDataset::new(vec![
        Series::from_values("a", &[1.0, 4.0, 2.0])
            .with_legend_title("A")
            .with_style(StyleVariant::solid(Color::rgb(0.5, 0.25, 1.0))),
        Series::from_values("b", &[3.0, 0.5, 8.0]),
    ]);
    let config = ChartModelConfig::new()
        .with_baseline_policy(BaselinePolicy::MinimumWithCeiling(2.0))
        .with_x_axis_label_source(XAxisLabelSource::FromChartData(vec![
            "x0".to_owned(),
            "x1".to_owned(),
            "x2".to_owned(),
        ]));
    ChartModel::from_config(dataset, config).expect("model")
}

#[test]
fn empty_config_json_uses_defaults() {
    let config = ChartModelConfig::from_json_str("{}").expect("parse defaults");
    assert_eq!(config, ChartModelConfig::default());
    assert_eq!(config.baseline_policy, BaselinePolicy::MinimumValue);
    assert_eq!(config.x_axis_label_source, XAxisLabelSource::FromDataPoint);
}

#[test]
fn config_json_round_trips_tagged_enums() {
    let config = sample_model().config();
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"minimum_with_ceiling\""));
    assert!(json.contains("\"from_chart_data\""));

    let parsed = ChartModelConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_json_rejects_unknown_policy() {
    let err = ChartModelConfig::from_json_str(r#"{"baseline_policy":{"kind":"median"}}"#)
        .expect_err("unknown policy");
    assert!(err.to_string().contains("failed to parse chart model config"));
}

#[test]
fn snapshot_contract_round_trips() {
    let model = sample_model();
    let snapshot = model.snapshot();
    assert_eq!(snapshot.legends.len(), 1);
    let value_range = snapshot.value_range.expect("value range");
    assert_eq!(value_range.min_value, 0.5);
    assert_eq!(value_range.range, 7.5);

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!(
        "\"schema_version\": {CHART_MODEL_SNAPSHOT_JSON_SCHEMA_V1}"
    )));
    assert!(!json.contains("\"dataset\""));

    let parsed = ChartModelSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
    assert_eq!(parsed.config, model.config());
    assert_eq!(parsed.legends.as_slice(), model.legends());
}

#[test]
fn snapshot_accepts_bare_payload_and_rejects_future_schema() {
    let snapshot = sample_model().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("serialize bare");
    let parsed = ChartModelSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);

    let future = serde_json::json!({
        "schema_version": 99,
        "snapshot": snapshot,
    })
    .to_string();
    let err = ChartModelSnapshot::from_json_compat_str(&future).expect_err("future schema");
    assert!(err.to_string().contains("unsupported snapshot schema version"));
}

#[test]
fn snapshot_of_empty_model_has_no_value_range() {
    let model = ChartModel::new(ChartDataset::default(), BaselinePolicy::Zero);
    assert_eq!(model.snapshot().value_range, None);
}
