use tracing::{debug, trace, warn};

use crate::core::{
    BaselinePolicy, CanvasSize, ChartDataset, DataPoint, LegendDescriptor, PixelLocation,
    SeriesId, StyleVariant, TouchReading, ValueRange, build_legends, compute_value_range,
    locate_touch, nearest_points, pixel_locations,
};
use crate::error::{ChartError, ChartResult};

use super::{ChartModelConfig, XAxisLabelSource};

/// Flags describing what a mutation touched.
///
/// The model has no observers of its own; hosts inspect this value to decide
/// what to invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct ChartModelChange {
    pub dataset: bool,
    pub baseline: bool,
    pub legends: bool,
    pub x_axis_labels: bool,
}

impl ChartModelChange {
    pub const NONE: Self = Self {
        dataset: false,
        baseline: false,
        legends: false,
        x_axis_labels: false,
    };

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            dataset: self.dataset || other.dataset,
            baseline: self.baseline || other.baseline,
            legends: self.legends || other.legends,
            x_axis_labels: self.x_axis_labels || other.x_axis_labels,
        }
    }
}

/// Composition root consumed by renderers.
///
/// Owns the dataset, the baseline policy and the legend cache. Every mutation
/// goes through a method that keeps `legends` consistent with `dataset`; the
/// model has no interior synchronization, so hosts serialize access.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    dataset: ChartDataset,
    baseline_policy: BaselinePolicy,
    x_axis_label_source: XAxisLabelSource,
    legends: Vec<LegendDescriptor>,
}

impl ChartModel {
    #[must_use]
    pub fn new(dataset: ChartDataset, baseline_policy: BaselinePolicy) -> Self {
        Self::with_label_source(dataset, baseline_policy, XAxisLabelSource::default())
    }

    pub fn from_config(dataset: ChartDataset, config: ChartModelConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self::with_label_source(
            dataset,
            config.baseline_policy,
            config.x_axis_label_source,
        ))
    }

    fn with_label_source(
        dataset: ChartDataset,
        baseline_policy: BaselinePolicy,
        x_axis_label_source: XAxisLabelSource,
    ) -> Self {
        let legends = build_legends(&dataset);
        debug!(
            series_count = dataset.len(),
            legend_count = legends.len(),
            ?baseline_policy,
            "chart model created"
        );
        Self {
            dataset,
            baseline_policy,
            x_axis_label_source,
            legends,
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &ChartDataset {
        &self.dataset
    }

    #[must_use]
    pub fn baseline_policy(&self) -> BaselinePolicy {
        self.baseline_policy
    }

    #[must_use]
    pub fn x_axis_label_source(&self) -> &XAxisLabelSource {
        &self.x_axis_label_source
    }

    #[must_use]
    pub fn legends(&self) -> &[LegendDescriptor] {
        &self.legends
    }

    #[must_use]
    pub fn config(&self) -> ChartModelConfig {
        ChartModelConfig {
            baseline_policy: self.baseline_policy,
            x_axis_label_source: self.x_axis_label_source.clone(),
        }
    }

    /// Swaps in a new dataset and rebuilds legends.
    pub fn replace_dataset(&mut self, dataset: ChartDataset) -> ChartModelChange {
        if let Some((series_id, expected, actual)) = dataset.point_count_mismatch() {
            debug!(
                %series_id,
                expected,
                actual,
                "dataset series lengths differ; touch mapping indexes each series independently"
            );
        }

        self.dataset = dataset;
        let legends_changed = self.rebuild_legends();
        debug!(
            series_count = self.dataset.len(),
            legend_count = self.legends.len(),
            "replace dataset"
        );
        ChartModelChange {
            dataset: true,
            legends: legends_changed,
            ..ChartModelChange::NONE
        }
    }

    /// Replaces the style of one series and rebuilds legends.
    pub fn set_series_style(
        &mut self,
        series_id: &SeriesId,
        style: Option<StyleVariant>,
    ) -> ChartResult<ChartModelChange> {
        if let Some(style) = &style {
            style.validate()?;
        }
        let Some(series) = self.dataset.series_by_id_mut(series_id) else {
            warn!(%series_id, "style update for unknown series");
            return Err(ChartError::InvalidData(format!(
                "unknown series id `{series_id}`"
            )));
        };
        series.style = style;

        let legends_changed = self.rebuild_legends();
        trace!(%series_id, legends_changed, "series style replaced");
        Ok(ChartModelChange {
            dataset: true,
            legends: legends_changed,
            ..ChartModelChange::NONE
        })
    }

    /// Switches the baseline; a NaN or infinite ceiling is rejected and the
    /// current policy is kept.
    pub fn set_baseline_policy(
        &mut self,
        policy: BaselinePolicy,
    ) -> ChartResult<ChartModelChange> {
        policy.validate()?;
        if self.baseline_policy == policy {
            return Ok(ChartModelChange::NONE);
        }
        debug!(from = ?self.baseline_policy, to = ?policy, "baseline policy changed");
        self.baseline_policy = policy;
        Ok(ChartModelChange {
            baseline: true,
            ..ChartModelChange::NONE
        })
    }

    pub fn set_x_axis_label_source(&mut self, source: XAxisLabelSource) -> ChartModelChange {
        if self.x_axis_label_source == source {
            return ChartModelChange::NONE;
        }
        self.x_axis_label_source = source;
        ChartModelChange {
            x_axis_labels: true,
            ..ChartModelChange::NONE
        }
    }

    pub fn current_value_range(&self) -> ChartResult<ValueRange> {
        compute_value_range(&self.dataset, self.baseline_policy)
    }

    pub fn current_range(&self) -> ChartResult<f64> {
        self.current_value_range().map(|value_range| value_range.range)
    }

    pub fn current_min_value(&self) -> ChartResult<f64> {
        self.current_value_range()
            .map(|value_range| value_range.min_value)
    }

    #[must_use]
    pub fn locate_points(&self, pointer_x: f64, canvas: CanvasSize) -> Vec<DataPoint> {
        nearest_points(pointer_x, canvas.width, &self.dataset)
    }

    pub fn locate_pixels(
        &self,
        pointer_x: f64,
        canvas: CanvasSize,
    ) -> ChartResult<Vec<PixelLocation>> {
        pixel_locations(pointer_x, canvas, &self.dataset, self.baseline_policy)
    }

    pub fn locate_touch(
        &self,
        pointer_x: f64,
        canvas: CanvasSize,
    ) -> ChartResult<Vec<TouchReading>> {
        locate_touch(pointer_x, canvas, &self.dataset, self.baseline_policy)
    }

    fn rebuild_legends(&mut self) -> bool {
        let legends = build_legends(&self.dataset);
        let skipped = self.dataset.len() - legends.len();
        let changed = legends != self.legends;
        trace!(legend_count = legends.len(), skipped, changed, "rebuild legends");
        self.legends = legends;
        changed
    }
}
