use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartDataset, GradientAnchor, SeriesId, StrokeStyle, StyleVariant};

/// Priority given to every legend derived from series styles.
pub const SERIES_LEGEND_PRIORITY: i32 = 1;

/// Display-only summary of one series for the legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendDescriptor {
    pub series_id: SeriesId,
    pub label: String,
    /// Swatch style; gradients are always sampled leading→trailing.
    pub style: StyleVariant,
    pub priority: i32,
    pub stroke_style: StrokeStyle,
}

/// One descriptor per styled series, in dataset order.
///
/// Series without a style are skipped and the remaining entries keep their
/// relative order.
#[must_use]
pub fn build_legends(dataset: &ChartDataset) -> Vec<LegendDescriptor> {
    dataset
        .series()
        .iter()
        .filter_map(|series| {
            let Some(style) = series.style.as_ref() else {
                trace!(series_id = %series.id, "series has no style, omitting legend entry");
                return None;
            };
            Some(LegendDescriptor {
                series_id: series.id.clone(),
                label: series.legend_title.clone(),
                style: legend_swatch(style),
                priority: SERIES_LEGEND_PRIORITY,
                stroke_style: StrokeStyle::default(),
            })
        })
        .collect()
}

fn legend_swatch(style: &StyleVariant) -> StyleVariant {
    match style {
        StyleVariant::Solid { color } => StyleVariant::Solid { color: *color },
        StyleVariant::LinearGradient { colors, .. } => StyleVariant::LinearGradient {
            colors: colors.clone(),
            start: GradientAnchor::Leading,
            end: GradientAnchor::Trailing,
        },
        StyleVariant::GradientStops { stops, .. } => StyleVariant::GradientStops {
            stops: stops.clone(),
            start: GradientAnchor::Leading,
            end: GradientAnchor::Trailing,
        },
    }
}
