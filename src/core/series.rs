use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::primitives::ensure_finite;
use crate::core::{DataPoint, StyleVariant};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One line of the chart: ordered points plus the style used to draw it.
///
/// `style == None` marks a series without a recognized style; it is still
/// drawn by hosts that pick a fallback, but it gets no legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub points: Vec<DataPoint>,
    #[serde(default)]
    pub legend_title: String,
    #[serde(default)]
    pub style: Option<StyleVariant>,
}

impl Series {
    #[must_use]
    pub fn new(id: impl Into<SeriesId>, points: Vec<DataPoint>) -> Self {
        Self {
            id: id.into(),
            points,
            legend_title: String::new(),
            style: None,
        }
    }

    /// Builds a series from raw values, one point per value.
    #[must_use]
    pub fn from_values(id: impl Into<SeriesId>, values: &[f64]) -> Self {
        Self::new(id, values.iter().copied().map(DataPoint::new).collect())
    }

    #[must_use]
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = title.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleVariant) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimum and maximum value of this series.
    pub fn value_extent(&self) -> ChartResult<(f64, f64)> {
        let mut iter = self.points.iter();
        let first = iter.next().ok_or_else(|| ChartError::EmptySeries {
            series_id: self.id.clone(),
        })?;
        let seed = ensure_finite(first.value(), "point value")?;

        iter.try_fold((seed, seed), |(min, max), point| {
            let value = ensure_finite(point.value(), "point value")?;
            Ok((min.min(value), max.max(value)))
        })
    }
}

/// Ordered series sharing one coordinate space.
///
/// Touch mapping indexes every series independently against the same canvas
/// width, so series are expected to share point count and x domain. The
/// dataset tolerates mismatches; [`ChartDataset::has_uniform_length`] lets
/// hosts check the precondition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartDataset {
    series: Vec<Series>,
}

impl ChartDataset {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_by_id(&self, id: &SeriesId) -> Option<&Series> {
        self.series.iter().find(|series| &series.id == id)
    }

    pub(crate) fn series_by_id_mut(&mut self, id: &SeriesId) -> Option<&mut Series> {
        self.series.iter_mut().find(|series| &series.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn into_series(self) -> Vec<Series> {
        self.series
    }

    /// Global `(min, max)` over every point of every series.
    ///
    /// Fails on an empty dataset, an empty series, or a non-finite value.
    pub fn value_extent(&self) -> ChartResult<(f64, f64)> {
        let mut iter = self.series.iter();
        let first = iter.next().ok_or(ChartError::EmptyDataset)?;
        let seed = first.value_extent()?;

        iter.try_fold(seed, |(min, max), series| {
            let (series_min, series_max) = series.value_extent()?;
            Ok((min.min(series_min), max.max(series_max)))
        })
    }

    #[must_use]
    pub fn has_uniform_length(&self) -> bool {
        self.point_count_mismatch().is_none()
    }

    /// Returns the first series whose length differs from the first series,
    /// together with `(expected, actual)` point counts.
    #[must_use]
    pub fn point_count_mismatch(&self) -> Option<(&SeriesId, usize, usize)> {
        let expected = self.series.first()?.len();
        self.series
            .iter()
            .find(|series| series.len() != expected)
            .map(|series| (&series.id, expected, series.len()))
    }

    /// Full structural check: non-empty, finite values, unique ids, valid styles.
    pub fn validate(&self) -> ChartResult<()> {
        self.value_extent()?;

        let mut seen = HashSet::with_capacity(self.series.len());
        for series in &self.series {
            if !seen.insert(&series.id) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate series id `{}`",
                    series.id
                )));
            }
            if let Some(style) = &series.style {
                style.validate()?;
            }
        }
        Ok(())
    }
}

impl From<Vec<Series>> for ChartDataset {
    fn from(series: Vec<Series>) -> Self {
        Self::new(series)
    }
}

impl FromIterator<Series> for ChartDataset {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
