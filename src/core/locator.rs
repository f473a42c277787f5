use serde::{Deserialize, Serialize};

use crate::core::{
    BaselinePolicy, CanvasSize, ChartDataset, DataPoint, PixelLocation, SeriesId, ValueRange,
    compute_value_range,
};
use crate::error::{ChartError, ChartResult};

/// Nearest point of one series under the pointer, with its canvas position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchReading {
    pub series_id: SeriesId,
    pub index: usize,
    pub point: DataPoint,
    pub location: PixelLocation,
}

/// Maps `pointer_x` onto the index of the nearest of `point_count` points laid
/// out evenly across `canvas_width`.
///
/// Points sit at `index * section`; a pointer exactly halfway between two
/// points resolves to the upper one. Returns `None` when fewer than two
/// points exist (no section can be formed) or the pointer falls outside.
#[must_use]
pub fn nearest_index(pointer_x: f64, canvas_width: f64, point_count: usize) -> Option<usize> {
    if point_count <= 1 || !pointer_x.is_finite() || !canvas_width.is_finite() {
        return None;
    }
    if canvas_width <= 0.0 {
        return None;
    }

    let x_section = canvas_width / (point_count - 1) as f64;
    let index = ((pointer_x + x_section / 2.0) / x_section).floor();
    if index < 0.0 || index >= point_count as f64 {
        return None;
    }
    Some(index as usize)
}

/// Nearest point per series, in dataset order.
///
/// Series with fewer than two points, or where the pointer resolves outside
/// the series, contribute nothing.
#[must_use]
pub fn nearest_points(pointer_x: f64, canvas_width: f64, dataset: &ChartDataset) -> Vec<DataPoint> {
    dataset
        .series()
        .iter()
        .filter_map(|series| {
            nearest_index(pointer_x, canvas_width, series.len())
                .map(|index| series.points[index].clone())
        })
        .collect()
}

/// Canvas position of the nearest point per series, in dataset order.
///
/// The y scale comes from one dataset-wide [`ValueRange`] so every series is
/// drawn against the same axis. Fails with [`ChartError::ZeroRange`] when all
/// values collapse onto the baseline.
pub fn pixel_locations(
    pointer_x: f64,
    canvas: CanvasSize,
    dataset: &ChartDataset,
    baseline: BaselinePolicy,
) -> ChartResult<Vec<PixelLocation>> {
    Ok(locate_touch(pointer_x, canvas, dataset, baseline)?
        .into_iter()
        .map(|reading| reading.location)
        .collect())
}

/// Nearest point and its canvas position per series, in dataset order.
pub fn locate_touch(
    pointer_x: f64,
    canvas: CanvasSize,
    dataset: &ChartDataset,
    baseline: BaselinePolicy,
) -> ChartResult<Vec<TouchReading>> {
    canvas.validate()?;
    let value_range = compute_value_range(dataset, baseline)?;
    let y_section = y_section(value_range, canvas.height)?;

    let readings = dataset
        .series()
        .iter()
        .filter_map(|series| {
            let count = series.len();
            let index = nearest_index(pointer_x, canvas.width, count)?;
            let point = &series.points[index];
            let x_section = canvas.width / (count - 1) as f64;
            let location = PixelLocation::new(
                index as f64 * x_section,
                (point.value() - value_range.min_value) * -y_section + canvas.height,
            );
            Some(TouchReading {
                series_id: series.id.clone(),
                index,
                point: point.clone(),
                location,
            })
        })
        .collect();

    Ok(readings)
}

fn y_section(value_range: ValueRange, height: f64) -> ChartResult<f64> {
    if !value_range.range.is_finite() {
        return Err(ChartError::InvalidData(
            "value range overflows f64; cannot scale y axis".to_owned(),
        ));
    }
    if value_range.is_degenerate() {
        return Err(ChartError::ZeroRange {
            min_value: value_range.min_value,
        });
    }
    Ok(height / value_range.range)
}
