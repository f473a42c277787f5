use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::primitives::{decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};

static NEXT_POINT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity handed to UI layers for diffing.
///
/// Ids are unique per process; clones of a point share its id. Deserializing
/// an id moves the allocator past it so later points never reuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PointId(u64);

impl<'de> Deserialize<'de> for PointId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(deserializer)?;
        NEXT_POINT_ID.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Ok(Self(raw))
    }
}

impl PointId {
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_POINT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// One sample of a series.
///
/// Points are immutable; changing a value means replacing the owning series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default = "PointId::next")]
    id: PointId,
    value: f64,
    #[serde(default)]
    x_label: Option<String>,
    #[serde(default)]
    point_label: Option<String>,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
}

impl DataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            id: PointId::next(),
            value,
            x_label: None,
            point_label: None,
            date: None,
        }
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?))
    }

    /// Like [`DataPoint::new`] but rejects NaN and infinities up front.
    pub fn try_new(value: f64) -> ChartResult<Self> {
        Ok(Self::new(ensure_finite(value, "value")?))
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_point_label(mut self, label: impl Into<String>) -> Self {
        self.point_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn id(&self) -> PointId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    #[must_use]
    pub fn point_label(&self) -> Option<&str> {
        self.point_label.as_deref()
    }

    #[must_use]
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

/// Canvas dimensions in pixels, as reported by the host layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Point position in canvas space; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelLocation {
    pub x: f64,
    pub y: f64,
}

impl PixelLocation {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
