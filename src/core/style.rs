use serde::{Deserialize, Serialize};

use crate::core::primitives::ensure_unit_interval;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// The core never interprets colors; it only carries them to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            ensure_unit_interval(value, &format!("color channel `{channel}`"))?;
        }
        Ok(())
    }
}

/// Unit-square anchor used for gradient start/end points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientAnchor {
    Top,
    Bottom,
    Leading,
    Trailing,
    TopLeading,
    TopTrailing,
    BottomLeading,
    BottomTrailing,
    Center,
}

impl GradientAnchor {
    /// Normalized `(x, y)` in the unit square, y growing downward.
    #[must_use]
    pub fn unit_point(self) -> (f64, f64) {
        match self {
            Self::Top => (0.5, 0.0),
            Self::Bottom => (0.5, 1.0),
            Self::Leading => (0.0, 0.5),
            Self::Trailing => (1.0, 0.5),
            Self::TopLeading => (0.0, 0.0),
            Self::TopTrailing => (1.0, 0.0),
            Self::BottomLeading => (0.0, 1.0),
            Self::BottomTrailing => (1.0, 1.0),
            Self::Center => (0.5, 0.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    /// Location along the gradient axis in `[0, 1]`.
    pub position: f64,
}

impl GradientStop {
    #[must_use]
    pub const fn new(color: Color, position: f64) -> Self {
        Self { color, position }
    }

    pub fn validate(self) -> ChartResult<()> {
        self.color.validate()?;
        ensure_unit_interval(self.position, "gradient stop position")?;
        Ok(())
    }
}

/// Fill/stroke style of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleVariant {
    Solid {
        color: Color,
    },
    LinearGradient {
        colors: Vec<Color>,
        start: GradientAnchor,
        end: GradientAnchor,
    },
    GradientStops {
        stops: Vec<GradientStop>,
        start: GradientAnchor,
        end: GradientAnchor,
    },
}

impl StyleVariant {
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    #[must_use]
    pub fn linear_gradient(
        colors: Vec<Color>,
        start: GradientAnchor,
        end: GradientAnchor,
    ) -> Self {
        Self::LinearGradient { colors, start, end }
    }

    #[must_use]
    pub fn gradient_stops(
        stops: Vec<GradientStop>,
        start: GradientAnchor,
        end: GradientAnchor,
    ) -> Self {
        Self::GradientStops { stops, start, end }
    }

    /// Checks color channels, stop positions, and that gradients are non-empty.
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Solid { color } => color.validate(),
            Self::LinearGradient { colors, .. } => {
                if colors.is_empty() {
                    return Err(ChartError::InvalidData(
                        "linear gradient requires at least one color".to_owned(),
                    ));
                }
                colors.iter().try_for_each(|color| color.validate())
            }
            Self::GradientStops { stops, .. } => {
                if stops.is_empty() {
                    return Err(ChartError::InvalidData(
                        "gradient requires at least one stop".to_owned(),
                    ));
                }
                stops.iter().try_for_each(|stop| stop.validate())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Stroke description handed to the renderer for legend swatches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: 3.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, GradientAnchor, GradientStop, StyleVariant};

    #[test]
    fn empty_gradients_are_rejected() {
        let colors = StyleVariant::linear_gradient(
            Vec::new(),
            GradientAnchor::Bottom,
            GradientAnchor::Top,
        );
        assert!(colors.validate().is_err());

        let stops =
            StyleVariant::gradient_stops(Vec::new(), GradientAnchor::Bottom, GradientAnchor::Top);
        assert!(stops.validate().is_err());
    }

    #[test]
    fn stop_position_outside_unit_interval_is_rejected() {
        let style = StyleVariant::gradient_stops(
            vec![GradientStop::new(Color::rgb(1.0, 0.0, 0.0), 1.5)],
            GradientAnchor::Leading,
            GradientAnchor::Trailing,
        );
        assert!(style.validate().is_err());
    }

    #[test]
    fn anchors_map_onto_unit_square() {
        assert_eq!(GradientAnchor::Leading.unit_point(), (0.0, 0.5));
        assert_eq!(GradientAnchor::Trailing.unit_point(), (1.0, 0.5));
        assert_eq!(GradientAnchor::BottomTrailing.unit_point(), (1.0, 1.0));
    }
}
