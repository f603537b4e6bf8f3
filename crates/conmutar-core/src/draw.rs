//! Draw commands recorded during painting.
//!
//! All rendering reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines and lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only a fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only a stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A rectangle, optionally rounded
    Rect {
        /// Bounds of the rectangle
        bounds: Rect,
        /// Corner radii
        radius: CornerRadius,
        /// Fill and stroke
        style: BoxStyle,
    },
    /// A circle
    Circle {
        /// Center point
        center: Point,
        /// Radius in pixels
        radius: f32,
        /// Fill and stroke
        style: BoxStyle,
    },
    /// A text run
    Text {
        /// Text content
        content: String,
        /// Baseline-left position
        position: Point,
        /// Font and color
        style: TextStyle,
    },
    /// A polyline
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },
}

impl DrawCommand {
    /// A filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// A filled rectangle with a uniform corner radius.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }
}
