//! Conic hue wheel with an inscribed equilateral triangle.
//!
//! The outer ring selects hue; the triangle itself is painted from the
//! vertices computed here and driven by [`Triangle`](super::Triangle).

use serde::Serialize;

use super::PickerShape;
use crate::angle;
use crate::color::{ColorInput, ColorSource};
use crate::config::LayoutConfig;
use crate::point::Point;

/// Geometry of the combined wheel and triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleWheelDimensions {
    pub width: f64,
    pub radius: f64,
    /// Circumradius of the inscribed triangle
    pub triangle_radius: f64,
    /// Apex, bottom-left, bottom-right
    pub triangle_points: [Point; 3],
    pub cx: f64,
    pub cy: f64,
}

impl TriangleWheelDimensions {
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleWheel {
    layout: LayoutConfig,
}

impl TriangleWheel {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// True if `(x, y)` lies on the hue ring outside the triangle's circumcircle.
    pub fn ring_contains(&self, x: f64, y: f64) -> bool {
        let dims = self.dimensions();
        let dist = Point::new(x, y).distance_to(dims.center());
        dist <= dims.radius && dist >= dims.triangle_radius
    }
}

impl PickerShape for TriangleWheel {
    type Dimensions = TriangleWheelDimensions;

    fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    fn dimensions(&self) -> TriangleWheelDimensions {
        let rad = self.layout.width / 2.0;
        let triangle_radius = rad * 7.0 / 8.0;
        let triangle_height = triangle_radius * 3.0 / 2.0;
        let edge = triangle_radius * 3.0 / 3f64.sqrt();
        let top = rad / 8.0;

        TriangleWheelDimensions {
            width: self.layout.width,
            radius: rad - self.layout.border_width,
            triangle_radius,
            triangle_points: [
                Point::new(rad, top),
                Point::new(rad - edge / 2.0, top + triangle_height),
                Point::new(rad + edge / 2.0, top + triangle_height),
            ],
            cx: rad,
            cy: rad,
        }
    }

    fn handle_position(&self, color: &impl ColorSource) -> Point {
        let dims = self.dimensions();
        angle::point_on_wheel(
            &self.layout,
            dims.center(),
            dims.radius - self.layout.padding,
            color.hsv().h,
        )
    }

    fn value_from_input(&self, x: f64, y: f64) -> ColorInput {
        let dims = self.dimensions();
        ColorInput::hue(angle::hue_at(&self.layout, dims.center(), x, y))
    }
}
