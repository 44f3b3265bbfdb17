//! Standalone saturation/value triangle.
//!
//! The triangle is inscribed in a square of side `width`: the pure hue sits
//! at the top apex, white at the bottom-left corner and black at the
//! bottom-right corner. Saturation and value map onto it through a closed
//! form, so no explicit barycentric conversion is needed.

use serde::Serialize;

use super::PickerShape;
use crate::color::{ColorInput, ColorSource};
use crate::config::LayoutConfig;
use crate::numeric::{clamp_percent, round_half_up};
use crate::point::Point;

/// Offset applied to the rotation pivot when de-rotating pointer input,
/// scaled by `sin * cos` of the rotation.
///
/// This is an empirically tuned correction that lines the pivot up with the
/// triangle's visual centroid. The handle placement has no matching term,
/// so for rotations that are not a multiple of 90 degrees the two maps can
/// disagree by a few pixels.
pub const ROTATION_PIVOT_CORRECTION: f64 = 15.0;

/// Relative size below which the saturation denominator counts as zero.
const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// Geometry of a standalone triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleDimensions {
    pub width: f64,
    pub height: f64,
    /// Radius of any circular border decoration
    pub radius: f64,
    /// Top-center (pure hue), bottom-left (white), bottom-right (black)
    pub triangle_points: [Point; 3],
    pub cx: f64,
    pub cy: f64,
    pub border_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    layout: LayoutConfig,
}

impl Triangle {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Undo the configured rotation of the triangle for a pointer sample.
    fn derotate(&self, dims: &TriangleDimensions, x: f64, y: f64) -> Point {
        let Some(rotation) = self.layout.resolved_rotation() else {
            return Point::new(x, y);
        };

        let (sin, cos) = (-rotation.to_radians()).sin_cos();
        let correction = sin * cos * ROTATION_PIVOT_CORRECTION;
        let xc = x - dims.cx - correction;
        let yc = y - dims.cy - correction;

        Point::new(
            xc * cos - yc * sin + dims.cx,
            xc * sin + yc * cos + dims.cy,
        )
    }
}

impl PickerShape for Triangle {
    type Dimensions = TriangleDimensions;

    fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    fn dimensions(&self) -> TriangleDimensions {
        let width = self.layout.width;
        let rad = width / 2.0;
        let height = width * 3f64.sqrt() / 2.0;

        TriangleDimensions {
            width,
            height,
            radius: rad - self.layout.border_width,
            triangle_points: [
                Point::new(rad, 0.0),
                Point::new(0.0, height),
                Point::new(width, height),
            ],
            cx: rad,
            cy: rad,
            border_width: self.layout.border_width,
        }
    }

    fn handle_position(&self, color: &impl ColorSource) -> Point {
        let TriangleDimensions { width, height, .. } = self.dimensions();
        let hsv = color.hsv();
        Point::new(
            width * (1.0 + hsv.v * (hsv.s - 200.0) / 20000.0),
            height * (1.0 - hsv.s * hsv.v / 10000.0),
        )
    }

    fn value_from_input(&self, x: f64, y: f64) -> ColorInput {
        let dims = self.dimensions();
        let Point { x, y } = self.derotate(&dims, x, y);
        let (w, h) = (dims.width, dims.height);

        let denominator = 3.0 * h * w - 2.0 * h * x - w * y;
        let s = if denominator.abs() <= DEGENERATE_TOLERANCE * h * w {
            // Black corner: saturation is undefined there
            log::trace!("Triangle input on the black corner ({x}, {y}), saturation set to 0");
            0.0
        } else {
            200.0 * w * (h - y) / denominator
        };
        let v = 50.0 * (3.0 - y / h - 2.0 * x / w);

        ColorInput::saturation_value(
            clamp_percent(round_half_up(s)),
            clamp_percent(round_half_up(v)),
        )
    }
}
