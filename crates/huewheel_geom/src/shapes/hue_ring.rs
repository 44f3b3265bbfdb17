//! Hue ring: a circular band where hue is the angle around the center.

use serde::Serialize;

use super::PickerShape;
use crate::angle;
use crate::color::{ColorInput, ColorSource};
use crate::config::LayoutConfig;
use crate::point::Point;

/// Geometry of a hue ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingDimensions {
    pub width: f64,
    /// Outer radius, inside the border
    pub radius: f64,
    /// Thickness of the colored band
    pub ring_width: f64,
    pub cx: f64,
    pub cy: f64,
    pub border_width: f64,
}

impl RingDimensions {
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Distance from the center to the middle of the band, where the handle rides.
    pub fn handle_distance(&self) -> f64 {
        self.radius - self.ring_width / 2.0
    }
}

/// A hue-only ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRing {
    layout: LayoutConfig,
}

impl HueRing {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// True if `(x, y)` lies on the colored band.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dims = self.dimensions();
        let dist = Point::new(x, y).distance_to(dims.center());
        dist <= dims.radius && dist >= dims.radius - dims.ring_width
    }
}

impl PickerShape for HueRing {
    type Dimensions = RingDimensions;

    fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    fn dimensions(&self) -> RingDimensions {
        let rad = self.layout.width / 2.0;
        RingDimensions {
            width: self.layout.width,
            radius: rad - self.layout.border_width,
            ring_width: self.layout.resolved_ring_width(),
            cx: rad,
            cy: rad,
            border_width: self.layout.border_width,
        }
    }

    fn handle_position(&self, color: &impl ColorSource) -> Point {
        let dims = self.dimensions();
        angle::point_on_wheel(
            &self.layout,
            dims.center(),
            dims.handle_distance(),
            color.hsv().h,
        )
    }

    fn value_from_input(&self, x: f64, y: f64) -> ColorInput {
        let dims = self.dimensions();
        ColorInput::hue(angle::hue_at(&self.layout, dims.center(), x, y))
    }
}
