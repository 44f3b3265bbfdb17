//! Picker facade dispatching over the available shapes.
//!
//! A host widget keeps one [`Picker`] per shape on screen and calls it for
//! every color change and pointer sample.

use std::fmt;

use huewheel_geom::{
    ColorInput, ColorSource, Gradients, Hsv, HueRing, LayoutConfig, PickerShape, Point,
    SaturationBox, Triangle, TriangleWheel, Wheel, gradient_stops,
};
use serde::{Deserialize, Serialize};

/// The shapes a picker can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Hue-only ring
    #[default]
    Ring,
    /// Hue/saturation disc
    Wheel,
    /// Hue ring around an inscribed triangle
    TriangleWheel,
    /// Saturation/value triangle
    Triangle,
    /// Saturation/value box
    Box,
}

impl ShapeKind {
    /// Get the display name for this shape.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Ring => "Hue ring",
            ShapeKind::Wheel => "Wheel",
            ShapeKind::TriangleWheel => "Triangle wheel",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Box => "Box",
        }
    }

    /// Get all shapes.
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Ring,
            ShapeKind::Wheel,
            ShapeKind::TriangleWheel,
            ShapeKind::Triangle,
            ShapeKind::Box,
        ]
    }

    /// Whether this shape is painted with saturation/value gradients.
    pub fn has_gradients(&self) -> bool {
        matches!(self, ShapeKind::Triangle | ShapeKind::Box)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single picker shape bound to its layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Picker {
    kind: ShapeKind,
    layout: LayoutConfig,
}

impl Picker {
    /// Create a picker of the given shape.
    pub fn new(kind: ShapeKind, layout: LayoutConfig) -> Self {
        log::debug!(
            "Picker: {} width={} direction={} angle={}",
            kind,
            layout.width,
            layout.wheel_direction,
            layout.wheel_angle
        );
        Self { kind, layout }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Replace the layout (e.g. after a resize).
    pub fn set_layout(&mut self, layout: LayoutConfig) {
        log::debug!("Picker: {} relayout, width={}", self.kind, layout.width);
        self.layout = layout;
    }

    /// Handle position for `color`, in the shape's local pixel space.
    pub fn handle_position(&self, color: &impl ColorSource) -> Point {
        match self.kind {
            ShapeKind::Ring => HueRing::new(self.layout).handle_position(color),
            ShapeKind::Wheel => Wheel::new(self.layout).handle_position(color),
            ShapeKind::TriangleWheel => TriangleWheel::new(self.layout).handle_position(color),
            ShapeKind::Triangle => Triangle::new(self.layout).handle_position(color),
            ShapeKind::Box => SaturationBox::new(self.layout).handle_position(color),
        }
    }

    /// Channels selected by a pointer at `(x, y)`, where `origin` is the
    /// shape element's top-left corner in the same coordinate space.
    pub fn input(&self, x: f64, y: f64, origin: Point) -> ColorInput {
        let local = Point::new(x, y).relative_to(origin);
        let input = match self.kind {
            ShapeKind::Ring => HueRing::new(self.layout).value_from_input(local.x, local.y),
            ShapeKind::Wheel => Wheel::new(self.layout).value_from_input(local.x, local.y),
            ShapeKind::TriangleWheel => {
                TriangleWheel::new(self.layout).value_from_input(local.x, local.y)
            }
            ShapeKind::Triangle => Triangle::new(self.layout).value_from_input(local.x, local.y),
            ShapeKind::Box => SaturationBox::new(self.layout).value_from_bounds_input(x, y, origin),
        };
        log::trace!(
            "Picker: {} input ({}, {}) -> {:?}",
            self.kind,
            local.x,
            local.y,
            input
        );
        input
    }

    /// Merge a pointer sample into `current`.
    pub fn apply_input(&self, current: Hsv, x: f64, y: f64, origin: Point) -> Hsv {
        self.input(x, y, origin).apply_to(current)
    }

    /// Gradient stops for the box and triangle; `None` for the hue shapes.
    pub fn gradients(&self, color: &impl ColorSource) -> Option<Gradients> {
        self.kind.has_gradients().then(|| gradient_stops(color))
    }
}
