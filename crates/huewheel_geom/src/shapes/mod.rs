//! Picker shapes.
//!
//! Each shape wraps a [`LayoutConfig`] and answers the two inverse questions
//! of a color picker: where the handle sits for a color, and which channels a
//! pointer position selects. Dimensions are recomputed on every call.

mod hue_ring;
mod saturation_box;
mod triangle;
mod triangle_wheel;
mod wheel;

pub use hue_ring::{HueRing, RingDimensions};
pub use saturation_box::{BoxDimensions, Margin, MarginSide, SaturationBox};
pub use triangle::{ROTATION_PIVOT_CORRECTION, Triangle, TriangleDimensions};
pub use triangle_wheel::{TriangleWheel, TriangleWheelDimensions};
pub use wheel::{Wheel, WheelDimensions};

use crate::color::{ColorInput, ColorSource};
use crate::config::LayoutConfig;
use crate::point::Point;

/// Forward and inverse mapping between colors and positions for one shape.
pub trait PickerShape {
    /// Geometry derived from the layout configuration.
    type Dimensions;

    /// The layout this shape was built from.
    fn layout(&self) -> &LayoutConfig;

    /// Compute the shape's geometry.
    fn dimensions(&self) -> Self::Dimensions;

    /// Position of the drag handle for `color`, in local pixel space.
    fn handle_position(&self, color: &impl ColorSource) -> Point;

    /// Channels selected by a pointer at `(x, y)` in local pixel space.
    fn value_from_input(&self, x: f64, y: f64) -> ColorInput;
}
