//! huewheel_geom - geometry of color-picker shapes
//!
//! Maps colors to handle positions and pointer positions back to color
//! channels for a hue ring, a hue/saturation wheel, a wheel with an inscribed
//! triangle, a standalone triangle and a saturation/value box. Everything
//! here is a pure function of a [`LayoutConfig`] and its arguments.

pub mod angle;
pub mod color;
pub mod config;
pub mod error;
pub mod gradient;
pub mod numeric;
pub mod point;
pub mod shapes;
pub mod svg;

#[cfg(test)]
mod tests;

pub use angle::{Translation, translate};
pub use color::{ColorInput, ColorSource, Hsv};
pub use config::{LayoutConfig, LayoutDirection, WheelDirection};
pub use error::{GeometryError, Result};
pub use gradient::{GradientStop, Gradients, gradient_stops};
pub use point::Point;
pub use shapes::{
    BoxDimensions, HueRing, PickerShape, RingDimensions, SaturationBox, Triangle,
    TriangleDimensions, TriangleWheel, TriangleWheelDimensions, Wheel, WheelDimensions,
};
