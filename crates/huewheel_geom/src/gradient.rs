//! Gradient stops for the saturation/value shapes.

use serde::Serialize;

use crate::color::ColorSource;

/// CSS color for the start of the saturation gradient.
pub const WHITE: &str = "#fff";
/// CSS color for the start of the value gradient.
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
/// CSS color for the end of the value gradient.
pub const BLACK: &str = "#000";

/// One stop of a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient, in percent
    pub offset: f64,
    /// CSS color string
    pub color: String,
}

impl GradientStop {
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// The two gradients layered to paint a box or triangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradients {
    /// White to the fully saturated hue
    pub saturation: Vec<GradientStop>,
    /// Transparent to black, painted over the saturation gradient
    pub value: Vec<GradientStop>,
}

/// CSS color of the fully saturated, mid-lightness hue.
pub fn hue_css(hue: f64) -> String {
    format!("hsl({hue},100%,50%)")
}

/// Gradient stops for the current hue of `color`.
pub fn gradient_stops(color: &impl ColorSource) -> Gradients {
    Gradients {
        saturation: vec![
            GradientStop::new(0.0, WHITE),
            GradientStop::new(100.0, hue_css(color.hue())),
        ],
        value: vec![
            GradientStop::new(0.0, TRANSPARENT),
            GradientStop::new(100.0, BLACK),
        ],
    }
}
