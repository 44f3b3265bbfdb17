//! Layout configuration shared by every picker shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// Which way increasing hue travels around a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WheelDirection {
    Clockwise,
    #[default]
    Anticlockwise,
}

impl WheelDirection {
    /// Multiplier applied to handle offsets: -1 for clockwise, +1 otherwise.
    pub fn sign(self) -> f64 {
        match self {
            WheelDirection::Clockwise => -1.0,
            WheelDirection::Anticlockwise => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WheelDirection::Clockwise => "clockwise",
            WheelDirection::Anticlockwise => "anticlockwise",
        }
    }
}

impl FromStr for WheelDirection {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clockwise" => Ok(WheelDirection::Clockwise),
            "anticlockwise" => Ok(WheelDirection::Anticlockwise),
            _ => Err(GeometryError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for WheelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the picker stacks its components vertically or horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    Horizontal,
    #[default]
    Vertical,
}

impl FromStr for LayoutDirection {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(LayoutDirection::Horizontal),
            "vertical" => Ok(LayoutDirection::Vertical),
            _ => Err(GeometryError::UnknownLayout(s.to_string())),
        }
    }
}

/// Per-render layout configuration.
///
/// Every field has a default, so a partial JSON object deserializes into a
/// complete configuration. `ring_width` and `rotation` are optional: an
/// absent (or zero) ring width is derived from padding, handle radius and
/// border width, and an absent (or zero) rotation means the triangle is
/// upright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Overall pixel width of the shape
    pub width: f64,
    /// Width of the border drawn around the shape
    pub border_width: f64,
    /// Space between the shape edge and the handle's travel range
    pub padding: f64,
    /// Radius of the drag handle
    pub handle_radius: f64,
    /// Gap between stacked picker components
    pub slider_margin: f64,
    pub layout_direction: LayoutDirection,
    /// Rotation offset of angle 0, in degrees
    pub wheel_angle: f64,
    pub wheel_direction: WheelDirection,
    /// Hue ring thickness
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_width: Option<f64>,
    /// Triangle rotation in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            border_width: 0.0,
            padding: 6.0,
            handle_radius: 8.0,
            slider_margin: 12.0,
            layout_direction: LayoutDirection::default(),
            wheel_angle: 0.0,
            wheel_direction: WheelDirection::default(),
            ring_width: None,
            rotation: None,
        }
    }
}

impl LayoutConfig {
    /// Default configuration with the given overall width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn border_width(mut self, border_width: f64) -> Self {
        self.border_width = border_width;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn handle_radius(mut self, handle_radius: f64) -> Self {
        self.handle_radius = handle_radius;
        self
    }

    pub fn slider_margin(mut self, slider_margin: f64) -> Self {
        self.slider_margin = slider_margin;
        self
    }

    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    pub fn wheel_angle(mut self, degrees: f64) -> Self {
        self.wheel_angle = degrees;
        self
    }

    pub fn wheel_direction(mut self, direction: WheelDirection) -> Self {
        self.wheel_direction = direction;
        self
    }

    pub fn ring_width(mut self, ring_width: f64) -> Self {
        self.ring_width = Some(ring_width);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Ring thickness, falling back to `2 * (padding + handle_radius + border_width)`.
    pub fn resolved_ring_width(&self) -> f64 {
        match self.ring_width {
            Some(w) if w != 0.0 => w,
            _ => (self.padding + self.handle_radius + self.border_width) * 2.0,
        }
    }

    /// Triangle rotation in degrees, `None` when the triangle is upright.
    pub fn resolved_rotation(&self) -> Option<f64> {
        self.rotation.filter(|r| *r != 0.0)
    }

    /// Check that the configuration describes a drawable shape.
    ///
    /// The transforms do not call this; degenerate layouts simply produce
    /// degenerate geometry. Hosts loading configuration from outside can use
    /// it to reject such layouts up front.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("width", self.width),
            ("borderWidth", self.border_width),
            ("padding", self.padding),
            ("handleRadius", self.handle_radius),
            ("sliderMargin", self.slider_margin),
            ("wheelAngle", self.wheel_angle),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field });
            }
        }
        if let Some(w) = self.ring_width {
            if !w.is_finite() {
                return Err(GeometryError::NonFinite { field: "ringWidth" });
            }
        }
        if let Some(r) = self.rotation {
            if !r.is_finite() {
                return Err(GeometryError::NonFinite { field: "rotation" });
            }
        }

        if self.width <= 0.0 {
            return Err(GeometryError::Degenerate {
                field: "width",
                value: self.width,
            });
        }

        let radius = self.width / 2.0 - self.border_width;
        if radius <= 0.0 {
            return Err(GeometryError::Degenerate {
                field: "radius",
                value: radius,
            });
        }

        let handle_range = self.width - 2.0 * (self.padding + self.handle_radius);
        if handle_range <= 0.0 {
            return Err(GeometryError::Degenerate {
                field: "handle range",
                value: handle_range,
            });
        }

        Ok(())
    }
}
