//! Color channels as seen by the geometry core.
//!
//! The core never owns a color. It reads HSV channels through [`ColorSource`]
//! and hands back a [`ColorInput`] holding only the channels a shape can
//! determine from a pointer position.

use serde::{Deserialize, Serialize};

/// HSV channels: hue in degrees `[0, 360)`, saturation and value in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV triple.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Read-only access to the channels of a host-owned color value.
///
/// Implement this for whatever color type the host application stores; the
/// core only ever calls these accessors.
pub trait ColorSource {
    /// Current HSV channels.
    fn hsv(&self) -> Hsv;

    /// Hue channel in degrees.
    fn hue(&self) -> f64 {
        self.hsv().h
    }
}

impl ColorSource for Hsv {
    fn hsv(&self) -> Hsv {
        *self
    }
}

impl<T: ColorSource + ?Sized> ColorSource for &T {
    fn hsv(&self) -> Hsv {
        (**self).hsv()
    }

    fn hue(&self) -> f64 {
        (**self).hue()
    }
}

/// The subset of HSV channels produced by a pointer sample.
///
/// A hue ring only fills `h`, a box only `s` and `v`. The host merges the
/// result into its authoritative color with [`ColorInput::apply_to`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<f64>,
}

impl ColorInput {
    /// Input carrying only a hue.
    pub fn hue(h: f64) -> Self {
        Self {
            h: Some(h),
            ..Self::default()
        }
    }

    /// Input carrying hue and saturation.
    pub fn hue_saturation(h: f64, s: f64) -> Self {
        Self {
            h: Some(h),
            s: Some(s),
            v: None,
        }
    }

    /// Input carrying saturation and value.
    pub fn saturation_value(s: f64, v: f64) -> Self {
        Self {
            h: None,
            s: Some(s),
            v: Some(v),
        }
    }

    /// True if no channel is set.
    pub fn is_empty(&self) -> bool {
        self.h.is_none() && self.s.is_none() && self.v.is_none()
    }

    /// Overwrite the channels present in this input, keeping the rest of `color`.
    pub fn apply_to(&self, color: Hsv) -> Hsv {
        Hsv {
            h: self.h.unwrap_or(color.h),
            s: self.s.unwrap_or(color.s),
            v: self.v.unwrap_or(color.v),
        }
    }
}
