//! huewheel - color picker shapes
//!
//! Host-facing layer over `huewheel_geom`: a picker facade that dispatches
//! over the available shapes, and a versioned JSON configuration file.

mod config;
mod picker;

pub use config::{CONFIG_VERSION, ConfigError, LogLevel, PickerConfig};
pub use picker::{Picker, ShapeKind};

// Re-export the geometry types hosts work with
pub use huewheel_geom::{
    ColorInput, ColorSource, GradientStop, Gradients, Hsv, LayoutConfig, LayoutDirection, Point,
    WheelDirection,
};
