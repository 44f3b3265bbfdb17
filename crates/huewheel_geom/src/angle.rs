//! Wheel angle translation.
//!
//! Every angular shape maps hue to screen angle and back through
//! [`translate`], so `wheelAngle` and `wheelDirection` are interpreted in
//! exactly one place. Angles cross this boundary in degrees; the helpers
//! that feed trigonometry hand out radians.

use crate::config::{LayoutConfig, WheelDirection};
use crate::numeric::{round_half_up, wrap_degrees};
use crate::point::Point;

/// Direction of an angle translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// Screen angle to hue (used by pointer input).
    Forward,
    /// Hue to screen angle (used to place handles).
    Inverse,
}

/// Translate an angle in degrees according to the configured wheel angle and
/// direction. The result is always in `[0, 360)`.
///
/// - Forward, clockwise: `360 - (wheelAngle - angle)`
/// - Inverse, anticlockwise: `180 - (wheelAngle - angle)`
/// - otherwise: `wheelAngle + angle`
pub fn translate(config: &LayoutConfig, angle: f64, mode: Translation) -> f64 {
    let wheel_angle = config.wheel_angle;
    let mirrored = matches!(
        (mode, config.wheel_direction),
        (Translation::Forward, WheelDirection::Clockwise)
            | (Translation::Inverse, WheelDirection::Anticlockwise)
    );

    let angle = if mirrored {
        let base = match mode {
            Translation::Forward => 360.0,
            Translation::Inverse => 180.0,
        };
        base - (wheel_angle - angle)
    } else {
        wheel_angle + angle
    };

    wrap_degrees(angle)
}

/// Screen angle in radians at which the handle for `hue` sits, before the
/// direction sign is applied to the offset.
pub fn handle_angle(config: &LayoutConfig, hue: f64) -> f64 {
    (180.0 + translate(config, hue, Translation::Inverse)).to_radians()
}

/// Handle position on a circle of `distance` around `center` for `hue`.
pub fn point_on_wheel(config: &LayoutConfig, center: Point, distance: f64, hue: f64) -> Point {
    let angle = handle_angle(config, hue);
    let direction = config.wheel_direction.sign();
    Point::new(
        center.x + distance * angle.cos() * direction,
        center.y + distance * angle.sin() * direction,
    )
}

/// Hue under a pointer at `(x, y)` for a wheel centered on `center`, rounded
/// to a whole degree and kept inside `[0, 360)`.
///
/// A pointer exactly on the center yields `atan2(0, 0) = 0` before translation.
pub fn hue_at(config: &LayoutConfig, center: Point, x: f64, y: f64) -> f64 {
    let dx = center.x - x;
    let dy = center.y - y;
    let screen = (-dy).atan2(-dx).to_degrees();
    let hue = translate(config, screen, Translation::Forward);
    wrap_degrees(round_half_up(hue))
}
