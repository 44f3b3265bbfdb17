//! Hue/saturation wheel: hue is the angle, saturation the distance from the center.

use serde::Serialize;

use super::PickerShape;
use crate::angle;
use crate::color::{ColorInput, ColorSource};
use crate::config::LayoutConfig;
use crate::numeric::round_half_up;
use crate::point::Point;

/// Geometry of a hue/saturation wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelDimensions {
    pub width: f64,
    pub radius: f64,
    pub cx: f64,
    pub cy: f64,
    /// Largest handle distance from the center (full saturation)
    pub handle_range: f64,
}

impl WheelDimensions {
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    layout: LayoutConfig,
}

impl Wheel {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// True if `(x, y)` lies inside the wheel.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dims = self.dimensions();
        Point::new(x, y).distance_to(dims.center()) <= dims.radius
    }

    /// Opacity of the black disc painted over the wheel to show value.
    pub fn lightness_overlay_opacity(&self, color: &impl ColorSource) -> f64 {
        (1.0 - color.hsv().v / 100.0).clamp(0.0, 1.0)
    }
}

impl PickerShape for Wheel {
    type Dimensions = WheelDimensions;

    fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    fn dimensions(&self) -> WheelDimensions {
        let rad = self.layout.width / 2.0;
        WheelDimensions {
            width: self.layout.width,
            radius: rad - self.layout.border_width,
            cx: rad,
            cy: rad,
            handle_range: rad
                - self.layout.padding
                - self.layout.handle_radius
                - self.layout.border_width,
        }
    }

    fn handle_position(&self, color: &impl ColorSource) -> Point {
        let dims = self.dimensions();
        let hsv = color.hsv();
        let distance = (hsv.s / 100.0) * dims.handle_range;
        angle::point_on_wheel(&self.layout, dims.center(), distance, hsv.h)
    }

    fn value_from_input(&self, x: f64, y: f64) -> ColorInput {
        let dims = self.dimensions();
        let center = dims.center();
        let hue = angle::hue_at(&self.layout, center, x, y);
        let distance = Point::new(x, y)
            .distance_to(center)
            .min(dims.handle_range);
        let saturation = round_half_up(100.0 * distance / dims.handle_range);
        ColorInput::hue_saturation(hue, saturation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsv;
    use crate::config::WheelDirection;

    #[test]
    fn test_dimensions() {
        let dims = Wheel::new(LayoutConfig::new(300.0).border_width(2.0)).dimensions();
        assert_eq!(dims.radius, 148.0);
        assert_eq!(dims.handle_range, 150.0 - 6.0 - 8.0 - 2.0);
        assert_eq!(dims.center(), Point::new(150.0, 150.0));
    }

    #[test]
    fn test_zero_saturation_sits_at_center() {
        let wheel = Wheel::new(LayoutConfig::default());
        let p = wheel.handle_position(&Hsv::new(123.0, 0.0, 100.0));
        assert!((p.x - 150.0).abs() < 1e-9);
        assert!((p.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip_hue_and_saturation() {
        for direction in [WheelDirection::Clockwise, WheelDirection::Anticlockwise] {
            let wheel = Wheel::new(
                LayoutConfig::default()
                    .wheel_angle(-90.0)
                    .wheel_direction(direction),
            );
            for h in [0.0, 45.0, 180.0, 271.0] {
                for s in [20.0, 50.0, 100.0] {
                    let p = wheel.handle_position(&Hsv::new(h, s, 100.0));
                    let input = wheel.value_from_input(p.x, p.y);
                    let back_h = input.h.unwrap();
                    assert!((back_h - h).abs() <= 1.0 || (back_h - h).abs() >= 359.0);
                    assert!((input.s.unwrap() - s).abs() <= 1.0);
                    assert!(input.v.is_none());
                }
            }
        }
    }

    #[test]
    fn test_saturation_capped_outside_range() {
        let wheel = Wheel::new(LayoutConfig::default());
        let input = wheel.value_from_input(-500.0, 150.0);
        assert_eq!(input.s, Some(100.0));
    }

    #[test]
    fn test_contains_and_overlay() {
        let wheel = Wheel::new(LayoutConfig::default());
        assert!(wheel.contains(150.0, 10.0));
        assert!(!wheel.contains(5.0, 5.0));
        assert_eq!(wheel.lightness_overlay_opacity(&Hsv::new(0.0, 0.0, 25.0)), 0.75);
        assert_eq!(wheel.lightness_overlay_opacity(&Hsv::new(0.0, 0.0, 140.0)), 0.0);
    }
}
