//! 2-D saturation/value box: saturation grows to the right, value upward.

use serde::Serialize;

use super::PickerShape;
use crate::color::{ColorInput, ColorSource};
use crate::config::{LayoutConfig, LayoutDirection};
use crate::numeric::clamp_percent;
use crate::point::Point;

/// Geometry of a saturation/value box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxDimensions {
    pub width: f64,
    pub height: f64,
    /// Inset of the handle's travel range from each edge
    pub radius: f64,
}

impl BoxDimensions {
    /// Offset of the handle range from the box's top-left corner.
    pub fn handle_start(&self) -> f64 {
        self.radius
    }

    pub fn handle_range_x(&self) -> f64 {
        self.width - self.radius * 2.0
    }

    pub fn handle_range_y(&self) -> f64 {
        self.height - self.radius * 2.0
    }
}

/// Which side of the box receives the slider margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarginSide {
    Left,
    Top,
}

/// Margin separating the box from the previous picker component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub side: MarginSide,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationBox {
    layout: LayoutConfig,
}

impl SaturationBox {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Channels for a pointer given relative to the page, with `origin` the
    /// box element's top-left corner on the same page.
    pub fn value_from_bounds_input(&self, x: f64, y: f64, origin: Point) -> ColorInput {
        let local = Point::new(x, y).relative_to(origin);
        self.value_from_input(local.x, local.y)
    }

    /// Margin style for the box root element.
    pub fn margin(&self) -> Margin {
        let side = match self.layout.layout_direction {
            LayoutDirection::Vertical => MarginSide::Left,
            LayoutDirection::Horizontal => MarginSide::Top,
        };
        Margin {
            side,
            amount: self.layout.slider_margin,
        }
    }
}

impl PickerShape for SaturationBox {
    type Dimensions = BoxDimensions;

    fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    fn dimensions(&self) -> BoxDimensions {
        BoxDimensions {
            width: self.layout.width,
            height: self.layout.width,
            radius: self.layout.padding + self.layout.handle_radius,
        }
    }

    fn handle_position(&self, color: &impl ColorSource) -> Point {
        let dims = self.dimensions();
        let hsv = color.hsv();
        let range_y = dims.handle_range_y();
        Point::new(
            dims.handle_start() + (hsv.s / 100.0) * dims.handle_range_x(),
            dims.handle_start() + (range_y - (hsv.v / 100.0) * range_y),
        )
    }

    fn value_from_input(&self, x: f64, y: f64) -> ColorInput {
        let dims = self.dimensions();
        let x = x - dims.handle_start();
        let y = y - dims.handle_start();
        let percent_x = x / dims.handle_range_x() * 100.0;
        let percent_y = y / dims.handle_range_y() * 100.0;
        ColorInput::saturation_value(clamp_percent(percent_x), clamp_percent(100.0 - percent_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsv;

    const EPSILON: f64 = 1e-9;

    fn box_300() -> SaturationBox {
        SaturationBox::new(LayoutConfig::new(300.0).padding(6.0).handle_radius(8.0))
    }

    #[test]
    fn test_dimensions() {
        let dims = box_300().dimensions();
        assert_eq!(dims.width, 300.0);
        assert_eq!(dims.height, 300.0);
        assert_eq!(dims.radius, 14.0);
        assert_eq!(dims.handle_range_x(), 272.0);
    }

    #[test]
    fn test_center_handle() {
        let p = box_300().handle_position(&Hsv::new(0.0, 50.0, 50.0));
        assert_eq!(p, Point::new(150.0, 150.0));
    }

    #[test]
    fn test_corner_handles() {
        let b = box_300();
        assert_eq!(
            b.handle_position(&Hsv::new(0.0, 0.0, 100.0)),
            Point::new(14.0, 14.0)
        );
        assert_eq!(
            b.handle_position(&Hsv::new(0.0, 100.0, 0.0)),
            Point::new(286.0, 286.0)
        );
    }

    #[test]
    fn test_input_is_continuous() {
        let input = box_300().value_from_input(14.0 + 68.0, 14.0 + 68.0);
        assert_eq!(input, ColorInput::saturation_value(25.0, 75.0));

        let input = box_300().value_from_input(15.0, 14.0);
        let s = input.s.unwrap();
        assert!(s > 0.0 && s < 1.0);
    }

    #[test]
    fn test_input_far_outside_is_clamped() {
        let b = box_300();
        for (x, y) in [(-1e6, -1e6), (1e6, 1e6), (-50.0, 900.0), (900.0, -50.0)] {
            let input = b.value_from_input(x, y);
            let (s, v) = (input.s.unwrap(), input.v.unwrap());
            assert!((0.0..=100.0).contains(&s));
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_bounds_origin_is_subtracted() {
        let b = box_300();
        let origin = Point::new(40.0, 25.0);
        let input = b.value_from_bounds_input(40.0 + 150.0, 25.0 + 150.0, origin);
        let s = input.s.unwrap();
        let v = input.v.unwrap();
        assert!((s - 50.0).abs() < EPSILON);
        assert!((v - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        let b = box_300();
        for s in [0.0, 12.5, 50.0, 99.0, 100.0] {
            for v in [0.0, 33.0, 100.0] {
                let p = b.handle_position(&Hsv::new(200.0, s, v));
                let input = b.value_from_input(p.x, p.y);
                assert!((input.s.unwrap() - s).abs() < EPSILON);
                assert!((input.v.unwrap() - v).abs() < EPSILON);
                assert!(input.h.is_none());
            }
        }
    }

    #[test]
    fn test_margin_side() {
        let vertical = SaturationBox::new(LayoutConfig::default().slider_margin(10.0));
        assert_eq!(
            vertical.margin(),
            Margin {
                side: MarginSide::Left,
                amount: 10.0
            }
        );

        let horizontal = SaturationBox::new(
            LayoutConfig::default().layout_direction(LayoutDirection::Horizontal),
        );
        assert_eq!(horizontal.margin().side, MarginSide::Top);
        assert_eq!(horizontal.margin().amount, 12.0);
    }
}
