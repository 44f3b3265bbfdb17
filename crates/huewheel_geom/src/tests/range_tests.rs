//! Pointer samples anywhere on (or far off) a shape stay inside channel ranges.

use crate::color::ColorInput;
use crate::config::{LayoutConfig, WheelDirection};
use crate::shapes::{HueRing, PickerShape, SaturationBox, Triangle, TriangleWheel, Wheel};

/// Grid of pointer samples reaching well outside a 200px shape.
fn samples() -> impl Iterator<Item = (f64, f64)> {
    let coords = [-1e5, -400.0, -1.0, 0.0, 33.3, 100.0, 150.5, 199.0, 200.0, 201.0, 777.0, 1e5];
    coords
        .into_iter()
        .flat_map(move |x| coords.into_iter().map(move |y| (x, y)))
}

fn assert_in_range(input: ColorInput) {
    if let Some(h) = input.h {
        assert!((0.0..360.0).contains(&h), "h = {h}");
    }
    for channel in [input.s, input.v].into_iter().flatten() {
        assert!((0.0..=100.0).contains(&channel), "channel = {channel}");
    }
}

#[test]
fn test_all_shapes_stay_in_range() {
    for direction in [WheelDirection::Clockwise, WheelDirection::Anticlockwise] {
        let layout = LayoutConfig::new(200.0)
            .wheel_angle(-130.0)
            .wheel_direction(direction)
            .rotation(30.0);
        for (x, y) in samples() {
            assert_in_range(HueRing::new(layout).value_from_input(x, y));
            assert_in_range(Wheel::new(layout).value_from_input(x, y));
            assert_in_range(TriangleWheel::new(layout).value_from_input(x, y));
            assert_in_range(Triangle::new(layout).value_from_input(x, y));
            assert_in_range(SaturationBox::new(layout).value_from_input(x, y));
        }
    }
}

#[test]
fn test_shape_channels() {
    let layout = LayoutConfig::default();
    let ring = HueRing::new(layout).value_from_input(10.0, 20.0);
    assert!(ring.h.is_some() && ring.s.is_none() && ring.v.is_none());

    let wheel = Wheel::new(layout).value_from_input(10.0, 20.0);
    assert!(wheel.h.is_some() && wheel.s.is_some() && wheel.v.is_none());

    let triangle = Triangle::new(layout).value_from_input(10.0, 20.0);
    assert!(triangle.h.is_none() && triangle.s.is_some() && triangle.v.is_some());

    let saturation_box = SaturationBox::new(layout).value_from_input(10.0, 20.0);
    assert!(saturation_box.h.is_none() && saturation_box.s.is_some());
}

#[test]
fn test_center_samples_are_finite() {
    let layout = LayoutConfig::new(120.0);
    let center = 60.0;
    for input in [
        HueRing::new(layout).value_from_input(center, center),
        Wheel::new(layout).value_from_input(center, center),
        TriangleWheel::new(layout).value_from_input(center, center),
        Triangle::new(layout).value_from_input(center, center),
        SaturationBox::new(layout).value_from_input(center, center),
    ] {
        for channel in [input.h, input.s, input.v].into_iter().flatten() {
            assert!(channel.is_finite());
        }
        assert_in_range(input);
    }
}
