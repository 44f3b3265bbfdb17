//! SVG path helpers for painting circular shapes.

/// Path commands for an arc of `radius` around `(cx, cy)` between two angles
/// in degrees. The path starts at `end_angle` and sweeps back to `start_angle`.
pub fn arc_path(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let large_arc_flag = if end_angle - start_angle <= 180.0 { 0 } else { 1 };
    let (start_sin, start_cos) = start_angle.to_radians().sin_cos();
    let (end_sin, end_cos) = end_angle.to_radians().sin_cos();

    let x1 = cx + radius * end_cos;
    let y1 = cy + radius * end_sin;
    let x2 = cx + radius * start_cos;
    let y2 = cy + radius * start_sin;

    format!("M {x1} {y1} A {radius} {radius} 0 {large_arc_flag} 0 {x2} {y2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_arc() {
        assert_eq!(arc_path(0.0, 0.0, 10.0, 0.0, 0.0), "M 10 0 A 10 10 0 0 0 10 0");
    }

    #[test]
    fn test_large_arc_flag() {
        let small = arc_path(50.0, 50.0, 20.0, 0.0, 180.0);
        let large = arc_path(50.0, 50.0, 20.0, 0.0, 270.0);
        assert!(small.contains(" 0 0 0 "));
        assert!(large.contains(" 0 1 0 "));
    }

    #[test]
    fn test_starts_at_end_angle() {
        let path = arc_path(0.0, 0.0, 1.0, 0.0, 90.0);
        let coords: Vec<f64> = path
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect();
        // M x1 y1 A r r 0 flag 0 x2 y2
        assert!(coords[0].abs() < 1e-9);
        assert!((coords[1] - 1.0).abs() < 1e-9);
        assert!((coords[7] - 1.0).abs() < 1e-9);
        assert!(coords[8].abs() < 1e-9);
    }
}
