use nalgebra::{Matrix2, Vector2};

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Rotate `p` about `center` by `angle_deg` degrees.
///
/// `x' = cx + dx·cosθ − dy·sinθ`, `y' = cy + dx·sinθ + dy·cosθ`; with Y down
/// this turns clockwise on screen for positive angles.
pub fn rotate_point(p: Vector2<f64>, center: Vector2<f64>, angle_deg: f64) -> Vector2<f64> {
    let (sin, cos) = degrees_to_radians(angle_deg).sin_cos();
    let r = Matrix2::new(cos, -sin, sin, cos);
    center + r * (p - center)
}
