//! Front-end surface: the handful of calls a renderer or editor needs.
//!
//! Thin aliases over the module functions; all of them are pure.

use nalgebra::Vector2;

use crate::model::{Door, Furniture, RoomDimensions};

pub use crate::analysis::{analyze_layout, AnalysisCfg, SpaceAnalysis};
pub use crate::geom::{point_in_polygon, polygons_intersect};

/// Rotated outline of a piece (4, 16, 6 or `custom_path.len()` points).
#[inline]
pub fn outline(furniture: &Furniture) -> Vec<Vector2<f64>> {
    crate::outline::furniture_outline(furniture)
}

/// Sampled swing arc of a door.
#[inline]
pub fn door_swing_path(door: &Door, dims: &RoomDimensions) -> Vec<Vector2<f64>> {
    crate::door::door_swing_path(door, dims)
}

#[inline]
pub fn door_furniture_interferes(door: &Door, furniture: &Furniture, dims: &RoomDimensions) -> bool {
    crate::analysis::door_furniture_interference(door, furniture, dims)
}

#[inline]
pub fn furniture_furniture_collides(a: &Furniture, b: &Furniture) -> bool {
    crate::analysis::furniture_collision(a, b)
}

/// Footprint coverage of the floor, percent in `[0, 100]`.
#[inline]
pub fn space_efficiency(furniture: &[Furniture], dims: &RoomDimensions) -> f64 {
    crate::analysis::space_efficiency(furniture, dims)
}
