//! Planar primitives shared by outlines, door arcs and the checks.
//!
//! Purpose
//! - Angle conversion and rotation about a center (`angle`).
//! - Containment, bounding boxes and polygon overlap (`polygon`).
//!
//! Conventions
//! - Screen coordinates: X grows right, Y grows down, so a positive angle turns
//!   clockwise on screen.
//! - Polygons are plain point slices; the closing edge last→first is implicit.

mod angle;
mod polygon;

pub use angle::{degrees_to_radians, radians_to_degrees, rotate_point};
pub use polygon::{
    bounding_box, point_in_polygon, polygons_intersect, polygons_overlap, segments_cross, Aabb,
};
