//! Furniture outlines in room coordinates.
//!
//! Every shape rotates about the center of its unrotated `width × depth` box.
//!
//! - rectangle: the 4 box corners.
//! - circle: `CIRCLE_SAMPLES` points on radius `max(width, depth)/2`.
//!   Rotation is skipped since it only shifts the sample phase.
//! - l-shape: the box with its top-right notch removed; the notch spans the
//!   last `(1 − L_SHAPE_RATIO)` of the width and the first
//!   `(1 − L_SHAPE_RATIO)` of the depth.
//! - custom: `custom_path` translated by `(x, y)`; empty when no path is set.

use nalgebra::Vector2;

use crate::geom::{degrees_to_radians, rotate_point};
use crate::model::{Furniture, Shape};

/// Number of points sampled on a circular outline (every 22.5°).
pub const CIRCLE_SAMPLES: usize = 16;

/// Relative size of the cut-out arm of an L-shaped piece.
pub const L_SHAPE_RATIO: f64 = 0.6;

/// Ordered outline of `f`, already rotated, in room-local centimeters.
pub fn furniture_outline(f: &Furniture) -> Vec<Vector2<f64>> {
    let center = f.center();
    let origin = Vector2::new(f.x, f.y);
    let local: Vec<Vector2<f64>> = match f.shape {
        Shape::Circle => return circle_points(center, f.width.max(f.depth) / 2.0),
        Shape::Rectangle => vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(f.width, 0.0),
            Vector2::new(f.width, f.depth),
            Vector2::new(0.0, f.depth),
        ],
        Shape::LShape => {
            let w2 = f.width * L_SHAPE_RATIO;
            let d2 = f.depth * L_SHAPE_RATIO;
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(w2, 0.0),
                Vector2::new(w2, f.depth - d2),
                Vector2::new(f.width, f.depth - d2),
                Vector2::new(f.width, f.depth),
                Vector2::new(0.0, f.depth),
            ]
        }
        Shape::Custom => match &f.custom_path {
            Some(path) => path.clone(),
            None => Vec::new(),
        },
    };
    local
        .into_iter()
        .map(|p| rotate_point(origin + p, center, f.rotation))
        .collect()
}

fn circle_points(center: Vector2<f64>, radius: f64) -> Vec<Vector2<f64>> {
    let step = 360.0 / CIRCLE_SAMPLES as f64;
    (0..CIRCLE_SAMPLES)
        .map(|i| {
            let (sin, cos) = degrees_to_radians(i as f64 * step).sin_cos();
            center + radius * Vector2::new(cos, sin)
        })
        .collect()
}
