//! Containment, bounding boxes and overlap for simple polygons.
//!
//! Two overlap tests are provided:
//! - `polygons_intersect`: vertex containment only. Misses crossings where no
//!   vertex of either polygon lies inside the other (two thin rectangles
//!   forming a plus sign). This is the reference behavior for collision
//!   warnings.
//! - `polygons_overlap`: vertex containment plus proper edge crossings. Works
//!   for non-convex outlines (L-shapes) as well.

use nalgebra::Vector2;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Aabb {
    /// Closed interval overlap on both axes; touching boxes intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || other.max.x < self.min.x
            || self.max.y < other.min.y
            || other.max.y < self.min.y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Bounding box of `points`, `None` for an empty slice.
pub fn bounding_box(points: &[Vector2<f64>]) -> Option<Aabb> {
    let first = *points.first()?;
    let mut b = Aabb {
        min: first,
        max: first,
    };
    for p in &points[1..] {
        b.min.x = b.min.x.min(p.x);
        b.min.y = b.min.y.min(p.y);
        b.max.x = b.max.x.max(p.x);
        b.max.y = b.max.y.max(p.y);
    }
    Some(b)
}

/// Even-odd ray casting against the polygon edges (closing edge included).
///
/// Casts a horizontal ray towards +X. Points exactly on an edge may land on
/// either side. Fewer than 3 points never contain anything.
pub fn point_in_polygon(point: Vector2<f64>, polygon: &[Vector2<f64>]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// True if any vertex of either polygon lies inside the other. Fewer than 3
/// points on either side never intersect.
pub fn polygons_intersect(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    a.iter().any(|&p| point_in_polygon(p, b)) || b.iter().any(|&p| point_in_polygon(p, a))
}

/// Area overlap test: vertex containment or any proper edge crossing.
///
/// Collinear and touching contacts do not count as crossings.
pub fn polygons_overlap(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    if polygons_intersect(a, b) {
        return true;
    }
    edges(a).any(|(p, q)| edges(b).any(|(r, s)| segments_cross(p, q, r, s)))
}

/// Proper crossing of segments `pq` and `rs` (strict orientation test).
pub fn segments_cross(
    p: Vector2<f64>,
    q: Vector2<f64>,
    r: Vector2<f64>,
    s: Vector2<f64>,
) -> bool {
    let d1 = cross(p, q, r);
    let d2 = cross(p, q, s);
    let d3 = cross(r, s, p);
    let d4 = cross(r, s, q);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

fn edges(poly: &[Vector2<f64>]) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
    let n = poly.len();
    (0..n).map(move |k| (poly[k], poly[(k + 1) % n]))
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
