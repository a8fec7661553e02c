//! Room layout geometry engine.
//!
//! Pure, stateless 2D computations over a room snapshot: furniture outlines,
//! door swing arcs, containment and overlap predicates, interference checks
//! and the space-efficiency metric.
//!
//! Units
//! - Room dimensions are meters; every position and size inside the room is
//!   centimeters.
//! - Angles are degrees, clockwise-positive in screen coordinates (Y down).
//!
//! API Policy
//! - Every function takes value snapshots and returns derived data; nothing is
//!   cached between calls, so callers may invoke anything from any thread.
//! - `api` re-exports the small surface consumed by front ends.

pub mod analysis;
pub mod api;
pub mod catalog;
pub mod door;
pub mod geom;
pub mod model;
pub mod outline;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{
        analyze_layout, door_furniture_interference, furniture_collision,
        furniture_collision_with, space_efficiency, AnalysisCfg, InterferenceWarning,
        IntersectionMode, Severity, SpaceAnalysis, Suggestion, SwingRegion, WarningKind,
    };
    pub use crate::catalog::{centered_placement, template, templates, FurnitureTemplate};
    pub use crate::door::{door_hinge, door_swing_path, door_swing_region};
    pub use crate::geom::{
        bounding_box, degrees_to_radians, point_in_polygon, polygons_intersect,
        polygons_overlap, radians_to_degrees, rotate_point, Aabb,
    };
    pub use crate::model::{
        validate, Door, Furniture, Hinge, LayoutError, RoomDimensions, RoomLayout, Shape,
        SwingDirection, Wall,
    };
    pub use crate::outline::furniture_outline;
    pub use nalgebra::Vector2 as Vec2;
}
