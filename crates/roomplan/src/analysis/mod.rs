//! Interference, collision and utilization analysis.
//!
//! Purpose
//! - Pairwise predicates: door swing vs furniture, furniture vs furniture.
//! - `space_efficiency`: summed nominal footprints over floor area.
//! - `analyze_layout`: one full pass over a room snapshot producing warnings,
//!   an accessibility score and suggestions. Nothing is carried between passes.
//!
//! Approximations (kept as defaults, see `AnalysisCfg`)
//! - Overlap is vertex containment; `IntersectionMode::EdgeCrossing` also
//!   detects crossings without contained vertices.
//! - The door region is the open arc closed last→first;
//!   `SwingRegion::Sector` closes it through the hinge instead.
//! - Footprints ignore rotation, shape and overlap, so overlapping pieces count
//!   twice.

pub mod cfg;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::door::{door_swing_path, door_swing_region};
use crate::geom::{bounding_box, point_in_polygon, polygons_intersect, polygons_overlap};
use crate::model::{Door, Furniture, RoomDimensions, RoomLayout};
use crate::outline::furniture_outline;

pub use cfg::{AnalysisCfg, IntersectionMode, SwingRegion};

/// True if any outline point of `furniture` lies inside the door's swing arc.
/// Outlines with fewer than 3 points never interfere.
pub fn door_furniture_interference(
    door: &Door,
    furniture: &Furniture,
    dims: &RoomDimensions,
) -> bool {
    door_furniture_interference_with(door, furniture, dims, SwingRegion::Arc)
}

/// As `door_furniture_interference`, with an explicit swing region.
pub fn door_furniture_interference_with(
    door: &Door,
    furniture: &Furniture,
    dims: &RoomDimensions,
    swing: SwingRegion,
) -> bool {
    let outline = furniture_outline(furniture);
    if outline.len() < 3 {
        return false;
    }
    let region = match swing {
        SwingRegion::Arc => door_swing_path(door, dims),
        SwingRegion::Sector => door_swing_region(door, dims),
    };
    outline.into_iter().any(|p| point_in_polygon(p, &region))
}

/// Bounding-box reject, then vertex-containment overlap of the two outlines.
pub fn furniture_collision(a: &Furniture, b: &Furniture) -> bool {
    furniture_collision_with(a, b, IntersectionMode::VertexContainment)
}

/// As `furniture_collision`, with an explicit overlap test.
pub fn furniture_collision_with(a: &Furniture, b: &Furniture, mode: IntersectionMode) -> bool {
    let oa = furniture_outline(a);
    let ob = furniture_outline(b);
    let (Some(ba), Some(bb)) = (bounding_box(&oa), bounding_box(&ob)) else {
        return false;
    };
    if !ba.intersects(&bb) {
        return false;
    }
    match mode {
        IntersectionMode::VertexContainment => polygons_intersect(&oa, &ob),
        IntersectionMode::EdgeCrossing => polygons_overlap(&oa, &ob),
    }
}

/// Summed nominal footprints in m².
pub fn used_area(furniture: &[Furniture]) -> f64 {
    furniture.iter().map(Furniture::footprint_m2).sum()
}

/// Percentage of the floor covered by furniture footprints, in `[0, 100]`.
///
/// A room without positive finite floor area yields `0.0`.
pub fn space_efficiency(furniture: &[Furniture], dims: &RoomDimensions) -> f64 {
    let room_area = dims.floor_area();
    if !(room_area.is_finite() && room_area > 0.0) {
        return 0.0;
    }
    let pct = 100.0 * used_area(furniture) / room_area;
    if pct.is_finite() {
        pct.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WarningKind {
    DoorFurniture,
    FurnitureFurniture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Warning,
    Error,
}

/// A detected conflict. Rebuilt from scratch on every analysis pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InterferenceWarning {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: WarningKind,
    pub message: String,
    pub severity: Severity,
    pub furniture_ids: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub door_id: Option<String>,
}

impl InterferenceWarning {
    fn door(door: &Door, f: &Furniture) -> Self {
        Self {
            id: format!("door-{}-furniture-{}", door.id, f.id),
            kind: WarningKind::DoorFurniture,
            message: format!("{} blocks the swing of door {}", f.name, door.id),
            severity: Severity::Warning,
            furniture_ids: vec![f.id.clone()],
            door_id: Some(door.id.clone()),
        }
    }

    fn collision(a: &Furniture, b: &Furniture) -> Self {
        Self {
            id: format!("furniture-{}-{}", a.id, b.id),
            kind: WarningKind::FurnitureFurniture,
            message: format!("{} and {} overlap", a.name, b.name),
            severity: Severity::Error,
            furniture_ids: vec![a.id.clone(), b.id.clone()],
            door_id: None,
        }
    }
}

/// Layout advice derived from the analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Suggestion {
    LowUtilization,
    Overcrowded,
    ResolveInterference,
    AddFurniture,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Suggestion::LowUtilization => {
                "Space utilization is low; consider placing more furniture."
            }
            Suggestion::Overcrowded => {
                "The room is crowded; remove or rearrange some furniture to keep walkways clear."
            }
            Suggestion::ResolveInterference => {
                "Adjust the furniture placement to resolve the interferences."
            }
            Suggestion::AddFurniture => "Add furniture to start furnishing the room.",
        };
        f.write_str(msg)
    }
}

/// Result of one full analysis pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpaceAnalysis {
    /// Floor area, m².
    pub total_area: f64,
    /// Summed nominal footprints, m².
    pub used_area: f64,
    /// Percentage in `[0, 100]`.
    pub efficiency: f64,
    /// `0..=100`.
    pub accessibility_score: u32,
    pub warnings: Vec<InterferenceWarning>,
    pub suggestions: Vec<Suggestion>,
}

impl SpaceAnalysis {
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }
}

/// Every door against every piece, then every unordered pair of pieces.
///
/// Warnings come out in that order (doors outer, furniture inner; pairs by
/// `(i, j)` with `i < j`).
pub fn collect_warnings(layout: &RoomLayout, cfg: &AnalysisCfg) -> Vec<InterferenceWarning> {
    let mut warnings = Vec::new();
    for door in &layout.doors {
        for f in &layout.furniture {
            if door_furniture_interference_with(door, f, &layout.dimensions, cfg.swing) {
                tracing::trace!(door = %door.id, furniture = %f.id, "door swing blocked");
                warnings.push(InterferenceWarning::door(door, f));
            }
        }
    }
    for (i, a) in layout.furniture.iter().enumerate() {
        for b in &layout.furniture[i + 1..] {
            if furniture_collision_with(a, b, cfg.intersection) {
                tracing::trace!(a = %a.id, b = %b.id, "furniture overlap");
                warnings.push(InterferenceWarning::collision(a, b));
            }
        }
    }
    warnings
}

/// `100 − door_penalty·doors − collision_penalty·collisions`, floored at 0.
pub fn accessibility_score(warnings: &[InterferenceWarning], cfg: &AnalysisCfg) -> u32 {
    let penalty = warnings.iter().fold(0u32, |acc, w| {
        acc.saturating_add(match w.kind {
            WarningKind::DoorFurniture => cfg.door_penalty,
            WarningKind::FurnitureFurniture => cfg.collision_penalty,
        })
    });
    100u32.saturating_sub(penalty)
}

fn suggestions(
    efficiency: f64,
    warnings: &[InterferenceWarning],
    furniture_count: usize,
    cfg: &AnalysisCfg,
) -> Vec<Suggestion> {
    let mut out = Vec::new();
    if efficiency < cfg.low_efficiency {
        out.push(Suggestion::LowUtilization);
    } else if efficiency > cfg.high_efficiency {
        out.push(Suggestion::Overcrowded);
    }
    if !warnings.is_empty() {
        out.push(Suggestion::ResolveInterference);
    }
    if furniture_count == 0 {
        out.push(Suggestion::AddFurniture);
    }
    out
}

/// Full analysis of a room snapshot.
pub fn analyze_layout(layout: &RoomLayout, cfg: AnalysisCfg) -> SpaceAnalysis {
    let efficiency = space_efficiency(&layout.furniture, &layout.dimensions);
    let warnings = collect_warnings(layout, &cfg);
    let accessibility_score = accessibility_score(&warnings, &cfg);
    let suggestions = suggestions(efficiency, &warnings, layout.furniture.len(), &cfg);
    tracing::debug!(
        doors = layout.doors.len(),
        furniture = layout.furniture.len(),
        warnings = warnings.len(),
        efficiency,
        accessibility_score,
        "layout analyzed"
    );
    SpaceAnalysis {
        total_area: layout.dimensions.floor_area(),
        used_area: used_area(&layout.furniture),
        efficiency,
        accessibility_score,
        warnings,
        suggestions,
    }
}
