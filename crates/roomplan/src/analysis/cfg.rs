//! Tunables for full-scene analysis.
//!
//! Defaults reproduce the reference scoring: vertex-containment overlap and the
//! open swing arc.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How two furniture outlines are tested for overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IntersectionMode {
    /// A vertex of one outline inside the other. Misses pure edge crossings.
    #[default]
    VertexContainment,
    /// Vertex containment or any proper edge crossing.
    EdgeCrossing,
}

/// Which polygon stands for the area a door sweeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SwingRegion {
    /// The sampled arc, closed last→first.
    #[default]
    Arc,
    /// Hinge plus arc: the full swept sector.
    Sector,
}

/// Analysis configuration (penalties, suggestion thresholds, predicates).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalysisCfg {
    /// Accessibility points lost per door-furniture warning.
    pub door_penalty: u32,
    /// Accessibility points lost per furniture-furniture warning.
    pub collision_penalty: u32,
    /// Below this efficiency (%) the room is reported as under-used.
    pub low_efficiency: f64,
    /// Above this efficiency (%) the room is reported as crowded.
    pub high_efficiency: f64,
    pub intersection: IntersectionMode,
    pub swing: SwingRegion,
}

impl Default for AnalysisCfg {
    fn default() -> Self {
        Self {
            door_penalty: 20,
            collision_penalty: 10,
            low_efficiency: 60.0,
            high_efficiency: 85.0,
            intersection: IntersectionMode::VertexContainment,
            swing: SwingRegion::Arc,
        }
    }
}
