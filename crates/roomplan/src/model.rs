//! Room, door and furniture value types.
//!
//! Units
//! - `RoomDimensions` is in meters: `length` is the north–south extent (room
//!   Y axis), `width` the east–west extent (room X axis).
//! - Door and furniture sizes/positions are centimeters in room-local
//!   coordinates with the origin at the north-west corner.
//!
//! The engine never mutates these; `validate` checks the caller contract that
//! the geometry functions assume but do not enforce.

use std::collections::HashSet;
use std::fmt;

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Floor-plan rectangle plus ceiling height, all in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl RoomDimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Floor area in m².
    #[inline]
    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }

    /// `(width, length)` in centimeters, i.e. the room's X and Y extents.
    #[inline]
    pub fn extent_cm(&self) -> Vector2<f64> {
        Vector2::new(self.width * 100.0, self.length * 100.0)
    }
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self::new(4.5, 3.5, 2.4)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Wall {
    North,
    South,
    East,
    West,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::North, Wall::South, Wall::East, Wall::West];

    /// North and south walls run along the room's X axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Wall::North | Wall::South)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SwingDirection {
    Inward,
    Outward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Hinge {
    Left,
    Right,
}

/// A door on one wall. `position` is the fraction along the wall measured
/// from the west end (north/south walls) or the north end (east/west walls).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Door {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub wall: Wall,
    pub position: f64,
    pub swing_direction: SwingDirection,
    pub swing_angle: f64,
    #[cfg_attr(feature = "serde", serde(rename = "hingePosition"))]
    pub hinge: Hinge,
}

impl Door {
    /// A freshly added door: 80×200cm, centered on the north wall, opening
    /// 90° inward on a left hinge.
    pub fn with_defaults(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: 80.0,
            height: 200.0,
            wall: Wall::North,
            position: 0.5,
            swing_direction: SwingDirection::Inward,
            swing_angle: 90.0,
            hinge: Hinge::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Shape {
    Rectangle,
    Circle,
    LShape,
    Custom,
}

/// A placed piece of furniture.
///
/// `(x, y)` is the top-left corner of the unrotated `width × depth` box;
/// `rotation` (degrees) turns the piece about the box center.
/// `custom_path` is only read for `Shape::Custom` and holds points relative to
/// `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Furniture {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub shape: Shape,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none", with = "xy_path")
    )]
    pub custom_path: Option<Vec<Vector2<f64>>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub color: Option<String>,
}

impl Furniture {
    /// Rotation center: the middle of the unrotated box, for every shape.
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.x + self.width / 2.0, self.y + self.depth / 2.0)
    }

    /// Nominal footprint in m² (`width × depth`, ignoring shape and rotation).
    #[inline]
    pub fn footprint_m2(&self) -> f64 {
        self.width * self.depth / 10_000.0
    }
}

/// The complete scene handed to the engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomLayout {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<i64>,
    pub name: String,
    pub dimensions: RoomDimensions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub doors: Vec<Door>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub furniture: Vec<Furniture>,
}

impl RoomLayout {
    pub fn door(&self, id: &str) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    pub fn furniture_item(&self, id: &str) -> Option<&Furniture> {
        self.furniture.iter().find(|f| f.id == id)
    }
}

/// Contract violations found by `validate`.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A room dimension is zero, negative or not finite.
    RoomDimension { field: &'static str, value: f64 },
    /// Door position outside `[0, 1]`.
    DoorPosition { door: String, value: f64 },
    /// Swing angle outside `(0, 180]`.
    SwingAngle { door: String, value: f64 },
    /// Door leaf width is zero, negative or not finite.
    DoorWidth { door: String, value: f64 },
    /// Furniture width or depth is zero, negative or not finite.
    FurnitureExtent {
        furniture: String,
        field: &'static str,
        value: f64,
    },
    DuplicateDoor(String),
    DuplicateFurniture(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::RoomDimension { field, value } => {
                write!(f, "room {field} must be positive and finite (got {value})")
            }
            LayoutError::DoorPosition { door, value } => {
                write!(f, "door {door}: position must lie in [0, 1] (got {value})")
            }
            LayoutError::SwingAngle { door, value } => {
                write!(f, "door {door}: swing angle must lie in (0, 180] (got {value})")
            }
            LayoutError::DoorWidth { door, value } => {
                write!(f, "door {door}: width must be positive (got {value})")
            }
            LayoutError::FurnitureExtent {
                furniture,
                field,
                value,
            } => write!(
                f,
                "furniture {furniture}: {field} must be positive (got {value})"
            ),
            LayoutError::DuplicateDoor(id) => write!(f, "duplicate door id {id}"),
            LayoutError::DuplicateFurniture(id) => write!(f, "duplicate furniture id {id}"),
        }
    }
}

impl std::error::Error for LayoutError {}

#[inline]
fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Check the input contract of the geometry functions. Stops at the first
/// violation.
pub fn validate(layout: &RoomLayout) -> Result<(), LayoutError> {
    let dims = layout.dimensions;
    for (field, value) in [
        ("length", dims.length),
        ("width", dims.width),
        ("height", dims.height),
    ] {
        if !positive(value) {
            return Err(LayoutError::RoomDimension { field, value });
        }
    }

    let mut seen = HashSet::new();
    for d in &layout.doors {
        if !seen.insert(d.id.as_str()) {
            return Err(LayoutError::DuplicateDoor(d.id.clone()));
        }
        if !(0.0..=1.0).contains(&d.position) {
            return Err(LayoutError::DoorPosition {
                door: d.id.clone(),
                value: d.position,
            });
        }
        if !(d.swing_angle > 0.0 && d.swing_angle <= 180.0) {
            return Err(LayoutError::SwingAngle {
                door: d.id.clone(),
                value: d.swing_angle,
            });
        }
        if !positive(d.width) {
            return Err(LayoutError::DoorWidth {
                door: d.id.clone(),
                value: d.width,
            });
        }
    }

    let mut seen = HashSet::new();
    for item in &layout.furniture {
        if !seen.insert(item.id.as_str()) {
            return Err(LayoutError::DuplicateFurniture(item.id.clone()));
        }
        for (field, value) in [("width", item.width), ("depth", item.depth)] {
            if !positive(value) {
                return Err(LayoutError::FurnitureExtent {
                    furniture: item.id.clone(),
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Custom paths travel as `[{ "x": .., "y": .. }, ...]`.
#[cfg(feature = "serde")]
mod xy_path {
    use nalgebra::Vector2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xy {
        x: f64,
        y: f64,
    }

    pub fn serialize<S: Serializer>(
        path: &Option<Vec<Vector2<f64>>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        path.as_ref()
            .map(|pts| pts.iter().map(|p| Xy { x: p.x, y: p.y }).collect::<Vec<_>>())
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<Vector2<f64>>>, D::Error> {
        let raw = Option::<Vec<Xy>>::deserialize(d)?;
        Ok(raw.map(|pts| pts.into_iter().map(|p| Vector2::new(p.x, p.y)).collect()))
    }
}
