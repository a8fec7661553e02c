//! Static furniture template catalog.
//!
//! Templates only seed new `Furniture` values; they are never mutated.

use nalgebra::Vector2;

use crate::model::{Furniture, RoomDimensions, Shape};

/// Archetype with default dimensions in centimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FurnitureTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub kind: &'static str,
    pub shape: Shape,
    pub default_width: f64,
    pub default_depth: f64,
    pub default_height: f64,
    pub icon: &'static str,
    pub color: &'static str,
}

macro_rules! tpl {
    ($id:literal, $name:literal, $cat:literal, $kind:literal, $shape:ident,
     $w:literal x $d:literal x $h:literal, $icon:literal, $color:literal) => {
        FurnitureTemplate {
            id: $id,
            name: $name,
            category: $cat,
            kind: $kind,
            shape: Shape::$shape,
            default_width: $w as f64,
            default_depth: $d as f64,
            default_height: $h as f64,
            icon: $icon,
            color: $color,
        }
    };
}

static TEMPLATES: [FurnitureTemplate; 16] = [
    tpl!("sofa-standard", "Sofa", "living", "sofa", Rectangle, 200 x 90 x 85, "couch", "#FF5722"),
    tpl!("sofa-l-shape", "L-shaped sofa", "living", "sofa", LShape, 250 x 200 x 85, "couch", "#FF5722"),
    tpl!("coffee-table", "Coffee table", "living", "table", Rectangle, 120 x 60 x 45, "table", "#388E3C"),
    tpl!("coffee-table-round", "Round coffee table", "living", "table", Circle, 80 x 80 x 45, "table", "#388E3C"),
    tpl!("armchair", "Armchair", "living", "chair", Rectangle, 80 x 80 x 85, "chair", "#9C27B0"),
    tpl!("tv-stand", "TV stand", "living", "tv", Rectangle, 150 x 40 x 60, "tv", "#607D8B"),
    tpl!("bed-single", "Single bed", "bedroom", "bed", Rectangle, 120 x 200 x 50, "bed", "#2196F3"),
    tpl!("bed-double", "Double bed", "bedroom", "bed", Rectangle, 150 x 200 x 50, "bed", "#2196F3"),
    tpl!("bed-queen", "Queen bed", "bedroom", "bed", Rectangle, 160 x 200 x 50, "bed", "#2196F3"),
    tpl!("wardrobe", "Wardrobe", "bedroom", "storage", Rectangle, 100 x 60 x 200, "archive", "#795548"),
    tpl!("dresser", "Dresser", "bedroom", "dresser", Rectangle, 120 x 45 x 75, "mirror", "#E91E63"),
    tpl!("dining-table-4", "Dining table (4 seats)", "dining", "table", Rectangle, 120 x 80 x 75, "table", "#388E3C"),
    tpl!("dining-table-6", "Dining table (6 seats)", "dining", "table", Rectangle, 160 x 90 x 75, "table", "#388E3C"),
    tpl!("dining-chair", "Dining chair", "dining", "chair", Rectangle, 45 x 50 x 80, "chair", "#9C27B0"),
    tpl!("bookshelf", "Bookshelf", "study", "storage", Rectangle, 80 x 30 x 180, "book", "#FF9800"),
    tpl!("desk", "Desk", "study", "desk", Rectangle, 120 x 60 x 75, "desktop", "#4CAF50"),
];

pub fn templates() -> &'static [FurnitureTemplate] {
    &TEMPLATES
}

pub fn template(id: &str) -> Option<&'static FurnitureTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn templates_in(category: &str) -> impl Iterator<Item = &'static FurnitureTemplate> + '_ {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

/// Distinct categories in catalog order.
pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for t in &TEMPLATES {
        if !out.contains(&t.category) {
            out.push(t.category);
        }
    }
    out
}

/// Top-left position that centers the template's default footprint in the
/// room, clamped to the room's origin when the piece is larger than the room.
pub fn centered_placement(t: &FurnitureTemplate, dims: &RoomDimensions) -> Vector2<f64> {
    let ext = dims.extent_cm();
    Vector2::new(
        (ext.x / 2.0 - t.default_width / 2.0).max(0.0),
        (ext.y / 2.0 - t.default_depth / 2.0).max(0.0),
    )
}

impl Furniture {
    /// Unrotated instance of `t` with its top-left corner at `position`.
    pub fn from_template(
        t: &FurnitureTemplate,
        id: impl Into<String>,
        position: Vector2<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: t.name.to_string(),
            kind: t.kind.to_string(),
            shape: t.shape,
            width: t.default_width,
            depth: t.default_depth,
            height: t.default_height,
            x: position.x,
            y: position.y,
            rotation: 0.0,
            custom_path: None,
            color: Some(t.color.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn ids_are_unique() {
        let ids: std::collections::HashSet<_> = templates().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), templates().len());
    }

    #[test]
    fn lookup_and_categories() {
        let sofa = template("sofa-l-shape").unwrap();
        assert_eq!(sofa.shape, Shape::LShape);
        assert_eq!((sofa.default_width, sofa.default_depth), (250.0, 200.0));
        assert!(template("piano").is_none());
        assert_eq!(categories(), vec!["living", "bedroom", "dining", "study"]);
        assert_eq!(templates_in("study").count(), 2);
        assert_eq!(templates_in("garage").count(), 0);
    }

    #[test]
    fn centered_and_clamped_placement() {
        let dims = RoomDimensions::new(4.5, 3.5, 2.4);
        let desk = template("desk").unwrap();
        assert_eq!(centered_placement(desk, &dims), vector![115.0, 195.0]);
        let tiny = RoomDimensions::new(1.0, 1.0, 2.4);
        let sofa = template("sofa-l-shape").unwrap();
        assert_eq!(centered_placement(sofa, &tiny), vector![0.0, 0.0]);
    }

    #[test]
    fn instance_from_template() {
        let t = template("coffee-table-round").unwrap();
        let f = Furniture::from_template(t, "t1", vector![10.0, 20.0]);
        assert_eq!(f.id, "t1");
        assert_eq!(f.shape, Shape::Circle);
        assert_eq!((f.width, f.depth, f.height), (80.0, 80.0, 45.0));
        assert_eq!((f.x, f.y, f.rotation), (10.0, 20.0, 0.0));
        assert_eq!(f.color.as_deref(), Some("#388E3C"));
    }
}
