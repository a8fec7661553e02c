//! Reference scenarios through the front-end API.

use nalgebra::vector;
use roomplan::api::{
    analyze_layout, door_furniture_interferes, door_swing_path, furniture_furniture_collides,
    outline, space_efficiency, AnalysisCfg,
};
use roomplan::catalog::{centered_placement, template};
use roomplan::model::{Door, Furniture, RoomDimensions, RoomLayout, Shape};

fn dims() -> RoomDimensions {
    RoomDimensions::new(4.5, 3.5, 2.4)
}

fn rect(id: &str, x: f64, y: f64, w: f64, d: f64) -> Furniture {
    Furniture {
        id: id.into(),
        name: id.into(),
        kind: "box".into(),
        shape: Shape::Rectangle,
        width: w,
        depth: d,
        height: 40.0,
        x,
        y,
        rotation: 0.0,
        custom_path: None,
        color: None,
    }
}

#[test]
fn north_door_arc_from_90_to_180() {
    let door = Door::with_defaults("d1");
    let path = door_swing_path(&door, &dims());
    assert_eq!(path.len(), 19);
    let hinge = vector![175.0, 0.0];
    for p in &path {
        assert!(((p - hinge).norm() - 80.0).abs() < 1e-9);
    }
    let first = path[0] - hinge;
    let last = path[path.len() - 1] - hinge;
    assert!((first.y.atan2(first.x).to_degrees() - 90.0).abs() < 1e-9);
    assert!((last.y.atan2(last.x).to_degrees() - 180.0).abs() < 1e-9);
}

#[test]
fn overlapping_boxes_collide_either_way() {
    let a = rect("a", 0.0, 0.0, 100.0, 100.0);
    let b = rect("b", 50.0, 50.0, 100.0, 100.0);
    assert!(furniture_furniture_collides(&a, &b));
    assert!(furniture_furniture_collides(&b, &a));
}

#[test]
fn distant_boxes_do_not_collide() {
    let a = rect("a", 0.0, 0.0, 50.0, 50.0);
    let c = rect("c", 200.0, 200.0, 50.0, 50.0);
    assert!(!furniture_furniture_collides(&a, &c));
}

#[test]
fn empty_room_report() {
    let layout = RoomLayout {
        name: "empty".into(),
        dimensions: dims(),
        ..RoomLayout::default()
    };
    assert_eq!(space_efficiency(&[], &dims()), 0.0);
    let report = analyze_layout(&layout, AnalysisCfg::default());
    assert_eq!(report.accessibility_score, 100);
    assert!(report.warnings.is_empty());
}

#[test]
fn centered_bed_clear_of_default_door() {
    let bed = template("bed-double").unwrap();
    let f = Furniture::from_template(bed, "bed", centered_placement(bed, &dims()));
    assert_eq!(outline(&f).len(), 4);
    let door = Door::with_defaults("d1");
    assert!(!door_furniture_interferes(&door, &f, &dims()));

    let layout = RoomLayout {
        name: "bedroom".into(),
        dimensions: dims(),
        doors: vec![door],
        furniture: vec![f],
        ..RoomLayout::default()
    };
    let report = analyze_layout(&layout, AnalysisCfg::default());
    assert!((report.efficiency - 100.0 * 3.0 / 15.75).abs() < 1e-9);
    assert_eq!(report.accessibility_score, 100);
}
