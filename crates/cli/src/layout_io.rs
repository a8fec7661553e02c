use anyhow::{Context, Result};
use roomplan::model::{validate, RoomLayout};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and validate a layout JSON file.
pub fn load_layout(path: &Path) -> Result<RoomLayout> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let layout: RoomLayout = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing layout {}", path.display()))?;
    validate(&layout).with_context(|| format!("invalid layout {}", path.display()))?;
    tracing::debug!(
        name = %layout.name,
        doors = layout.doors.len(),
        furniture = layout.furniture.len(),
        "layout loaded"
    );
    Ok(layout)
}

/// Pretty JSON to `out`, or stdout when `out` is `None`.
pub fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomplan::model::{Hinge, Shape, SwingDirection, Wall};
    use tempfile::tempdir;

    const LAYOUT: &str = r##"{
        "name": "Bedroom",
        "dimensions": { "length": 4.5, "width": 3.5, "height": 2.4 },
        "doors": [{
            "id": "door-1", "width": 80, "height": 200, "wall": "east",
            "position": 0.3, "swingDirection": "outward", "swingAngle": 90,
            "hingePosition": "right"
        }],
        "furniture": [{
            "id": "desk-1", "name": "Desk", "type": "desk", "shape": "l-shape",
            "width": 120, "depth": 60, "height": 75, "x": 10, "y": 20,
            "rotation": 0, "color": "#4CAF50"
        }, {
            "id": "rug", "name": "Rug", "type": "rug", "shape": "custom",
            "width": 100, "depth": 100, "height": 1, "x": 0, "y": 0, "rotation": 0,
            "customPath": [{ "x": 0, "y": 0 }, { "x": 100, "y": 0 }, { "x": 50, "y": 80 }]
        }]
    }"##;

    #[test]
    fn loads_editor_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, LAYOUT).unwrap();
        let layout = load_layout(&path).unwrap();
        let door = layout.door("door-1").unwrap();
        assert_eq!(door.wall, Wall::East);
        assert_eq!(door.hinge, Hinge::Right);
        assert_eq!(door.swing_direction, SwingDirection::Outward);
        let desk = layout.furniture_item("desk-1").unwrap();
        assert_eq!(desk.shape, Shape::LShape);
        assert_eq!(desk.kind, "desk");
        let rug = layout.furniture_item("rug").unwrap();
        assert_eq!(rug.custom_path.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn rejects_invalid_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, LAYOUT.replace("\"position\": 0.3", "\"position\": 3")).unwrap();
        let err = load_layout(&path).unwrap_err();
        assert!(format!("{err:#}").contains("position must lie in [0, 1]"));
    }

    #[test]
    fn emit_writes_custom_path_as_xy_objects() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("layout.json");
        fs::write(&src, LAYOUT).unwrap();
        let layout = load_layout(&src).unwrap();
        let out = dir.path().join("nested/copy.json");
        emit(&layout, Some(&out)).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(v["furniture"][1]["customPath"][2]["y"], 80.0);
        assert_eq!(v["doors"][0]["hingePosition"], "right");
        assert!(v["furniture"][0].get("customPath").is_none());
    }
}
