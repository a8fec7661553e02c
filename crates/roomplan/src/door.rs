//! Door swing arcs.
//!
//! Model
//! - The door's anchor sits at `position` along its wall; a right hinge is
//!   offset by the leaf width along the wall (towards +X on north/south walls,
//!   towards +Y on east/west walls).
//! - The leaf starts along the wall's facing direction (`wall_angle`), flipped
//!   by 180° for a right hinge, and turns by `swing_angle`: clockwise on
//!   screen for inward doors, counterclockwise for outward ones.
//! - The arc is sampled at `max(MIN_SWING_STEPS, ⌊swing_angle / SWING_STEP_DEG⌋)`
//!   equal steps, both ends included.
//!
//! `door_swing_path` returns the open arc only. Containment tests close it
//! implicitly (last point back to the first), which approximates the swept
//! sector by the arc's circular segment. `door_swing_region` prepends the hinge
//! so the same tests see the full sector.

use nalgebra::Vector2;

use crate::geom::degrees_to_radians;
use crate::model::{Door, Hinge, RoomDimensions, SwingDirection, Wall};

/// Angular resolution of the sampled arc, in degrees per step.
pub const SWING_STEP_DEG: f64 = 5.0;
/// Lower bound on arc steps so small swings stay smooth.
pub const MIN_SWING_STEPS: usize = 10;

/// Facing direction of a wall, degrees clockwise from +X (Y down).
pub fn wall_angle(wall: Wall) -> f64 {
    match wall {
        Wall::North => 90.0,
        Wall::South => 270.0,
        Wall::East => 180.0,
        Wall::West => 0.0,
    }
}

/// Door anchor on its wall, in room centimeters.
pub fn door_anchor(door: &Door, dims: &RoomDimensions) -> Vector2<f64> {
    let ext = dims.extent_cm();
    match door.wall {
        Wall::North => Vector2::new(door.position * ext.x, 0.0),
        Wall::South => Vector2::new(door.position * ext.x, ext.y),
        Wall::East => Vector2::new(ext.x, door.position * ext.y),
        Wall::West => Vector2::new(0.0, door.position * ext.y),
    }
}

/// Pivot point of the door leaf.
pub fn door_hinge(door: &Door, dims: &RoomDimensions) -> Vector2<f64> {
    let anchor = door_anchor(door, dims);
    let offset = match door.hinge {
        Hinge::Left => 0.0,
        Hinge::Right => door.width,
    };
    if door.wall.is_horizontal() {
        anchor + Vector2::new(offset, 0.0)
    } else {
        anchor + Vector2::new(0.0, offset)
    }
}

/// `(start, end)` angles of the sweep in degrees.
pub fn swing_angles(door: &Door) -> (f64, f64) {
    let start = wall_angle(door.wall)
        + match door.hinge {
            Hinge::Left => 0.0,
            Hinge::Right => 180.0,
        };
    let end = match door.swing_direction {
        SwingDirection::Inward => start + door.swing_angle,
        SwingDirection::Outward => start - door.swing_angle,
    };
    (start, end)
}

/// Sweeps past a full turn are sampled as one full turn.
pub const MAX_SWING_DEG: f64 = 360.0;

/// Number of equal angular steps used to sample the arc, at most
/// `MAX_SWING_DEG / SWING_STEP_DEG`.
pub fn swing_steps(swing_angle: f64) -> usize {
    if swing_angle.is_nan() {
        return MIN_SWING_STEPS;
    }
    let by_angle = (swing_angle.min(MAX_SWING_DEG) / SWING_STEP_DEG).floor();
    if by_angle > MIN_SWING_STEPS as f64 {
        by_angle as usize
    } else {
        MIN_SWING_STEPS
    }
}

/// Arc swept by the leaf tip, `swing_steps + 1` points from start to end angle.
pub fn door_swing_path(door: &Door, dims: &RoomDimensions) -> Vec<Vector2<f64>> {
    let hinge = door_hinge(door, dims);
    let (start, end) = swing_angles(door);
    let steps = swing_steps(door.swing_angle);
    let radius = door.width;
    (0..=steps)
        .map(|i| {
            let angle = start + (end - start) * (i as f64 / steps as f64);
            let (sin, cos) = degrees_to_radians(angle).sin_cos();
            hinge + radius * Vector2::new(cos, sin)
        })
        .collect()
}

/// Closed sector: hinge followed by the arc.
pub fn door_swing_region(door: &Door, dims: &RoomDimensions) -> Vec<Vector2<f64>> {
    let arc = door_swing_path(door, dims);
    let mut region = Vec::with_capacity(arc.len() + 1);
    region.push(door_hinge(door, dims));
    region.extend(arc);
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn dims() -> RoomDimensions {
        RoomDimensions::new(4.5, 3.5, 2.4)
    }

    #[test]
    fn step_count() {
        assert_eq!(swing_steps(90.0), 18);
        assert_eq!(swing_steps(30.0), 10);
        assert_eq!(swing_steps(180.0), 36);
        assert_eq!(swing_steps(52.0), 10);
        assert_eq!(swing_steps(57.0), 11);
    }

    #[test]
    fn step_count_is_bounded() {
        assert_eq!(swing_steps(360.0), 72);
        assert_eq!(swing_steps(1e30), 72);
        assert_eq!(swing_steps(f64::INFINITY), 72);
        assert_eq!(swing_steps(f64::NAN), MIN_SWING_STEPS);
        assert_eq!(swing_steps(-45.0), MIN_SWING_STEPS);

        let mut door = Door::with_defaults("d");
        door.swing_angle = 1e30;
        assert_eq!(door_swing_path(&door, &dims()).len(), 73);
        assert_eq!(door_swing_region(&door, &dims()).len(), 74);
    }

    #[test]
    fn north_left_inward_quarter() {
        let door = Door::with_defaults("d");
        let path = door_swing_path(&door, &dims());
        assert_eq!(path.len(), 19);
        let hinge = vector![175.0, 0.0];
        assert_eq!(door_hinge(&door, &dims()), hinge);
        assert_eq!(swing_angles(&door), (90.0, 180.0));
        for p in &path {
            assert!(((p - hinge).norm() - 80.0).abs() < 1e-9);
        }
        assert!((path[0] - vector![175.0, 80.0]).norm() < 1e-9);
        assert!((path[18] - vector![95.0, 0.0]).norm() < 1e-9);
    }

    #[test]
    fn right_hinge_offsets_along_wall() {
        let mut door = Door::with_defaults("d");
        door.hinge = Hinge::Right;
        assert_eq!(door_hinge(&door, &dims()), vector![255.0, 0.0]);
        assert_eq!(swing_angles(&door), (270.0, 360.0));

        door.wall = Wall::East;
        door.position = 0.25;
        assert_eq!(door_anchor(&door, &dims()), vector![350.0, 112.5]);
        assert_eq!(door_hinge(&door, &dims()), vector![350.0, 192.5]);
    }

    #[test]
    fn outward_sweeps_the_other_way() {
        let mut door = Door::with_defaults("d");
        door.wall = Wall::West;
        door.swing_direction = SwingDirection::Outward;
        door.swing_angle = 45.0;
        assert_eq!(swing_angles(&door), (0.0, -45.0));
        let path = door_swing_path(&door, &dims());
        assert_eq!(path.len(), MIN_SWING_STEPS + 1);
        // West wall hinge at (0, 225); leaf starts pointing into the room.
        assert!((path[0] - vector![80.0, 225.0]).norm() < 1e-9);
        assert!(path.last().unwrap().y < 225.0);
    }

    #[test]
    fn south_wall_anchor() {
        let mut door = Door::with_defaults("d");
        door.wall = Wall::South;
        door.position = 0.0;
        assert_eq!(door_anchor(&door, &dims()), vector![0.0, 450.0]);
        let path = door_swing_path(&door, &dims());
        // starts at 270°: straight up into the room
        assert!((path[0] - vector![0.0, 370.0]).norm() < 1e-9);
    }

    #[test]
    fn region_starts_at_hinge() {
        let door = Door::with_defaults("d");
        let region = door_swing_region(&door, &dims());
        assert_eq!(region.len(), 20);
        assert_eq!(region[0], door_hinge(&door, &dims()));
    }
}
