use nalgebra::Vector2;
use proptest::prelude::*;
use roomplan::analysis::{furniture_collision, furniture_collision_with, space_efficiency, IntersectionMode};
use roomplan::door::{door_swing_path, swing_steps};
use roomplan::geom::rotate_point;
use roomplan::model::{Door, Furniture, Hinge, RoomDimensions, Shape, SwingDirection, Wall};
use roomplan::outline::furniture_outline;

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Rectangle),
        Just(Shape::Circle),
        Just(Shape::LShape),
        Just(Shape::Custom),
    ]
}

prop_compose! {
    fn furniture()(
        shape in shape(),
        width in 20.0..400.0f64,
        depth in 20.0..400.0f64,
        x in 0.0..600.0f64,
        y in 0.0..600.0f64,
        rotation in 0.0..360.0f64,
        path in prop::collection::vec((0.0..400.0f64, 0.0..400.0f64), 0..6),
    ) -> Furniture {
        // Custom pieces get short random paths, including degenerate ones.
        let custom_path = (shape == Shape::Custom)
            .then(|| path.into_iter().map(|(px, py)| Vector2::new(px, py)).collect());
        Furniture {
            id: "p".into(),
            name: "piece".into(),
            kind: "prop".into(),
            shape,
            width,
            depth,
            height: 50.0,
            x,
            y,
            rotation,
            custom_path,
            color: None,
        }
    }
}

prop_compose! {
    fn door()(
        wall in prop_oneof![Just(Wall::North), Just(Wall::South), Just(Wall::East), Just(Wall::West)],
        hinge in prop_oneof![Just(Hinge::Left), Just(Hinge::Right)],
        inward in any::<bool>(),
        position in 0.0..=1.0f64,
        width in 60.0..120.0f64,
        swing_angle in 1.0..=180.0f64,
    ) -> Door {
        Door {
            id: "d".into(),
            width,
            height: 200.0,
            wall,
            position,
            swing_direction: if inward { SwingDirection::Inward } else { SwingDirection::Outward },
            swing_angle,
            hinge,
        }
    }
}

fn point() -> impl Strategy<Value = Vector2<f64>> {
    (-1e3..1e3f64, -1e3..1e3f64).prop_map(|(x, y)| Vector2::new(x, y))
}

proptest! {
    #[test]
    fn rotation_by_zero_is_identity(p in point(), c in point()) {
        prop_assert!((rotate_point(p, c, 0.0) - p).norm() < 1e-9);
    }

    #[test]
    fn rotation_round_trips(p in point(), c in point(), th in -720.0..720.0f64) {
        let back = rotate_point(rotate_point(p, c, th), c, -th);
        prop_assert!((back - p).norm() < 1e-7);
    }

    #[test]
    fn outline_point_counts(f in furniture()) {
        let expected = match f.shape {
            Shape::Rectangle => 4,
            Shape::Circle => 16,
            Shape::LShape => 6,
            Shape::Custom => f.custom_path.as_ref().map_or(0, Vec::len),
        };
        prop_assert_eq!(furniture_outline(&f).len(), expected);
    }

    #[test]
    fn outline_follows_translation(f in furniture(), dx in -200.0..200.0f64, dy in -200.0..200.0f64) {
        let mut g = f.clone();
        g.x += dx;
        g.y += dy;
        let shift = Vector2::new(dx, dy);
        for (p, q) in furniture_outline(&f).iter().zip(furniture_outline(&g).iter()) {
            prop_assert!((p + shift - q).norm() < 1e-7);
        }
    }

    #[test]
    fn collision_is_symmetric(a in furniture(), b in furniture()) {
        prop_assert_eq!(furniture_collision(&a, &b), furniture_collision(&b, &a));
        prop_assert_eq!(
            furniture_collision_with(&a, &b, IntersectionMode::EdgeCrossing),
            furniture_collision_with(&b, &a, IntersectionMode::EdgeCrossing)
        );
    }

    #[test]
    fn edge_crossing_detects_superset(a in furniture(), b in furniture()) {
        if furniture_collision(&a, &b) {
            prop_assert!(furniture_collision_with(&a, &b, IntersectionMode::EdgeCrossing));
        }
    }

    #[test]
    fn efficiency_is_bounded(
        items in prop::collection::vec(furniture(), 0..12),
        length in 1.0..20.0f64,
        width in 1.0..20.0f64,
    ) {
        let e = space_efficiency(&items, &RoomDimensions::new(length, width, 2.4));
        prop_assert!((0.0..=100.0).contains(&e));
        if items.is_empty() {
            prop_assert_eq!(e, 0.0);
        }
    }

    #[test]
    fn swing_arc_sampling(d in door(), length in 1.0..20.0f64, width in 1.0..20.0f64) {
        let dims = RoomDimensions::new(length, width, 2.4);
        let path = door_swing_path(&d, &dims);
        prop_assert_eq!(path.len(), swing_steps(d.swing_angle) + 1);
        prop_assert!(path.len() >= 11);
        let hinge = roomplan::door::door_hinge(&d, &dims);
        for p in &path {
            prop_assert!(((p - hinge).norm() - d.width).abs() < 1e-7);
        }
    }
}
