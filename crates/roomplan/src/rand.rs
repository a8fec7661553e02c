//! Random room layouts (replay tokens for reproducible draws).
//!
//! Purpose
//! - Feed benchmarks and property tests with realistic scenes: room sizes in
//!   the editor's range, doors on random walls, furniture drawn from the
//!   template catalog with jittered size, position and rotation.
//!
//! Determinism
//! - A `ReplayToken { seed, index }` is mixed into a single `StdRng`; the same
//!   token always yields the same layout.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::templates;
use crate::model::{Door, Furniture, Hinge, RoomDimensions, RoomLayout, SwingDirection, Wall};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LayoutCfg {
    pub doors: usize,
    pub furniture: usize,
    /// Room length/width range in meters.
    pub side_m: (f64, f64),
    /// Relative size jitter applied to template defaults, clamped to `[0, 0.9]`.
    pub size_jitter: f64,
    /// Draw arbitrary rotations instead of multiples of 90°.
    pub free_rotation: bool,
}

impl Default for LayoutCfg {
    fn default() -> Self {
        Self {
            doors: 1,
            furniture: 8,
            side_m: (2.5, 8.0),
            size_jitter: 0.2,
            free_rotation: false,
        }
    }
}

/// Draw a layout. Furniture keeps its unrotated box inside the room when the
/// room is large enough; doors keep their leaf on the wall.
pub fn draw_layout(cfg: LayoutCfg, tok: ReplayToken) -> RoomLayout {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = (cfg.side_m.0.min(cfg.side_m.1), cfg.side_m.0.max(cfg.side_m.1));
    let side = |rng: &mut StdRng| {
        if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            lo
        }
    };
    let dimensions = RoomDimensions::new(side(&mut rng), side(&mut rng), 2.4);
    let ext = dimensions.extent_cm();

    let doors = (0..cfg.doors)
        .map(|k| {
            let wall = Wall::ALL[rng.gen_range(0..Wall::ALL.len())];
            let wall_len = if wall.is_horizontal() { ext.x } else { ext.y };
            let width = rng.gen_range(70.0..100.0_f64).min(wall_len);
            let max_pos = ((wall_len - width) / wall_len).max(0.0);
            Door {
                id: format!("door-{k}"),
                width,
                height: 200.0,
                wall,
                position: rng.gen::<f64>() * max_pos,
                swing_direction: if rng.gen_bool(0.8) {
                    SwingDirection::Inward
                } else {
                    SwingDirection::Outward
                },
                swing_angle: rng.gen_range(60.0..=180.0),
                hinge: if rng.gen_bool(0.5) {
                    Hinge::Left
                } else {
                    Hinge::Right
                },
            }
        })
        .collect();

    let jitter = cfg.size_jitter.clamp(0.0, 0.9);
    let catalog = templates();
    let furniture = (0..cfg.furniture)
        .map(|k| {
            let t = &catalog[rng.gen_range(0..catalog.len())];
            let mut f = Furniture::from_template(t, format!("{}-{k}", t.id), Vector2::zeros());
            f.width *= 1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * jitter;
            f.depth *= 1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * jitter;
            f.x = rng.gen::<f64>() * (ext.x - f.width).max(0.0);
            f.y = rng.gen::<f64>() * (ext.y - f.depth).max(0.0);
            f.rotation = if cfg.free_rotation {
                rng.gen_range(0.0..360.0)
            } else {
                90.0 * rng.gen_range(0..4) as f64
            };
            f
        })
        .collect();

    RoomLayout {
        id: None,
        name: format!("random-{}-{}", tok.seed, tok.index),
        dimensions,
        doors,
        furniture,
    }
}
