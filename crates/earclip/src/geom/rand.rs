//! Random star-shaped polygons in the z = 0 plane.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, emit the vertices in increasing angle order.
//! - Every vertex sees the origin, so the polygon is simple and CCW.
//! - Determinism: a single `StdRng` seeded from `seed`.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Number of vertices (at least 3).
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.95] to keep every radius positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertices: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
        }
    }
}

/// Draw a simple CCW star-shaped polygon around the origin.
pub fn draw_star_polygon(cfg: StarCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    (0..n)
        .map(|k| {
            let th = (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Point::new(th.cos() * r, th.sin() * r, 0.0)
        })
        .collect()
}
