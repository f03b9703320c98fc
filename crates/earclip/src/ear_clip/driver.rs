//! Triangulation driver: owns the current polygon and the emitted triangles.

use crate::geom::{Point, Triangle};

use super::ear::{find_ear, find_ear_index};
use super::reduce::{remove_at, remove_ear};
use super::types::{ClipCfg, ClipMode, Triangulation};

/// Single-run triangulation state.
///
/// Invariants:
/// - `triangles.len() == initial_len - polygon.len()`.
/// - Every accepted step removes exactly one vertex and appends one triangle.
#[derive(Clone, Debug)]
pub struct Triangulator {
    polygon: Vec<Point>,
    triangles: Vec<Triangle>,
    cfg: ClipCfg,
}

impl Triangulator {
    pub fn new(polygon: Vec<Point>, cfg: ClipCfg) -> Self {
        let capacity = polygon.len().saturating_sub(2);
        Self {
            polygon,
            triangles: Vec::with_capacity(capacity),
            cfg,
        }
    }

    #[inline]
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// One driver step. Returns false when no further reduction is possible;
    /// the state is left untouched in that case.
    pub fn process_polygon(&mut self) -> bool {
        match self.cfg.mode {
            ClipMode::Literal => self.step_literal(),
            ClipMode::Canonical => self.step_canonical(),
        }
    }

    fn step_literal(&mut self) -> bool {
        let n = self.polygon.len();
        if n < 3 {
            return false;
        }
        let Some(ear) = find_ear(&self.polygon) else {
            tracing::debug!(vertices = n, "no ear found");
            return false;
        };
        let reduced = remove_ear(&ear, &self.polygon);
        if reduced.len() + 1 != n {
            tracing::debug!(
                vertices = n,
                reduced = reduced.len(),
                ear = ?ear,
                "reduction does not remove exactly one vertex; stopping"
            );
            return false;
        }
        tracing::trace!(vertices = n, ear = ?ear, "clip");
        self.triangles.push([self.polygon[0], ear, self.polygon[1]]);
        self.polygon = reduced;
        true
    }

    fn step_canonical(&mut self) -> bool {
        let n = self.polygon.len();
        if n < 3 {
            return false;
        }
        let Some(i) = find_ear_index(&self.polygon) else {
            tracing::debug!(vertices = n, "no ear found");
            return false;
        };
        tracing::trace!(vertices = n, index = i, "clip");
        self.triangles.push([
            self.polygon[(i + n - 1) % n],
            self.polygon[i],
            self.polygon[(i + 1) % n],
        ]);
        self.polygon = remove_at(i, &self.polygon);
        true
    }

    /// Step until fewer than three vertices remain or a step fails.
    pub fn run(mut self) -> Triangulation {
        while self.polygon.len() >= 3 {
            if !self.process_polygon() {
                break;
            }
        }
        tracing::debug!(
            mode = %self.cfg.mode,
            triangles = self.triangles.len(),
            remaining = self.polygon.len(),
            "triangulation finished"
        );
        Triangulation {
            triangles: self.triangles,
            remaining: self.polygon,
        }
    }
}

/// Triangulate `polygon` with the given configuration.
pub fn triangulate(polygon: &[Point], cfg: ClipCfg) -> Triangulation {
    Triangulator::new(polygon.to_vec(), cfg).run()
}
