//! Planar geometry on 3D points (xy projection).
//!
//! Purpose
//! - Carry points as `(x, y, z)` triples while every predicate works on the
//!   xy-plane only. z is passed through untouched.
//! - Keep the predicates boundary-inclusive and free of tolerances: plain
//!   `f64` comparisons against zero.
//!
//! Code cross-refs: `ear_clip::{is_ear, is_ear_at}` consume the predicates,
//! `rand::draw_star_polygon` produces test and bench inputs.

mod predicates;
pub mod rand;
mod types;

pub use predicates::{cross_z, is_convex, is_in_triangle, signed_area};
pub use types::{default_polygon, Point, Triangle, DEFAULT_POLYGON};
