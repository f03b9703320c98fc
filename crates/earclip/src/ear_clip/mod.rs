//! Ear clipping: classifier, locator, reducer and driver.
//!
//! Purpose
//! - `ClipMode::Literal` reproduces the reference procedure bit for bit:
//!   the ear test checks the query vertex against the corner triangle at
//!   every polygon position, and reduction/emission anchor on positions 0
//!   and 1 of the polygon instead of the ear's neighbours.
//! - `ClipMode::Canonical` is textbook ear clipping (own-neighbour test,
//!   removal by index, `[prev, ear, next]` triangles).
//!
//! Termination
//! - An accepted step shrinks the polygon by exactly one vertex. A literal
//!   reduction that would not do so (ear at index 0, before n - 3, at n - 3
//!   where two vertices would go, or last) is refused and ends the run,
//!   keeping the triangles emitted so far.
//!
//! Code cross-refs: `geom::{is_convex, is_in_triangle}`.

mod driver;
mod ear;
mod reduce;
mod types;

pub use driver::{triangulate, Triangulator};
pub use ear::{find_ear, find_ear_index, is_ear, is_ear_at};
pub use reduce::{remove_at, remove_ear};
pub use types::{ClipCfg, ClipMode, Triangulation};
