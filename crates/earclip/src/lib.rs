//! Ear-clipping triangulation of simple planar polygons.
//!
//! Layout
//! - `geom`: point/polygon types, orientation predicates, random polygons.
//! - `ear_clip`: ear classifier, ear locator, polygon reducer and the driver
//!   that owns the triangulation state.
//!
//! API Policy
//! - The crate serves the workspace `cli`. There is no stable public API;
//!   prefer clarity over compatibility when changing it.

pub mod ear_clip;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ear_clip::{triangulate, ClipCfg, ClipMode, Triangulation, Triangulator};
pub use geom::{default_polygon, Point, Triangle};
