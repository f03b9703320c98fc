//! Basic point and triangle types.
//!
//! - `Point`: `nalgebra::Point3<f64>`; equality is exact component-wise.
//! - `Triangle`: three points in emission order, never mutated afterwards.

use nalgebra::Point3;

/// Polygon vertex. z is carried but ignored by every predicate.
pub type Point = Point3<f64>;

/// Triangle as emitted by the driver.
pub type Triangle = [Point; 3];

/// Built-in input polygon (pentagon in the z = 0 plane, CCW).
pub const DEFAULT_POLYGON: [[f64; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.5, 1.5, 0.0],
    [0.0, 1.0, 0.0],
];

/// `DEFAULT_POLYGON` as a vertex list.
pub fn default_polygon() -> Vec<Point> {
    DEFAULT_POLYGON
        .iter()
        .map(|&[x, y, z]| Point::new(x, y, z))
        .collect()
}
