use super::types::Point;

/// z-component of `(b − a) × (c − b)` in the xy-plane.
///
/// Positive for a left turn at `b`, negative for a right turn, zero when
/// collinear.
#[inline]
pub fn cross_z(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Convexity of the corner `a → b → c`; collinear corners count as convex.
#[inline]
pub fn is_convex(a: &Point, b: &Point, c: &Point) -> bool {
    cross_z(a, b, c) >= 0.0
}

/// Side of `p` relative to the directed edge `a → b` (`(b − a) × (p − a)`).
#[inline]
fn edge_side(a: &Point, b: &Point, p: &Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// True if `p` lies inside or on the boundary of triangle `abc`.
///
/// Assumes `a, b, c` in counter-clockwise order: `p` must be on the left of
/// (or on) each directed edge `ab`, `bc`, `ca`. A clockwise triangle contains
/// only points on its boundary lines, if any.
#[inline]
pub fn is_in_triangle(p: &Point, a: &Point, b: &Point, c: &Point) -> bool {
    edge_side(a, b, p) >= 0.0 && edge_side(b, c, p) >= 0.0 && edge_side(c, a, p) >= 0.0
}

/// Signed area of the closed polygon in the xy-plane (shoelace).
/// Positive for counter-clockwise order.
pub fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}
