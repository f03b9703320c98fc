use crate::geom::Point;

/// Literal reduction step.
///
/// 1. Keep the prefix of `polygon` up to (excluding) the first vertex equal
///    to `ear_vertex`.
/// 2. For `i in 0..n-2`: if position `i` of the partial result equals
///    `polygon[0]`, append `polygon[i + 2]`. Positions the partial result does
///    not have yet never match.
///
/// With distinct vertices only `i == 0` can match, so the result is
/// `polygon[..k]` followed by `polygon[2]` when the ear sits at `k >= 1`, and
/// empty when the ear is `polygon[0]`. It has `n - 1` vertices exactly when the
/// ear sits at `n - 2`; the driver refuses every other outcome.
pub fn remove_ear(ear_vertex: &Point, polygon: &[Point]) -> Vec<Point> {
    let n = polygon.len();
    let mut reduced: Vec<Point> = polygon
        .iter()
        .take_while(|v| *v != ear_vertex)
        .copied()
        .collect();
    let Some(first) = polygon.first().copied() else {
        return reduced;
    };
    for i in 0..n.saturating_sub(2) {
        if reduced.get(i) == Some(&first) {
            reduced.push(polygon[i + 2]);
        }
    }
    reduced
}

/// Polygon without the vertex at `i` (canonical reduction).
pub fn remove_at(i: usize, polygon: &[Point]) -> Vec<Point> {
    let mut reduced = Vec::with_capacity(polygon.len().saturating_sub(1));
    reduced.extend_from_slice(&polygon[..i.min(polygon.len())]);
    if i < polygon.len() {
        reduced.extend_from_slice(&polygon[i + 1..]);
    }
    reduced
}
