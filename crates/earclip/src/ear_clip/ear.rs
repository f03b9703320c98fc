use crate::geom::{is_convex, is_in_triangle, Point};

#[inline]
fn prev_index(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

#[inline]
fn next_index(i: usize, n: usize) -> usize {
    (i + 1) % n
}

/// Literal ear test.
///
/// `vertex` is disqualified if it lies inside-or-on the corner triangle
/// `(prev, current, next)` of any convex corner of the polygon, its own corner
/// included. In practice only vertices whose corner and both neighbouring
/// corners are reflex can qualify.
pub fn is_ear(vertex: &Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    !(0..n).any(|i| {
        let prev = &polygon[prev_index(i, n)];
        let current = &polygon[i];
        let next = &polygon[next_index(i, n)];
        is_convex(prev, current, next) && is_in_triangle(vertex, prev, current, next)
    })
}

/// First vertex (in sequence order) accepted by `is_ear`.
pub fn find_ear(polygon: &[Point]) -> Option<Point> {
    polygon.iter().find(|v| is_ear(v, polygon)).copied()
}

/// Textbook ear test at index `i`: the corner is convex and no other vertex
/// lies inside-or-on its triangle.
pub fn is_ear_at(i: usize, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 || i >= n {
        return false;
    }
    let (ip, inx) = (prev_index(i, n), next_index(i, n));
    let (prev, ear, next) = (&polygon[ip], &polygon[i], &polygon[inx]);
    if !is_convex(prev, ear, next) {
        return false;
    }
    polygon
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != ip && j != i && j != inx)
        .all(|(_, p)| !is_in_triangle(p, prev, ear, next))
}

/// First index accepted by `is_ear_at`.
pub fn find_ear_index(polygon: &[Point]) -> Option<usize> {
    (0..polygon.len()).find(|&i| is_ear_at(i, polygon))
}
