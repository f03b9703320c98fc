//! Triangulate a few random star polygons in both modes and print counts.
//!
//! Usage:
//!   cargo run -p earclip --example star_polygons -- 12
//!
//! The optional argument is the vertex count (default 12).

use earclip::geom::rand::{draw_star_polygon, StarCfg};
use earclip::geom::signed_area;
use earclip::{triangulate, ClipCfg, ClipMode};

fn main() {
    let vertices = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(12);
    let cfg = StarCfg {
        vertices,
        ..StarCfg::default()
    };
    for seed in 0..5u64 {
        let poly = draw_star_polygon(cfg, seed);
        let area = signed_area(&poly);
        for mode in [ClipMode::Literal, ClipMode::Canonical] {
            let out = triangulate(&poly, ClipCfg::with_mode(mode));
            let covered: f64 = out.triangles.iter().map(|t| signed_area(&t[..])).sum();
            println!(
                "seed {seed} {mode:>9}: n={}, triangles={}, remaining={}, area={area:.4}, covered={covered:.4}",
                poly.len(),
                out.len(),
                out.remaining.len(),
            );
        }
    }
}
