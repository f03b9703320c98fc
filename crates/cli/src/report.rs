//! Result printer and JSON document for a finished triangulation.

use std::io::{self, Write};
use std::path::Path;

use earclip::{ClipMode, Point, Triangle, Triangulation};
use serde::Serialize;

/// `(x, y, z)` using the shortest round-trip form of each coordinate.
pub fn format_point(p: &Point) -> String {
    format!("({}, {}, {})", p.x, p.y, p.z)
}

/// `Triangle: (x, y, z) (x, y, z) (x, y, z)`
pub fn format_triangle(t: &Triangle) -> String {
    format!(
        "Triangle: {} {} {}",
        format_point(&t[0]),
        format_point(&t[1]),
        format_point(&t[2])
    )
}

/// One line per triangle, in emission order.
pub fn write_triangles<W: Write>(mut w: W, triangles: &[Triangle]) -> io::Result<()> {
    for t in triangles {
        writeln!(w, "{}", format_triangle(t))?;
    }
    w.flush()
}

/// Serialized form written by `--out`: run parameters plus the result.
#[derive(Debug, Serialize)]
pub struct TriangulationDoc {
    pub earclip_version: &'static str,
    pub mode: String,
    pub input: Option<String>,
    pub vertices: usize,
    pub triangles: Vec<[[f64; 3]; 3]>,
    pub remaining: Vec<[f64; 3]>,
}

fn coords(p: &Point) -> [f64; 3] {
    [p.x, p.y, p.z]
}

impl TriangulationDoc {
    /// `vertices` is the input vertex count; `input` is `None` for the built-in polygon.
    pub fn new(
        mode: ClipMode,
        input: Option<&Path>,
        vertices: usize,
        out: &Triangulation,
    ) -> Self {
        Self {
            earclip_version: earclip::VERSION,
            mode: mode.to_string(),
            input: input.map(|p| p.to_string_lossy().into_owned()),
            vertices,
            triangles: out
                .triangles
                .iter()
                .map(|t| [coords(&t[0]), coords(&t[1]), coords(&t[2])])
                .collect(),
            remaining: out.remaining.iter().map(coords).collect(),
        }
    }
}
