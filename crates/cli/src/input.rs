use anyhow::{Context, Result};
use earclip::Point;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Polygon file: `{ "vertices": [[x, y, z], ...] }` in boundary order.
#[derive(Debug, Deserialize)]
struct PolygonFile {
    vertices: Vec<[f64; 3]>,
}

/// Parse a polygon document. Fewer than three vertices is not an error here;
/// the driver treats it as an empty triangulation.
pub fn parse_polygon(text: &str) -> Result<Vec<Point>> {
    let file: PolygonFile = serde_json::from_str(text).context("parsing polygon JSON")?;
    Ok(file
        .vertices
        .into_iter()
        .map(|[x, y, z]| Point::new(x, y, z))
        .collect())
}

pub fn load_polygon<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_polygon(&text).with_context(|| format!("loading polygon from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_vertices_in_order() {
        let poly = parse_polygon(r#"{"vertices": [[0, 0, 0], [1, 0, 0.5], [0, 1, 0]]}"#).unwrap();
        assert_eq!(
            poly,
            vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.5),
                Point::new(0.0, 1.0, 0.0)
            ]
        );
    }

    #[test]
    fn short_polygon_is_accepted() {
        assert!(parse_polygon(r#"{"vertices": []}"#).unwrap().is_empty());
    }

    #[test]
    fn rejects_two_component_vertices() {
        assert!(parse_polygon(r#"{"vertices": [[0, 0]]}"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = load_polygon(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }
}
