use anyhow::{Context, Result};
use clap::Parser;
use earclip::{default_polygon, triangulate, ClipCfg, ClipMode, Point};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Ear-clipping triangulation of a simple planar polygon")]
struct Cmd {
    /// Ear-clipping rules: `literal` (output-compatible) or `canonical`
    #[arg(long, default_value_t = ClipMode::Literal)]
    mode: ClipMode,

    /// Polygon JSON `{"vertices": [[x, y, z], ...]}`; built-in pentagon if omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Also write the triangulation and its run parameters as JSON
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(cmd)
}

fn run(cmd: Cmd) -> Result<()> {
    let polygon: Vec<Point> = match &cmd.input {
        Some(path) => input::load_polygon(path)?,
        None => default_polygon(),
    };
    let vertices = polygon.len();
    tracing::info!(
        mode = %cmd.mode,
        vertices,
        signed_area = earclip::geom::signed_area(&polygon),
        "triangulate"
    );

    let out = triangulate(&polygon, ClipCfg::with_mode(cmd.mode));
    tracing::info!(
        triangles = out.len(),
        remaining = out.remaining.len(),
        complete = out.is_complete(),
        "done"
    );

    report::write_triangles(std::io::stdout().lock(), &out.triangles)
        .context("writing triangles to stdout")?;

    if let Some(path) = &cmd.out {
        write_json(path, &cmd, vertices, &out)?;
    }
    Ok(())
}

fn write_json(
    path: &Path,
    cmd: &Cmd,
    vertices: usize,
    out: &earclip::Triangulation,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let doc = report::TriangulationDoc::new(cmd.mode, cmd.input.as_deref(), vertices, out);
    std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(out = %path.display(), "wrote");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn args_default_to_literal_builtin() {
        let cmd = Cmd::try_parse_from(["cli"]).unwrap();
        assert_eq!(cmd.mode, ClipMode::Literal);
        assert!(cmd.input.is_none() && cmd.out.is_none());
        assert!(Cmd::try_parse_from(["cli", "--mode", "fan"]).is_err());
        let cmd = Cmd::try_parse_from(["cli", "--mode", "Canonical"]).unwrap();
        assert_eq!(cmd.mode, ClipMode::Canonical);
    }

    #[test]
    fn run_writes_json_with_run_parameters() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("poly.json");
        std::fs::write(
            &input,
            r#"{"vertices": [[0,0,0],[1,0,0],[1,1,0],[0.5,1.5,0],[0,1,0]]}"#,
        )
        .unwrap();
        let out = dir.path().join("nested/tris.json");
        let cmd = Cmd::try_parse_from([
            "cli",
            "--mode",
            "canonical",
            "--input",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        run(cmd).unwrap();

        let doc: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["mode"], "canonical");
        assert_eq!(doc["triangles"].as_array().unwrap().len(), 3);
        assert_eq!(doc["vertices"], 5);
        assert_eq!(doc["input"], input.to_str().unwrap());
        assert_eq!(doc["earclip_version"], earclip::VERSION);
    }

    #[test]
    fn bad_input_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(&input, "not json").unwrap();
        let cmd = Cmd::try_parse_from(["cli", "--input", input.to_str().unwrap()]).unwrap();
        assert!(run(cmd).is_err());
    }
}
