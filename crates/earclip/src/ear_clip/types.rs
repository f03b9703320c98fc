//! Configuration and result types for the driver.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Triangle};

/// Which ear-clipping rules the driver follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipMode {
    /// Output-compatible reproduction of the reference procedure.
    #[default]
    Literal,
    /// Ear test and removal relative to the ear's own neighbours.
    Canonical,
}

impl ClipMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClipMode::Literal => "literal",
            ClipMode::Canonical => "canonical",
        }
    }
}

impl fmt::Display for ClipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ClipMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(ClipMode::Literal),
            "canonical" => Ok(ClipMode::Canonical),
            other => Err(format!("unknown clip mode `{other}`")),
        }
    }
}

/// Driver configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClipCfg {
    pub mode: ClipMode,
}

impl ClipCfg {
    #[inline]
    pub fn with_mode(mode: ClipMode) -> Self {
        Self { mode }
    }
}

/// Final state of a run: the emitted triangles (in order) and the vertices
/// left when the driver stopped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    pub triangles: Vec<Triangle>,
    pub remaining: Vec<Point>,
}

impl Triangulation {
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
    /// True if the driver ran out of vertices rather than out of ears.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining.len() < 3
    }
}
