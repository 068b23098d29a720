//! Vertex markers and their hover highlight.

use std::fmt;
use std::str::FromStr;

use crate::config::SceneConfig;
use crate::error::{ArrowGridError, Result};
use crate::VERTEX_COUNT;

/// Identifies the marker drawn on one arrow vertex (`c0`..`c6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(usize);

impl MarkerId {
    /// Marker for vertex `index`, if the arrow has such a vertex.
    pub fn new(index: usize) -> Option<Self> {
        (index < VERTEX_COUNT).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// All markers in vertex order.
    pub fn all() -> impl Iterator<Item = MarkerId> {
        (0..VERTEX_COUNT).map(MarkerId)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl FromStr for MarkerId {
    type Err = ArrowGridError;

    fn from_str(s: &str) -> Result<Self> {
        s.strip_prefix('c')
            .and_then(|index| index.parse().ok())
            .and_then(MarkerId::new)
            .ok_or_else(|| ArrowGridError::UnknownMarker(s.to_string()))
    }
}

/// Visual state of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Off,
    On,
}

impl Highlight {
    /// The fill color for this state.
    pub fn fill(self, config: &SceneConfig) -> &str {
        match self {
            Highlight::On => &config.highlight_fill,
            Highlight::Off => &config.default_fill,
        }
    }
}
