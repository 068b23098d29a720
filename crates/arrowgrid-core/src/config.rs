//! Scene configuration.
//!
//! Every field has a default, so hosts only pass what they want to change.
//! In the browser the configuration arrives as a plain JS object.

use serde::{Deserialize, Serialize};

use crate::arrow::ArrowShape;
use crate::error::{ArrowGridError, Result};

/// Fill applied to a marker while the pointer is over its row.
pub const DEFAULT_HIGHLIGHT_FILL: &str = "#FF7043";
/// Fill applied to a marker at rest.
pub const DEFAULT_MARKER_FILL: &str = "#000";
/// Side length of one grid square in pixels.
pub const DEFAULT_SQUARE_SIZE: u32 = 20;

/// Tunable parameters for the grid, the arrow and the marker colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Side length of a grid square in pixels
    pub square_size: u32,
    /// Arrow proportions in grid squares
    pub arrow: ArrowShape,
    /// Marker fill while highlighted
    pub highlight_fill: String,
    /// Marker fill at rest
    pub default_fill: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            arrow: ArrowShape::default(),
            highlight_fill: DEFAULT_HIGHLIGHT_FILL.to_string(),
            default_fill: DEFAULT_MARKER_FILL.to_string(),
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject configurations the grid cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.square_size == 0 {
            return Err(ArrowGridError::ZeroSquareSize);
        }
        if self.arrow.width_cells == 0 || self.arrow.height_cells == 0 {
            return Err(ArrowGridError::InvalidConfig(
                "arrow width and height must be at least one square".to_string(),
            ));
        }
        if self.highlight_fill.trim().is_empty() || self.default_fill.trim().is_empty() {
            return Err(ArrowGridError::InvalidConfig(
                "marker fills must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
