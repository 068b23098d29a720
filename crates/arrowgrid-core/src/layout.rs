//! Grid geometry derived from the viewport.
//!
//! The grid is the largest whole number of squares that fits the viewport
//! symmetrically about its center:
//!
//! ```text
//! x_num_squares   = floor(viewport_width / square_size)
//! x_intercept     = floor(x_num_squares / 2) * square_size
//! container_width = 2 * x_intercept
//! ```
//!
//! and the same for the vertical axis. The container is therefore always an
//! even number of squares wide and tall, and the intercept sits exactly on a
//! grid line.

use serde::{Deserialize, Serialize};

use crate::error::{ArrowGridError, Result};
use crate::Point;

/// Grid dimensions for one viewport size.
///
/// Recomputed on load and on every resize; read-only in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Side length of a grid square in pixels
    pub square_size: u32,
    /// Whole squares that fit the viewport width
    pub x_num_squares: u32,
    /// Whole squares that fit the viewport height
    pub y_num_squares: u32,
    /// Horizontal grid center in pixels
    pub x_intercept: u32,
    /// Vertical grid center in pixels
    pub y_intercept: u32,
    /// Container width in pixels (`2 * x_intercept`)
    pub container_width: u32,
    /// Container height in pixels (`2 * y_intercept`)
    pub container_height: u32,
    /// Margin above the container that centers it vertically
    pub top_margin: f64,
}

impl Layout {
    /// Compute the grid for a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ArrowGridError::ZeroSquareSize`] if `square_size` is zero.
    pub fn compute(viewport_width: u32, viewport_height: u32, square_size: u32) -> Result<Self> {
        if square_size == 0 {
            return Err(ArrowGridError::ZeroSquareSize);
        }

        let x_num_squares = viewport_width / square_size;
        let x_intercept = (x_num_squares / 2) * square_size;
        let container_width = x_intercept * 2;

        let y_num_squares = viewport_height / square_size;
        let y_intercept = (y_num_squares / 2) * square_size;
        let container_height = y_intercept * 2;

        let top_margin = (f64::from(viewport_height) - f64::from(container_height)) / 2.0;

        crate::log::debug!(
            viewport_width,
            viewport_height,
            container_width,
            container_height,
            "computed grid layout"
        );

        Ok(Self {
            square_size,
            x_num_squares,
            y_num_squares,
            x_intercept,
            y_intercept,
            container_width,
            container_height,
            top_margin,
        })
    }

    /// The grid center as a point; the logical origin shown to users.
    #[inline]
    pub fn intercept(&self) -> Point {
        Point::new(f64::from(self.x_intercept), f64::from(self.y_intercept))
    }

    /// CSS `background-size` for the four-layer grid background.
    ///
    /// The first two layers draw the axes (one tile per quadrant), the last
    /// two draw the square grid lines.
    pub fn background_size(&self) -> String {
        let (xi, yi, s) = (self.x_intercept, self.y_intercept, self.square_size);
        format!("{xi}px {yi}px, {xi}px {yi}px, {s}px {s}px, {s}px {s}px")
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
