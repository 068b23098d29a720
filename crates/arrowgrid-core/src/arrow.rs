//! Reference positions of the arrow polygon.
//!
//! Vertices are numbered as below. The arrow is centered on the intercept,
//! tip up, and sized in whole grid squares.
//!
//! ```text
//!          p0
//!          /\
//!         /  \
//!        /    \
//!       /      \
//!   p1 /__p2  __\p6
//!         |  |p5
//!         |  |
//!         |  |
//!         |__|
//!        p3  p4
//! ```

use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::{ArrowPoints, Point};

/// Proportions of the arrow in grid squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowShape {
    /// Half-width of the arrow head
    pub width_cells: u32,
    /// Total height from tip to tail
    pub height_cells: u32,
}

impl Default for ArrowShape {
    fn default() -> Self {
        Self {
            width_cells: 3,
            height_cells: 8,
        }
    }
}

/// Compute the untransformed arrow for a layout.
///
/// The shaft is always two squares wide. The result is the base for every
/// matrix transform until the next resize.
pub fn reference_positions(layout: &Layout, shape: &ArrowShape) -> ArrowPoints {
    let s = f64::from(layout.square_size);
    let Point { x: cx, y: cy } = layout.intercept();
    let head = f64::from(shape.width_cells) * s;
    let tail = f64::from(shape.height_cells) * s;
    // shifts the arrow up so its vertical midpoint lands on the intercept
    let offset = f64::from(shape.height_cells) / 2.0 * s;

    [
        Point::new(cx, cy - offset),
        Point::new(cx - head, cy + head - offset),
        Point::new(cx - s, cy + head - offset),
        Point::new(cx - s, cy + tail - offset),
        Point::new(cx + s, cy + tail - offset),
        Point::new(cx + s, cy + head - offset),
        Point::new(cx + head, cy + head - offset),
    ]
}
