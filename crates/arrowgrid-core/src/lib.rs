//! ArrowGrid Core - Linear transformation teaching interactive
//!
//! This crate provides the platform-independent logic behind ArrowGrid: a
//! square grid sized to the viewport, an arrow-shaped polygon drawn on it,
//! and the rules that keep the polygon, its vertex markers and the numeric
//! input fields in agreement while the user edits coordinates or applies a
//! 2x2 matrix.
//!
//! # Coordinate System
//!
//! - Points are stored in absolute pixels, origin at the container's top-left
//! - The grid center (the "intercept") is the logical origin shown to users
//! - y grows downwards, as in the browser

pub mod arrow;
pub mod config;
pub mod error;
pub mod fields;
pub mod layout;
pub mod log;
pub mod marker;
pub mod matrix;
pub mod scene;
pub mod sync;

pub use arrow::{reference_positions, ArrowShape};
pub use config::SceneConfig;
pub use error::{ArrowGridError, Result};
pub use fields::FieldId;
pub use layout::Layout;
pub use marker::{Highlight, MarkerId};
pub use matrix::Matrix2;
pub use scene::Scene;
pub use sync::{FieldSource, RenderSink};

/// Number of vertices on the arrow polygon.
pub const VERTEX_COUNT: usize = 7;

/// The arrow's vertices in polygon order, p0 (tip) through p6.
pub type ArrowPoints = [Point; VERTEX_COUNT];

/// A 2D coordinate in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Express this absolute point relative to `origin`.
    #[inline]
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// Turn a point relative to `origin` back into absolute pixels.
    #[inline]
    pub fn offset_by(self, origin: Point) -> Point {
        Point::new(self.x + origin.x, self.y + origin.y)
    }
}
