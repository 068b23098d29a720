//! 2x2 linear transformations.
//!
//! A matrix is applied to points relative to the intercept:
//!
//! ```text
//! | nx |   | a  b | | px |
//! | ny | = | c  d | | py |
//! ```
//!
//! The result is moved back into absolute pixels afterwards. Transforms are
//! always applied to the reference positions, so applying a matrix replaces
//! whatever transform was shown before rather than composing with it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ArrowPoints, Point};

/// A 2x2 matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}; {:?}, {:?}]", self.a, self.b, self.c, self.d)
    }
}

impl Matrix2 {
    pub const IDENTITY: Matrix2 = Matrix2::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Build a matrix from entries in `a, b, c, d` order.
    pub const fn from_row_major(entries: [f64; 4]) -> Self {
        Self::new(entries[0], entries[1], entries[2], entries[3])
    }

    /// Multiply a vector by this matrix.
    #[inline]
    pub fn apply(&self, v: Point) -> Point {
        Point::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Transform absolute points about `origin`.
    pub fn transform_about(&self, points: &ArrowPoints, origin: Point) -> ArrowPoints {
        points.map(|p| self.apply(p.relative_to(origin)).offset_by(origin))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
