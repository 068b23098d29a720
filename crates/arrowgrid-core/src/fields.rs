//! Input field identifiers and numeric field text.
//!
//! There are 14 coordinate fields (`p{0..6}-input-{x,y}`) and 4 matrix
//! fields (`matrix-row-{0,1}-col-{0,1}`). Field text is parsed explicitly:
//! anything that is not a finite number is an error rather than a value
//! that silently corrupts the shape.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArrowGridError, Result};
use crate::VERTEX_COUNT;

/// Identifies one numeric input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// x coordinate of vertex `n`, relative to the intercept.
    PointX(usize),
    /// y coordinate of vertex `n`, relative to the intercept.
    PointY(usize),
    /// One entry of the 2x2 transformation matrix.
    Matrix { row: usize, col: usize },
}

/// Matrix fields in `a, b, c, d` order (row-major).
pub const MATRIX_FIELDS: [FieldId; 4] = [
    FieldId::Matrix { row: 0, col: 0 },
    FieldId::Matrix { row: 0, col: 1 },
    FieldId::Matrix { row: 1, col: 0 },
    FieldId::Matrix { row: 1, col: 1 },
];

impl FieldId {
    /// The (x, y) field pair for a vertex.
    pub fn coordinate_pair(index: usize) -> (FieldId, FieldId) {
        (FieldId::PointX(index), FieldId::PointY(index))
    }

    /// All 14 coordinate fields, x before y, vertex by vertex.
    pub fn coordinate_fields() -> impl Iterator<Item = FieldId> {
        (0..VERTEX_COUNT).flat_map(|i| [FieldId::PointX(i), FieldId::PointY(i)])
    }

    /// The vertex this field belongs to, if it is a coordinate field.
    pub fn vertex(self) -> Option<usize> {
        match self {
            FieldId::PointX(i) | FieldId::PointY(i) => Some(i),
            FieldId::Matrix { .. } => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::PointX(i) => write!(f, "p{i}-input-x"),
            FieldId::PointY(i) => write!(f, "p{i}-input-y"),
            FieldId::Matrix { row, col } => write!(f, "matrix-row-{row}-col-{col}"),
        }
    }
}

impl FromStr for FieldId {
    type Err = ArrowGridError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || ArrowGridError::UnknownField(s.to_string());

        if let Some(rest) = s.strip_prefix("matrix-row-") {
            let (row, col) = rest.split_once("-col-").ok_or_else(unknown)?;
            let row: usize = row.parse().map_err(|_| unknown())?;
            let col: usize = col.parse().map_err(|_| unknown())?;
            if row > 1 || col > 1 {
                return Err(unknown());
            }
            return Ok(FieldId::Matrix { row, col });
        }

        let rest = s.strip_prefix('p').ok_or_else(unknown)?;
        let (index, axis) = rest.split_once("-input-").ok_or_else(unknown)?;
        let index: usize = index.parse().map_err(|_| unknown())?;
        if index >= VERTEX_COUNT {
            return Err(unknown());
        }
        match axis {
            "x" => Ok(FieldId::PointX(index)),
            "y" => Ok(FieldId::PointY(index)),
            _ => Err(unknown()),
        }
    }
}

/// Parse the text of a field into a finite number.
///
/// Surrounding whitespace is ignored. Empty text, non-numeric text and
/// values such as `NaN` or `inf` are rejected.
pub fn parse_number(field: FieldId, text: &str) -> Result<f64> {
    let invalid = || ArrowGridError::InvalidNumber {
        field,
        text: text.to_string(),
    };

    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Format a number for display in a field.
///
/// Uses the shortest text that parses back to the same value, so whole
/// numbers render without a trailing `.0`. Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
