//! Error types for scene construction and user input.

use thiserror::Error;

use crate::fields::FieldId;

/// Errors raised while building the grid or applying user edits.
///
/// Every variant is raised before any state is mutated, so a failed
/// operation leaves the scene exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArrowGridError {
    /// A field held text that is not a finite number.
    #[error("Field {field} does not contain a number: {text:?}")]
    InvalidNumber { field: FieldId, text: String },

    /// A matrix mapped a vertex outside the range of finite numbers.
    #[error("Matrix {matrix} moves vertex p{vertex} to a non-finite position")]
    NonFiniteResult { matrix: String, vertex: usize },

    /// A single-field edit named a matrix field.
    #[error("Field {0} is not a vertex coordinate")]
    NotCoordinateField(FieldId),

    /// The field source has no element for this field.
    #[error("Field {0} is missing")]
    MissingField(FieldId),

    /// A DOM id that does not name any coordinate or matrix field.
    #[error("Unknown field id: {0}")]
    UnknownField(String),

    /// A DOM id that does not name any vertex marker.
    #[error("Unknown marker id: {0}")]
    UnknownMarker(String),

    /// The grid cannot be built with zero-sized squares.
    #[error("Square size must be greater than zero")]
    ZeroSquareSize,

    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArrowGridError>;
