//! Error types for polygon operations.

use crate::primitives::Point;
use thiserror::Error;

/// Contract violations raised by polygon operations.
///
/// Degenerate geometry is never an error; these only cover arguments that
/// cannot be satisfied for the given polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// The requested split point is not a stored vertex.
    #[error("point ({}, {}) is not a vertex of the polygon", .0.x, .0.y)]
    VertexNotFound(Point),

    /// The requested vertex index is past the end of the ring.
    #[error("vertex index {index} out of range for polygon with {len} points")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of stored points.
        len: usize,
    },
}

/// Result alias for fallible polygon operations.
pub type Result<T> = std::result::Result<T, PolygonError>;
