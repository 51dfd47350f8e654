use crate::types::DType;
use thiserror::Error;

/// Broad category of a [`ReductorError`].
///
/// Lets callers distinguish shape problems (bad axes, mismatched operands)
/// from arity problems (nothing to fold) without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Axis out of range, duplicate axis, mismatched or oversized shapes, bad location.
    Shape,
    /// The combining function cannot be applied to the number of elements folded.
    Arity,
    /// Tensor construction failed.
    Creation,
    /// The tensor holds a different element type than the one requested.
    DataType,
    /// Broken internal invariant.
    Internal,
}

/// Custom error type for Reductor.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ReductorError {
    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    #[error("Duplicate axis {axis} in reduction axes")]
    DuplicateAxis { axis: usize },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Shape {shape:?} has more elements than usize can address")]
    ShapeOverflow { shape: Vec<usize> },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Operation '{operation}' needs at least {required} element(s) to fold, got {actual}")]
    ArityMismatch {
        operation: String,
        required: usize,
        actual: usize,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Data type mismatch for operation '{operation}': expected {expected:?}, got {actual:?}")]
    DataTypeMismatch {
        expected: DType,
        actual: DType,
        operation: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ReductorError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReductorError::InvalidAxis { .. }
            | ReductorError::DuplicateAxis { .. }
            | ReductorError::ShapeMismatch { .. }
            | ReductorError::ShapeOverflow { .. }
            | ReductorError::IndexOutOfBounds { .. } => ErrorKind::Shape,
            ReductorError::ArityMismatch { .. } => ErrorKind::Arity,
            ReductorError::TensorCreationError { .. } => ErrorKind::Creation,
            ReductorError::DataTypeMismatch { .. } => ErrorKind::DataType,
            ReductorError::InternalError(_) => ErrorKind::Internal,
        }
    }
}
