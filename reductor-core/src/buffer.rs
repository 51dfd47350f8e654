use std::sync::Arc;

use crate::types::DType;

/// Typed CPU storage behind a tensor.
///
/// The vector is wrapped in an `Arc` so that views (e.g. squeeze) share the
/// data instead of copying it. Writers go through `Arc::make_mut`, which copies
/// the vector only when it is shared.
#[derive(Debug, Clone)]
pub enum Buffer {
    /// Buffer holding f32 data.
    F32(Arc<Vec<f32>>),
    /// Buffer holding f64 data.
    F64(Arc<Vec<f64>>),
}

impl Buffer {
    /// Returns the data type stored in this buffer.
    pub fn dtype(&self) -> DType {
        match self {
            Buffer::F32(_) => DType::F32,
            Buffer::F64(_) => DType::F64,
        }
    }

    /// Number of elements physically stored.
    pub fn len(&self) -> usize {
        match self {
            Buffer::F32(data) => data.len(),
            Buffer::F64(data) => data.len(),
        }
    }

    /// Returns true if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
