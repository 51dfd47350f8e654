use crate::buffer::Buffer;
use num_traits::{Float, FromPrimitive, NumCast};
use std::fmt::Debug;
use std::sync::Arc;

/// Defines the possible data types for Tensor elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Element types a `Tensor` can hold.
///
/// Ties a Rust scalar type to its [`DType`] tag and to the matching
/// [`Buffer`] variant, so generic kernels can borrow typed data out of a
/// dtype-erased tensor. Implemented for `f32` and `f64` only.
pub trait Element:
    Float + FromPrimitive + NumCast + Debug + Default + Send + Sync + 'static + sealed::Sealed
{
    /// The runtime tag for this element type.
    const DTYPE: DType;

    /// Borrows the typed vector if `buffer` holds this element type.
    fn from_buffer(buffer: &Buffer) -> Option<&Arc<Vec<Self>>>;

    /// Mutably borrows the typed vector if `buffer` holds this element type.
    fn from_buffer_mut(buffer: &mut Buffer) -> Option<&mut Arc<Vec<Self>>>;

    /// Wraps a typed vector into a buffer.
    fn into_buffer(data: Vec<Self>) -> Buffer;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    fn from_buffer(buffer: &Buffer) -> Option<&Arc<Vec<Self>>> {
        match buffer {
            Buffer::F32(data) => Some(data),
            _ => None,
        }
    }

    fn from_buffer_mut(buffer: &mut Buffer) -> Option<&mut Arc<Vec<Self>>> {
        match buffer {
            Buffer::F32(data) => Some(data),
            _ => None,
        }
    }

    fn into_buffer(data: Vec<Self>) -> Buffer {
        Buffer::F32(Arc::new(data))
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    fn from_buffer(buffer: &Buffer) -> Option<&Arc<Vec<Self>>> {
        match buffer {
            Buffer::F64(data) => Some(data),
            _ => None,
        }
    }

    fn from_buffer_mut(buffer: &mut Buffer) -> Option<&mut Arc<Vec<Self>>> {
        match buffer {
            Buffer::F64(data) => Some(data),
            _ => None,
        }
    }

    fn into_buffer(data: Vec<Self>) -> Buffer {
        Buffer::F64(Arc::new(data))
    }
}
