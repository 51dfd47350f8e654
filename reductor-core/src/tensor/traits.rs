// src/tensor/traits.rs

use crate::tensor::Tensor;
use crate::types::DType;
use std::sync::Arc;

impl Clone for Tensor {
    /// Clones the Tensor. This is a shallow clone that increases the reference count
    /// of the underlying shared data. Writes through one clone are visible
    /// through the others.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Tensor {
    /// Two tensors are equal if they have the same dtype, shape and elements
    /// in logical order. Strides and offsets are not compared, so a view equals
    /// a contiguous copy of itself.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        let self_guard = self.read_data();
        let other_guard = other.read_data();
        if self_guard.shape != other_guard.shape || self_guard.dtype != other_guard.dtype {
            return false;
        }
        match self_guard.dtype {
            DType::F32 => match (
                self_guard.to_contiguous_vec::<f32>(),
                other_guard.to_contiguous_vec::<f32>(),
            ) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            },
            DType::F64 => match (
                self_guard.to_contiguous_vec::<f64>(),
                other_guard.to_contiguous_vec::<f64>(),
            ) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            },
        }
    }
}
