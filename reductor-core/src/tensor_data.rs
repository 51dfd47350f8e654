// src/tensor_data.rs
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::error::ReductorError;
use crate::tensor::utils::{calculate_strides, checked_numel, numel};
use crate::types::{DType, Element};

/// Internal storage and metadata for a Tensor.
///
/// This struct holds the data buffer, shape, strides and data type.
/// It is typically wrapped in `Arc<RwLock<TensorData>>` by the `Tensor` struct
/// to allow shared ownership and interior mutability.
#[derive(Debug)]
pub struct TensorData {
    /// The underlying typed data buffer.
    /// Wrapped in Arc for cheap sharing between views.
    pub(crate) buffer: Arc<Buffer>,
    /// The data type of the elements in the buffer.
    pub(crate) dtype: DType,
    /// The shape (dimensions) of the tensor.
    pub(crate) shape: Vec<usize>,
    /// The strides for each dimension.
    /// Strides define the jump in memory required to move one step along a given dimension.
    pub(crate) strides: Vec<usize>,
    /// The offset into the buffer for the first element (used for views).
    pub(crate) offset: usize,
}

impl TensorData {
    /// Creates a new contiguous `TensorData` from typed data and a shape.
    ///
    /// # Errors
    /// Returns `ReductorError::TensorCreationError` if the length of `data_vec` does not match
    /// the total number of elements specified by `shape`, and `ShapeOverflow` if
    /// that count or one of the strides does not fit in `usize`.
    pub fn from_vec<T: Element>(data_vec: Vec<T>, shape: Vec<usize>) -> Result<Self, ReductorError> {
        let numel = checked_numel(&shape)?;
        let data_len = data_vec.len();
        if data_len != numel {
            return Err(ReductorError::TensorCreationError { data_len, shape });
        }

        let strides = calculate_strides(&shape)?;

        Ok(TensorData {
            buffer: Arc::new(T::into_buffer(data_vec)),
            dtype: T::DTYPE,
            offset: 0,
            shape,
            strides,
        })
    }

    /// Creates a new `TensorData` with the given f32 data and shape.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, ReductorError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new `TensorData` with the given f64 data and shape.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, ReductorError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new `TensorData` representing a view of an existing buffer.
    ///
    /// This constructor does **not** allocate new memory for the data but shares the
    /// provided `buffer_arc`. It sets new metadata (offset, shape, strides).
    ///
    /// # Errors
    /// Returns `ReductorError::InternalError` if the view would read past the end
    /// of the buffer, or if `shape` and `strides` have different lengths.
    pub(crate) fn new_view(
        buffer_arc: Arc<Buffer>,
        offset: usize,
        shape: Vec<usize>,
        strides: Vec<usize>,
    ) -> Result<Self, ReductorError> {
        if shape.len() != strides.len() {
            return Err(ReductorError::InternalError(format!(
                "View shape {:?} and strides {:?} have different ranks",
                shape, strides
            )));
        }
        if shape.iter().all(|&d| d > 0) {
            let last = offset
                + shape
                    .iter()
                    .zip(strides.iter())
                    .map(|(&d, &s)| (d - 1) * s)
                    .sum::<usize>();
            if last >= buffer_arc.len() {
                return Err(ReductorError::InternalError(format!(
                    "View (offset {}, shape {:?}, strides {:?}) exceeds buffer of length {}",
                    offset,
                    shape,
                    strides,
                    buffer_arc.len()
                )));
            }
        }

        Ok(TensorData {
            dtype: buffer_arc.dtype(),
            buffer: buffer_arc,
            offset,
            shape,
            strides,
        })
    }

    /// Provides immutable access to the underlying shared data buffer (`Arc<Buffer>`).
    pub fn buffer(&self) -> &Arc<Buffer> {
        &self.buffer
    }

    /// Returns the total number of elements described by the shape.
    pub fn numel(&self) -> usize {
        numel(&self.shape)
    }

    /// Borrows the typed buffer, or fails if the tensor does not hold `T`.
    pub(crate) fn typed_buffer<T: Element>(
        &self,
        operation: &str,
    ) -> Result<&Arc<Vec<T>>, ReductorError> {
        T::from_buffer(&self.buffer).ok_or_else(|| ReductorError::DataTypeMismatch {
            expected: T::DTYPE,
            actual: self.dtype,
            operation: operation.to_string(),
        })
    }

    /// Calculates the physical offset in the buffer for a location.
    ///
    /// # Errors
    /// Returns `ReductorError::IndexOutOfBounds` if the location has the wrong rank
    /// or any coordinate is outside its dimension.
    pub fn get_offset(&self, indices: &[usize]) -> Result<usize, ReductorError> {
        if indices.len() != self.shape.len()
            || indices.iter().zip(self.shape.iter()).any(|(&i, &d)| i >= d)
        {
            return Err(ReductorError::IndexOutOfBounds {
                index: indices.to_vec(),
                shape: self.shape.clone(),
            });
        }
        Ok(self.offset
            + indices
                .iter()
                .zip(self.strides.iter())
                .map(|(&i, &s)| i * s)
                .sum::<usize>())
    }

    /// Copies the elements into a new `Vec<T>` in logical (row-major) order.
    ///
    /// Works for views with arbitrary strides and offset.
    pub(crate) fn to_contiguous_vec<T: Element>(&self) -> Result<Vec<T>, ReductorError> {
        let data = self.typed_buffer::<T>("to_contiguous_vec")?;
        let numel = self.numel();
        if self.is_contiguous() {
            return Ok(data[self.offset..self.offset + numel].to_vec());
        }
        let logical_strides = calculate_strides(&self.shape)?;
        let mut out = Vec::with_capacity(numel);
        for flat in 0..numel {
            let mut physical = self.offset;
            let mut remainder = flat;
            for (&logical, &physical_stride) in logical_strides.iter().zip(self.strides.iter()) {
                physical += (remainder / logical) * physical_stride;
                remainder %= logical;
            }
            out.push(data[physical]);
        }
        Ok(out)
    }

    /// Checks if the tensor is contiguous in memory.
    /// A tensor is contiguous if its elements are laid out in the standard
    /// row-major order (C order) without gaps, considering its strides.
    pub fn is_contiguous(&self) -> bool {
        if self.shape.is_empty() {
            return true;
        }
        let mut current_stride = 1;
        for i in (0..self.shape.len()).rev() {
            let shape_i = self.shape[i];
            if shape_i == 0 {
                return true;
            }
            if shape_i != 1 {
                if self.strides[i] != current_stride {
                    return false;
                }
                current_stride *= shape_i;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        let err = TensorData::new(vec![1.0, 2.0, 3.0], vec![2, 2]).unwrap_err();
        assert_eq!(
            err,
            ReductorError::TensorCreationError {
                data_len: 3,
                shape: vec![2, 2]
            }
        );
    }

    #[test]
    fn test_get_offset() {
        let td = TensorData::new((0..6).map(|x| x as f32).collect(), vec![2, 3]).unwrap();
        assert_eq!(td.get_offset(&[1, 2]).unwrap(), 5);
        assert_eq!(td.get_offset(&[0, 1]).unwrap(), 1);
        assert!(td.get_offset(&[2, 0]).is_err());
        assert!(td.get_offset(&[0]).is_err());
    }

    #[test]
    fn test_scalar_offset() {
        let td = TensorData::new_f64(vec![7.0], vec![]).unwrap();
        assert_eq!(td.get_offset(&[]).unwrap(), 0);
        assert!(td.is_contiguous());
    }

    #[test]
    fn test_new_with_large_zero_sized_shape() {
        let td = TensorData::new(vec![], vec![usize::MAX, 0, 2]).unwrap();
        assert_eq!(td.numel(), 0);
        assert!(td.buffer().is_empty());
        assert_eq!(td.strides, vec![0, 2, 1]);
        assert_eq!(td.to_contiguous_vec::<f32>().unwrap(), Vec::<f32>::new());
    }

    #[test]
    fn test_new_rejects_overflowing_strides() {
        let err = TensorData::new(vec![], vec![0, usize::MAX, 2]).unwrap_err();
        assert_eq!(
            err,
            ReductorError::ShapeOverflow {
                shape: vec![0, usize::MAX, 2]
            }
        );
    }

    #[test]
    fn test_view_bounds() {
        let td = TensorData::new(vec![1.0; 4], vec![4]).unwrap();
        let ok = TensorData::new_view(td.buffer.clone(), 1, vec![3], vec![1]);
        assert!(ok.is_ok());
        let too_long = TensorData::new_view(td.buffer.clone(), 2, vec![3], vec![1]);
        assert!(matches!(too_long, Err(ReductorError::InternalError(_))));
    }

    #[test]
    fn test_to_contiguous_vec_strided_view() {
        // [[0, 1, 2], [3, 4, 5]] viewed as its transpose.
        let td = TensorData::new((0..6).map(|x| x as f32).collect(), vec![2, 3]).unwrap();
        let view = TensorData::new_view(td.buffer.clone(), 0, vec![3, 2], vec![1, 3]).unwrap();
        assert!(!view.is_contiguous());
        assert_eq!(
            view.to_contiguous_vec::<f32>().unwrap(),
            vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]
        );
        assert!(view.to_contiguous_vec::<f64>().is_err());
    }
}
