// src/tensor/mod.rs

use crate::error::ReductorError;
use crate::tensor_data::TensorData;
use crate::types::{DType, Element};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod debug;
mod reduction_methods;
mod traits;

pub mod create;
pub mod utils;

pub use create::{full, full_f64, ones, ones_f64, zeros, zeros_f64};

/// Represents a multi-dimensional array (tensor).
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** Multiple `Tensor` instances can point to the same
///     underlying data without cloning the data itself (cheap clones).
/// 2.  **Interior Mutability:** `set_value_by_index` can write through an
///     immutable `Tensor` reference. Read/write locks ensure thread safety.
///
/// Reductions never write to their input; they always return a new tensor.
pub struct Tensor {
    /// Arc for shared ownership, RwLock for interior mutability of TensorData.
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new Tensor with the given f32 data and shape.
    ///
    /// This is the primary constructor for creating tensors from raw data.
    /// It calculates contiguous strides automatically.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, ReductorError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new Tensor with the given f64 data and shape.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, ReductorError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new Tensor of any supported element type.
    pub fn from_vec<T: Element>(data_vec: Vec<T>, shape: Vec<usize>) -> Result<Self, ReductorError> {
        let tensor_data = TensorData::from_vec(data_vec, shape)?;
        Ok(Self::from_tensor_data(tensor_data))
    }

    /// Creates a rank-0 f32 tensor.
    pub fn scalar(value: f32) -> Self {
        Self::from_tensor_data(TensorData {
            buffer: Arc::new(f32::into_buffer(vec![value])),
            dtype: DType::F32,
            shape: vec![],
            strides: vec![],
            offset: 0,
        })
    }

    /// Creates a rank-0 f64 tensor.
    pub fn scalar_f64(value: f64) -> Self {
        Self::from_tensor_data(TensorData {
            buffer: Arc::new(f64::into_buffer(vec![value])),
            dtype: DType::F64,
            shape: vec![],
            strides: vec![],
            offset: 0,
        })
    }

    pub(crate) fn from_tensor_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Returns the data type (`DType`) of the tensor elements.
    pub fn dtype(&self) -> DType {
        self.read_data().dtype
    }

    /// Returns a clone of the tensor's shape (`Vec<usize>`).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns a clone of the tensor's strides (`Vec<usize>`).
    pub fn strides(&self) -> Vec<usize> {
        self.read_data().strides.clone()
    }

    /// Checks if the tensor is contiguous in memory.
    pub fn is_contiguous(&self) -> bool {
        self.read_data().is_contiguous()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Acquires a read lock on the tensor's data.
    ///
    /// The lock is automatically released when the guard goes out of scope.
    /// A poisoned lock is recovered: tensor metadata is only replaced wholesale,
    /// so a panicking writer cannot leave it half-updated.
    pub fn read_data(&self) -> RwLockReadGuard<'_, TensorData> {
        self.data.read().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for tensor data was poisoned. Recovering read guard.");
            poisoned.into_inner()
        })
    }

    /// Acquires a write lock on the tensor's data.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, TensorData> {
        self.data.write().unwrap_or_else(|poisoned| {
            log::warn!("RwLock for tensor data was poisoned. Recovering write guard.");
            poisoned.into_inner()
        })
    }

    /// Copies the tensor elements into a `Vec<T>` in row-major order.
    ///
    /// Returns `DataTypeMismatch` if the tensor does not hold `T`.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, ReductorError> {
        self.read_data().to_contiguous_vec::<T>()
    }

    /// Attempts to get the tensor data as a `Vec<f32>`.
    pub fn get_f32_data(&self) -> Result<Vec<f32>, ReductorError> {
        self.to_vec::<f32>()
    }

    /// Attempts to get the tensor data as a `Vec<f64>`.
    pub fn get_f64_data(&self) -> Result<Vec<f64>, ReductorError> {
        self.to_vec::<f64>()
    }

    /// Extracts the value of a tensor holding exactly one element.
    pub fn item<T: Element>(&self) -> Result<T, ReductorError> {
        let guard = self.read_data();
        if guard.numel() != 1 {
            return Err(ReductorError::ShapeMismatch {
                expected: vec![],
                actual: guard.shape.clone(),
                operation: "item".to_string(),
            });
        }
        let data = guard.typed_buffer::<T>("item")?;
        Ok(data[guard.offset])
    }

    /// Converts a flat row-major index into a location within this tensor.
    pub fn location_from_index(&self, index: usize) -> Result<Vec<usize>, ReductorError> {
        let guard = self.read_data();
        if index >= guard.numel() {
            return Err(ReductorError::IndexOutOfBounds {
                index: vec![index],
                shape: guard.shape.clone(),
            });
        }
        Ok(utils::location_from_index(index, &guard.shape))
    }

    /// Converts a location into its flat row-major index within this tensor.
    pub fn index_from_location(&self, location: &[usize]) -> Result<usize, ReductorError> {
        utils::index_from_location(location, &self.read_data().shape)
    }

    /// Reads the element at `location`.
    pub fn get_value_by_location<T: Element>(&self, location: &[usize]) -> Result<T, ReductorError> {
        let guard = self.read_data();
        let offset = guard.get_offset(location)?;
        let data = guard.typed_buffer::<T>("get_value_by_location")?;
        Ok(data[offset])
    }

    /// Writes `value` at the flat row-major `index`.
    ///
    /// The buffer is copied first if it is shared with another tensor or view,
    /// so only this tensor (and its shallow clones) observe the write.
    pub fn set_value_by_index<T: Element>(&self, index: usize, value: T) -> Result<(), ReductorError> {
        let mut guard = self.write_data();
        if index >= guard.numel() {
            return Err(ReductorError::IndexOutOfBounds {
                index: vec![index],
                shape: guard.shape.clone(),
            });
        }
        let location = utils::location_from_index(index, &guard.shape);
        let offset = guard.get_offset(&location)?;
        let actual = guard.dtype;
        let buffer = Arc::make_mut(&mut guard.buffer);
        let data = T::from_buffer_mut(buffer).ok_or_else(|| ReductorError::DataTypeMismatch {
            expected: T::DTYPE,
            actual,
            operation: "set_value_by_index".to_string(),
        })?;
        Arc::make_mut(data)[offset] = value;
        Ok(())
    }
}
