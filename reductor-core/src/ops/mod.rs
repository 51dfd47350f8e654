//! # Tensor Operations Module (`ops`)
//!
//! Operations are grouped into submodules by what they do:
//!
//! - [`math_elem`]: element-wise math (abs, exp, ln, sqrt, square, pow) used by the
//!   derived reductions.
//! - [`reduction`]: the axis reduction engine and the named reducers built on it.
//! - [`view`]: operations returning views of an existing buffer (squeeze, unsqueeze).
//!
//! Each operation has a core function named `xxx_op`; `Tensor` methods delegate to them.

use crate::error::ReductorError;
use crate::tensor::Tensor;
use crate::types::DType;

pub mod math_elem;
pub mod reduction;
pub mod view;

/// Applies a unary element-wise operation to a tensor.
///
/// Handles DType dispatch (F32, F64), reads the input in logical order (so
/// views are accepted) and builds a new contiguous output of the same shape.
///
/// # Arguments
/// * `a`: The input tensor.
/// * `op_f32`: Closure defining the operation for F32: `Fn(f32) -> f32`.
/// * `op_f64`: Closure defining the operation for F64: `Fn(f64) -> f64`.
/// * `op_name`: Name of the operation for error messages.
pub(crate) fn apply_unary_op<F32Op, F64Op>(
    a: &Tensor,
    op_f32: F32Op,
    op_f64: F64Op,
    op_name: &str,
) -> Result<Tensor, ReductorError>
where
    F32Op: Fn(f32) -> f32,
    F64Op: Fn(f64) -> f64,
{
    let a_guard = a.read_data();
    let output_shape = a_guard.shape.clone();
    log::trace!("{}: shape {:?}, dtype {:?}", op_name, output_shape, a_guard.dtype);

    match a_guard.dtype {
        DType::F32 => {
            let output_data: Vec<f32> = a_guard
                .to_contiguous_vec::<f32>()?
                .into_iter()
                .map(op_f32)
                .collect();
            drop(a_guard);
            Tensor::new(output_data, output_shape)
        }
        DType::F64 => {
            let output_data: Vec<f64> = a_guard
                .to_contiguous_vec::<f64>()?
                .into_iter()
                .map(op_f64)
                .collect();
            drop(a_guard);
            Tensor::new_f64(output_data, output_shape)
        }
    }
}

/// Applies a binary element-wise operation to two tensors of identical shape and DType.
///
/// Broadcasting is not supported: mismatched shapes fail with `ShapeMismatch`.
pub(crate) fn apply_binary_op<F32Op, F64Op>(
    a: &Tensor,
    b: &Tensor,
    op_f32: F32Op,
    op_f64: F64Op,
    op_name: &str,
) -> Result<Tensor, ReductorError>
where
    F32Op: Fn(f32, f32) -> f32,
    F64Op: Fn(f64, f64) -> f64,
{
    let a_guard = a.read_data();
    let b_guard = b.read_data();

    if a_guard.shape != b_guard.shape {
        return Err(ReductorError::ShapeMismatch {
            expected: a_guard.shape.clone(),
            actual: b_guard.shape.clone(),
            operation: op_name.to_string(),
        });
    }
    if a_guard.dtype != b_guard.dtype {
        return Err(ReductorError::DataTypeMismatch {
            expected: a_guard.dtype,
            actual: b_guard.dtype,
            operation: op_name.to_string(),
        });
    }
    let output_shape = a_guard.shape.clone();

    match a_guard.dtype {
        DType::F32 => {
            let lhs = a_guard.to_contiguous_vec::<f32>()?;
            let rhs = b_guard.to_contiguous_vec::<f32>()?;
            drop(a_guard);
            drop(b_guard);
            let output_data = lhs.into_iter().zip(rhs).map(|(x, y)| op_f32(x, y)).collect();
            Tensor::new(output_data, output_shape)
        }
        DType::F64 => {
            let lhs = a_guard.to_contiguous_vec::<f64>()?;
            let rhs = b_guard.to_contiguous_vec::<f64>()?;
            drop(a_guard);
            drop(b_guard);
            let output_data = lhs.into_iter().zip(rhs).map(|(x, y)| op_f64(x, y)).collect();
            Tensor::new_f64(output_data, output_shape)
        }
    }
}
