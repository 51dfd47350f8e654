//! Norm-style reductions derived from `sum_op` and the element-wise math ops.

use super::sum::sum_op;
use crate::error::ReductorError;
use crate::ops::math_elem::{abs_op, pow_scalar_op, square_op};
use crate::tensor::Tensor;
use crate::types::DType;

/// Sum of squares over `axes`: `sum(x * x)`.
pub fn sum_square_op(
    input: &Tensor,
    axes: Option<&[usize]>,
    keep_dims: bool,
) -> Result<Tensor, ReductorError> {
    let squared = square_op(input)?;
    sum_op(&squared, axes, keep_dims)
}

/// L1 norm over `axes`: `sum(|x|)`.
pub fn l1_op(input: &Tensor, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
    let magnitudes = abs_op(input)?;
    sum_op(&magnitudes, axes, keep_dims)
}

/// L2 norm over `axes`: `sqrt(sum(x * x))`.
///
/// A rank-0 result takes the square root of the scalar directly; any other
/// result goes through the element-wise power op with exponent 0.5. Both paths
/// use `powf(0.5)` on a non-negative sum of squares, so they agree.
pub fn l2_op(input: &Tensor, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
    let sum_squares = sum_square_op(input, axes, keep_dims)?;
    if sum_squares.rank() != 0 {
        return pow_scalar_op(&sum_squares, 0.5);
    }
    match sum_squares.dtype() {
        DType::F32 => Ok(Tensor::scalar(sum_squares.item::<f32>()?.powf(0.5))),
        DType::F64 => Ok(Tensor::scalar_f64(sum_squares.item::<f64>()?.powf(0.5))),
    }
}

#[cfg(test)]
#[path = "norm_test.rs"]
mod tests;
