use super::combiner::Sum;
use super::engine::reduce_op;
use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Calculates the sum of elements along specified axes.
///
/// `axes = None` sums every element; `Some(&[])` returns the input values unchanged.
pub fn sum_op(input: &Tensor, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
    reduce_op(input, &Sum, axes, keep_dims)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
