use super::combiner::Max;
use super::engine::reduce_op;
use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Calculates the maximum of elements along specified axes.
///
/// A NaN in a reduced group makes that output NaN.
pub fn max_op(input: &Tensor, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
    reduce_op(input, &Max, axes, keep_dims)
}

#[cfg(test)]
#[path = "max_test.rs"]
mod tests;
