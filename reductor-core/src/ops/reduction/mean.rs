use super::combiner::Mean;
use super::engine::reduce_op;
use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Calculates the arithmetic mean of elements along specified axes.
///
/// Equal to the sum over `axes` divided by the product of the reduced extents.
pub fn mean_op(input: &Tensor, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
    reduce_op(input, &Mean, axes, keep_dims)
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
