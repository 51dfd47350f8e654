use super::combiner::Min;
use super::engine::reduce_op;
use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Calculates the minimum of elements along specified axes.
pub fn min_op(input: &Tensor, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
    reduce_op(input, &Min, axes, keep_dims)
}
