use super::combiner::Prod;
use super::engine::reduce_op;
use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Calculates the product of elements along specified axes.
pub fn prod_op(input: &Tensor, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
    reduce_op(input, &Prod, axes, keep_dims)
}
