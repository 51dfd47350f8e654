use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Computes the element-wise absolute value of a tensor.
pub fn abs_op(a: &Tensor) -> Result<Tensor, ReductorError> {
    crate::ops::apply_unary_op(a, |x| x.abs(), |x| x.abs(), "abs_op")
}
