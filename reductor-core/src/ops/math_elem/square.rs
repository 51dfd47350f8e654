use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Computes the element-wise square \( x^2 \) of a tensor.
pub fn square_op(a: &Tensor) -> Result<Tensor, ReductorError> {
    crate::ops::apply_unary_op(a, |x| x * x, |x| x * x, "square_op")
}
