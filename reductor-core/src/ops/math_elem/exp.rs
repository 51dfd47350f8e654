use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Computes the element-wise exponential \( e^x \) of a tensor.
///
/// Large inputs overflow to `+inf` (about 88.7 for f32, 709.8 for f64).
pub fn exp_op(a: &Tensor) -> Result<Tensor, ReductorError> {
    crate::ops::apply_unary_op(a, |x| x.exp(), |x| x.exp(), "exp_op")
}
