use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Raises every element of `a` to the scalar power `exponent`.
///
/// For f32 tensors the exponent is narrowed to f32. Follows IEEE `pow`:
/// a negative base with a non-integer exponent yields `NaN`.
pub fn pow_scalar_op(a: &Tensor, exponent: f64) -> Result<Tensor, ReductorError> {
    let exponent_f32 = exponent as f32;
    crate::ops::apply_unary_op(
        a,
        move |x| x.powf(exponent_f32),
        move |x| x.powf(exponent),
        "pow_scalar_op",
    )
}

/// Raises every element of `base` to the power of the matching element of `exponent`.
///
/// Both tensors must have the same shape and DType; there is no broadcasting.
pub fn pow_op(base: &Tensor, exponent: &Tensor) -> Result<Tensor, ReductorError> {
    crate::ops::apply_binary_op(base, exponent, |x, y| x.powf(y), |x, y| x.powf(y), "pow_op")
}
