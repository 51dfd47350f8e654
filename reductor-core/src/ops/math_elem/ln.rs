// src/ops/math_elem/ln.rs

use crate::error::ReductorError;
use crate::tensor::Tensor;

/// Computes the element-wise natural logarithm (base \( e \)) of a tensor.
///
/// # Domain Considerations
/// The natural logarithm is only defined for strictly positive numbers.
/// Zero maps to `-inf` and negative inputs to `NaN`; neither is an error.
pub fn ln_op(a: &Tensor) -> Result<Tensor, ReductorError> {
    crate::ops::apply_unary_op(a, |x| x.ln(), |x| x.ln(), "ln_op")
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
