//! Logarithmic reductions.

use super::sum::sum_op;
use crate::error::ReductorError;
use crate::ops::math_elem::{exp_op, ln_op};
use crate::tensor::Tensor;

/// Natural log of the sum over `axes`: `ln(sum(x))`.
///
/// A non-positive sum yields `-inf` or NaN rather than an error.
pub fn log_sum_op(input: &Tensor, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
    let summed = sum_op(input, axes, keep_dims)?;
    ln_op(&summed)
}

/// `ln(sum(exp(x)))` over `axes`.
///
/// Not stabilised: there is no max subtraction, so inputs above roughly 88 (f32)
/// or 709 (f64) overflow `exp` and the result becomes `+inf`.
pub fn log_sum_exp_op(
    input: &Tensor,
    axes: Option<&[usize]>,
    keep_dims: bool,
) -> Result<Tensor, ReductorError> {
    let exponentials = exp_op(input)?;
    log_sum_op(&exponentials, axes, keep_dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::check_tensor_near;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_sum() -> Result<(), ReductorError> {
        let t = Tensor::new_f64(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
        let result = log_sum_op(&t, Some(&[1]), false)?;
        let data = result.get_f64_data()?;
        assert_eq!(result.shape(), vec![2]);
        assert_relative_eq!(data[0], 3.0f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(data[1], 7.0f64.ln(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_log_sum_non_positive_is_not_an_error() -> Result<(), ReductorError> {
        let t = Tensor::new(vec![1.0, -1.0, -2.0, 1.0], vec![2, 2])?;
        let data = log_sum_op(&t, Some(&[1]), false)?.get_f32_data()?;
        assert!(data[0].is_infinite() && data[0].is_sign_negative());
        assert!(data[1].is_nan());
        Ok(())
    }

    #[test]
    fn test_log_sum_exp() -> Result<(), ReductorError> {
        let t = Tensor::new(vec![0.0, 0.0, 1.0, 2.0], vec![2, 2])?;
        let result = log_sum_exp_op(&t, Some(&[1]), true)?;
        let expected = (1.0f32.exp() + 2.0f32.exp()).ln();
        check_tensor_near(&result, &[2, 1], &[2.0f32.ln(), expected], 1e-5);
        Ok(())
    }

    #[test]
    fn test_log_sum_exp_overflows() -> Result<(), ReductorError> {
        let t = Tensor::new(vec![100.0, 1.0], vec![2])?;
        let result = log_sum_exp_op(&t, None, false)?.item::<f32>()?;
        assert!(result.is_infinite());
        Ok(())
    }
}
