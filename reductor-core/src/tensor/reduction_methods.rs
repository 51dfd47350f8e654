use crate::error::ReductorError;
use crate::ops::reduction::{self, Combiner};
use crate::tensor::Tensor;

/// Reduction methods. Each one delegates to the matching `ops::reduction` function.
///
/// `axes`: `None` reduces every axis, `Some(&[])` reduces none.
/// `keep_dims`: keep reduced axes as size 1; when false the result is squeezed.
impl Tensor {
    /// Reduces with an arbitrary combiner defined for both f32 and f64.
    pub fn reduce<C>(&self, combiner: &C, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError>
    where
        C: Combiner<f32> + Combiner<f64>,
    {
        reduction::reduce_op(self, combiner, axes, keep_dims)
    }

    /// Sum over `axes`. See [`sum_op`](crate::ops::reduction::sum_op).
    pub fn reduce_sum(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::sum_op(self, axes, keep_dims)
    }

    /// Product over `axes`.
    pub fn reduce_prod(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::prod_op(self, axes, keep_dims)
    }

    /// Maximum over `axes`. NaN in a reduced group makes that output NaN.
    pub fn reduce_max(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::max_op(self, axes, keep_dims)
    }

    /// Minimum over `axes`. NaN in a reduced group makes that output NaN.
    pub fn reduce_min(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::min_op(self, axes, keep_dims)
    }

    /// Arithmetic mean over `axes`.
    pub fn reduce_mean(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::mean_op(self, axes, keep_dims)
    }

    /// Sum of squares over `axes`.
    pub fn reduce_sum_square(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::sum_square_op(self, axes, keep_dims)
    }

    /// Sum of absolute values over `axes`.
    pub fn reduce_l1(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::l1_op(self, axes, keep_dims)
    }

    /// Euclidean norm over `axes`.
    pub fn reduce_l2(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::l2_op(self, axes, keep_dims)
    }

    /// `ln` of the sum over `axes`; a non-positive sum gives `-inf` or NaN.
    pub fn reduce_log_sum(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::log_sum_op(self, axes, keep_dims)
    }

    /// `ln(sum(exp(x)))` over `axes`, computed without max subtraction, so large inputs overflow.
    pub fn reduce_log_sum_exp(&self, axes: Option<&[usize]>, keep_dims: bool) -> Result<Tensor, ReductorError> {
        reduction::log_sum_exp_op(self, axes, keep_dims)
    }
}
