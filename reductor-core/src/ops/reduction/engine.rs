//! Generic axis reduction.
//!
//! Every reduction in this crate goes through [`reduce_typed`]: validate the
//! axes, derive a [`ReduceDescriptor`], then for each output element gather
//! the input elements of its reduced sub-space in mixed-radix order and fold
//! them through a [`Combiner`].

use log::{debug, trace};

use super::combiner::Combiner;
use super::utils::{validate_reduce_params, ReduceDescriptor};
use crate::error::ReductorError;
use crate::ops::view::squeeze_op;
use crate::tensor::utils::location_from_index;
use crate::tensor::Tensor;
use crate::types::{DType, Element};

/// Reduces `input` over `axes` with `combiner`, dispatching on the tensor's DType.
///
/// # Arguments
/// * `input`: Tensor of any rank (rank 0 included).
/// * `combiner`: Combining function; must be defined for both `f32` and `f64`.
/// * `axes`: Axes to reduce. `None` reduces every axis, `Some(&[])` none.
/// * `keep_dims`: Keep reduced axes as size 1. When false the result is squeezed,
///   which also drops axes that were already size 1 in the input.
///
/// # Errors
/// `InvalidAxis`, `DuplicateAxis` or `ArityMismatch` from validation; nothing
/// is allocated when validation fails.
pub fn reduce_op<C>(
    input: &Tensor,
    combiner: &C,
    axes: Option<&[usize]>,
    keep_dims: bool,
) -> Result<Tensor, ReductorError>
where
    C: Combiner<f32> + Combiner<f64>,
{
    match input.dtype() {
        DType::F32 => reduce_typed::<f32, C>(input, combiner, axes, keep_dims),
        DType::F64 => reduce_typed::<f64, C>(input, combiner, axes, keep_dims),
    }
}

/// Reduces an input known to hold elements of type `T`.
///
/// Use this for combiners that exist for one element type only, such as a
/// closure wrapped in [`FoldFn`](super::combiner::FoldFn).
///
/// # Errors
/// `DataTypeMismatch` if `input` does not hold `T`, plus everything [`reduce_op`] returns.
pub fn reduce_typed<T, C>(
    input: &Tensor,
    combiner: &C,
    axes: Option<&[usize]>,
    keep_dims: bool,
) -> Result<Tensor, ReductorError>
where
    T: Element,
    C: Combiner<T> + ?Sized,
{
    let operation = combiner.name();
    let input_guard = input.read_data();
    let input_data = input_guard.typed_buffer::<T>(operation)?;
    let desc = validate_reduce_params(
        &input_guard.shape,
        axes,
        combiner.min_elements(),
        operation,
    )?;

    debug!(
        "{}: input shape {:?}, axes {:?}, keep_dims {} -> output shape {:?}",
        operation,
        input_guard.shape,
        desc.axes,
        keep_dims,
        desc.output_shape(keep_dims)
    );
    trace!("{}: {:?}", operation, desc);

    let output_data = reduce_kernel(
        input_data,
        &input_guard.strides,
        input_guard.offset,
        &desc,
        combiner,
    );
    drop(input_guard);

    let output = Tensor::from_vec(output_data, desc.kept_shape)?;
    if keep_dims {
        Ok(output)
    } else {
        squeeze_op(&output, None)
    }
}

/// Core loop: one folded value per element of `desc.kept_shape`, in row-major order.
/// An empty output returns before anything about the reduced sub-space is computed.
///
/// `data`, `strides` and `offset` describe the (possibly strided) input.
/// The physical offset of reduce index `r` relative to the output element's
/// own position only depends on `r`, so it is computed once up front from the
/// mixed-radix decomposition of `r`.
fn reduce_kernel<T, C>(
    data: &[T],
    strides: &[usize],
    offset: usize,
    desc: &ReduceDescriptor,
    combiner: &C,
) -> Vec<T>
where
    T: Element,
    C: Combiner<T> + ?Sized,
{
    if desc.output_elements == 0 {
        return Vec::new();
    }

    let total = desc.reduce_elements;
    let reduce_offsets: Vec<usize> = (0..total)
        .map(|r| {
            desc.decompose(r)
                .iter()
                .zip(desc.axes.iter())
                .map(|(&coord, &axis)| coord * strides[axis])
                .sum()
        })
        .collect();

    let mut output_data = Vec::with_capacity(desc.output_elements);

    for output_index in 0..desc.output_elements {
        // Reduced axes have extent 1 in kept_shape, so their coordinate here
        // is 0 and the base offset only moves along the kept axes.
        let output_location = location_from_index(output_index, &desc.kept_shape);
        let base = offset
            + output_location
                .iter()
                .zip(strides.iter())
                .map(|(&coord, &stride)| coord * stride)
                .sum::<usize>();

        let mut acc = data[base + reduce_offsets[0]];
        for (position, &relative) in reduce_offsets.iter().enumerate().skip(1) {
            acc = combiner.fold(acc, data[base + relative], position, total);
        }
        output_data.push(combiner.finish(acc, total));
    }

    output_data
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
