//! Validation and descriptor derivation for reduction operations.

use crate::error::ReductorError;
use crate::tensor::utils::{calculate_strides, checked_numel};

/// Everything the reduction engine needs to know about one call, derived once
/// from the input shape and the requested axes.
///
/// The reduced axes span a sub-space of the input with extents `reduce_dims`.
/// A single "reduce index" in `0..reduce_elements` names one point of that
/// sub-space; `reduce_strides` are the row-major strides of the sub-space and
/// turn the reduce index back into one coordinate per reduced axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceDescriptor {
    /// Reduced axes, sorted ascending, no duplicates.
    pub axes: Vec<usize>,
    /// `reduce_dims[i]` is the input extent of `axes[i]`.
    pub reduce_dims: Vec<usize>,
    /// Row-major strides over `reduce_dims` (last entry is 1).
    pub reduce_strides: Vec<usize>,
    /// Number of input elements folded into each output element.
    ///
    /// 0 (with empty `reduce_strides`) when the output is empty and the reduced
    /// extents multiply past `usize::MAX`; nothing is folded in that case.
    pub reduce_elements: usize,
    /// Input shape with every reduced axis set to 1.
    pub kept_shape: Vec<usize>,
    /// Number of elements of `kept_shape`, i.e. of the output.
    pub output_elements: usize,
}

impl ReduceDescriptor {
    /// Splits a reduce index into one coordinate per reduced axis, in the
    /// order of `axes`.
    pub fn decompose(&self, reduce_index: usize) -> Vec<usize> {
        self.reduce_strides
            .iter()
            .zip(self.reduce_dims.iter())
            .map(|(&stride, &dim)| (reduce_index / stride) % dim)
            .collect()
    }

    /// Final output shape: `kept_shape` with `keep_dims`, otherwise `kept_shape`
    /// without any size-1 axis (squeeze semantics, so axes that were already
    /// size 1 in the input disappear as well).
    pub fn output_shape(&self, keep_dims: bool) -> Vec<usize> {
        if keep_dims {
            self.kept_shape.clone()
        } else {
            self.kept_shape.iter().copied().filter(|&d| d != 1).collect()
        }
    }
}

/// Processes the axes provided for a reduction operation.
///
/// - `None` means every axis `0..rank`.
/// - `Some(&[])` means no axis at all (every element passes through unchanged).
/// - Otherwise every axis must be `< rank` and appear once.
///
/// # Returns
/// The axes sorted ascending.
///
/// # Errors
/// `InvalidAxis` for the first out-of-range axis (in the caller's order),
/// then `DuplicateAxis` for the smallest repeated axis.
pub(crate) fn process_reduction_axes(
    rank: usize,
    axes: Option<&[usize]>,
) -> Result<Vec<usize>, ReductorError> {
    let ax = match axes {
        None => return Ok((0..rank).collect()),
        Some(ax) => ax,
    };

    if let Some(&axis) = ax.iter().find(|&&axis| axis >= rank) {
        return Err(ReductorError::InvalidAxis { axis, rank });
    }

    let mut processed_axes = ax.to_vec();
    processed_axes.sort_unstable();
    if let Some(pair) = processed_axes.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(ReductorError::DuplicateAxis { axis: pair[0] });
    }
    Ok(processed_axes)
}

/// Validates the parameters of a reduction and derives its [`ReduceDescriptor`].
///
/// Runs before the engine allocates anything, so a failing call never
/// produces partial output.
///
/// # Arguments
/// * `input_shape`: Shape of the tensor being reduced.
/// * `axes`: Requested axes (`None` = all).
/// * `min_elements`: Smallest number of elements the combining function can fold.
///   Values below 1 are treated as 1, since the fold is seeded with the first element.
/// * `operation`: Name used in error messages.
///
/// # Errors
/// `InvalidAxis` / `DuplicateAxis` for a bad axis set, `ArityMismatch` when a
/// reduced axis has extent 0 (or fewer than `min_elements` values would be folded),
/// `ShapeOverflow` when a non-empty output would fold more than `usize::MAX` values.
pub fn validate_reduce_params(
    input_shape: &[usize],
    axes: Option<&[usize]>,
    min_elements: usize,
    operation: &str,
) -> Result<ReduceDescriptor, ReductorError> {
    let axes = process_reduction_axes(input_shape.len(), axes)?;

    let reduce_dims: Vec<usize> = axes.iter().map(|&axis| input_shape[axis]).collect();
    let mut kept_shape = input_shape.to_vec();
    for &axis in &axes {
        kept_shape[axis] = 1;
    }
    let output_elements = checked_numel(&kept_shape)?;

    let required = min_elements.max(1);
    let (reduce_elements, reduce_strides) = match checked_numel(&reduce_dims) {
        Ok(actual) if actual < required => {
            return Err(ReductorError::ArityMismatch {
                operation: operation.to_string(),
                required,
                actual,
            });
        }
        Ok(count) => (count, calculate_strides(&reduce_dims)?),
        // Every reduced extent is non-zero here, so the empty dimension is a kept one.
        Err(_) if output_elements == 0 => (0, Vec::new()),
        Err(e) => return Err(e),
    };

    Ok(ReduceDescriptor {
        axes,
        reduce_dims,
        reduce_strides,
        reduce_elements,
        kept_shape,
        output_elements,
    })
}
