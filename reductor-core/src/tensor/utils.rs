use crate::error::ReductorError;

/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
///
/// # Errors
/// `ShapeOverflow` if a stride does not fit in `usize`. This can happen even
/// for shapes holding no element, e.g. `[0, usize::MAX, 2]`.
pub fn calculate_strides(shape: &[usize]) -> Result<Vec<usize>, ReductorError> {
    if shape.is_empty() {
        return Ok(vec![]);
    }
    let rank = shape.len();
    let mut strides: Vec<usize> = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1]
            .checked_mul(shape[i + 1])
            .ok_or_else(|| ReductorError::ShapeOverflow {
                shape: shape.to_vec(),
            })?;
    }
    Ok(strides)
}

/// Total number of elements for a shape. A rank-0 shape holds one element.
///
/// Any zero extent gives 0, whatever the other extents are.
///
/// # Errors
/// `ShapeOverflow` if the shape has no zero extent and its element count does
/// not fit in `usize`.
pub fn checked_numel(shape: &[usize]) -> Result<usize, ReductorError> {
    if shape.contains(&0) {
        return Ok(0);
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| ReductorError::ShapeOverflow {
            shape: shape.to_vec(),
        })
}

/// Like [`checked_numel`], saturating at `usize::MAX` instead of failing.
///
/// Tensor shapes are checked when the tensor is built, so for them this never saturates.
pub fn numel(shape: &[usize]) -> usize {
    checked_numel(shape).unwrap_or(usize::MAX)
}

/// Converts a row-major flat index into a location for `shape`.
///
/// The last axis varies fastest. Indices past the end wrap on the first axis,
/// so callers are expected to pass `index < numel(shape)`.
pub fn location_from_index(index: usize, shape: &[usize]) -> Vec<usize> {
    let mut location = vec![0; shape.len()];
    let mut remainder = index;
    for axis in (0..shape.len()).rev() {
        let dim = shape[axis];
        if dim == 0 {
            continue;
        }
        location[axis] = remainder % dim;
        remainder /= dim;
    }
    location
}

/// Converts a location into its row-major flat index for `shape`.
///
/// # Errors
/// Returns `ReductorError::IndexOutOfBounds` if the location rank differs from
/// the shape rank or a coordinate is out of range.
pub fn index_from_location(location: &[usize], shape: &[usize]) -> Result<usize, ReductorError> {
    if location.len() != shape.len() || location.iter().zip(shape).any(|(&c, &d)| c >= d) {
        return Err(ReductorError::IndexOutOfBounds {
            index: location.to_vec(),
            shape: shape.to_vec(),
        });
    }
    Ok(location
        .iter()
        .zip(shape)
        .fold(0, |index, (&coord, &dim)| index * dim + coord))
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
