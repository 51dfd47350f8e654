use crate::error::ReductorError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Inserts an axis of size 1 at position `dim` (`0..=rank`).
///
/// The result is a view sharing the input buffer.
pub fn unsqueeze_op(tensor: &Tensor, dim: usize) -> Result<Tensor, ReductorError> {
    let input_guard = tensor.read_data();
    let rank = input_guard.shape.len();

    if dim > rank {
        return Err(ReductorError::InvalidAxis { axis: dim, rank });
    }

    let mut new_shape = input_guard.shape.clone();
    let mut new_strides = input_guard.strides.clone();
    // The stride of a size-1 axis is never used to move; pick the one a
    // contiguous tensor would have so contiguity checks stay simple.
    let stride = if dim < rank {
        input_guard.strides[dim]
            .checked_mul(input_guard.shape[dim])
            .ok_or_else(|| ReductorError::ShapeOverflow {
                shape: input_guard.shape.clone(),
            })?
    } else {
        1
    };
    new_shape.insert(dim, 1);
    new_strides.insert(dim, stride);

    let view_td = TensorData::new_view(
        input_guard.buffer.clone(),
        input_guard.offset,
        new_shape,
        new_strides,
    )?;
    Ok(Tensor::from_tensor_data(view_td))
}

/// Removes axes of size 1.
///
/// - `None` removes every size-1 axis; the rank may drop to 0.
/// - `Some(d)` removes axis `d` if its size is 1, and otherwise leaves the shape unchanged.
///
/// The result is a view sharing the input buffer.
///
/// # Errors
/// `InvalidAxis` if `d >= rank`.
pub fn squeeze_op(tensor: &Tensor, dim_opt: Option<usize>) -> Result<Tensor, ReductorError> {
    let input_guard = tensor.read_data();
    let input_shape = &input_guard.shape;
    let input_strides = &input_guard.strides;
    let rank = input_shape.len();

    if let Some(d) = dim_opt {
        if d >= rank {
            return Err(ReductorError::InvalidAxis { axis: d, rank });
        }
    }

    let (new_shape, new_strides): (Vec<usize>, Vec<usize>) = input_shape
        .iter()
        .zip(input_strides.iter())
        .enumerate()
        .filter(|&(i, (&size, _))| match dim_opt {
            Some(d) => !(i == d && size == 1),
            None => size != 1,
        })
        .map(|(_, (&size, &stride))| (size, stride))
        .unzip();

    let view_td = TensorData::new_view(
        input_guard.buffer.clone(),
        input_guard.offset,
        new_shape,
        new_strides,
    )?;
    Ok(Tensor::from_tensor_data(view_td))
}
