use crate::tensor::Tensor;

/// Checks if an f32 tensor has `expected_shape` and data within `tolerance` of `expected_data`.
/// Panics if shapes differ or data differs significantly. NaN only matches NaN.
pub fn check_tensor_near(
    actual: &Tensor,
    expected_shape: &[usize],
    expected_data: &[f32],
    tolerance: f32,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_data_vec = actual
        .get_f32_data()
        .expect("Failed to get F32 data in check_tensor_near");

    assert_eq!(
        actual_data_vec.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual_data_vec.iter().zip(expected_data.iter()).enumerate() {
        if a.is_nan() && e.is_nan() {
            continue;
        }
        let diff = (*a - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
