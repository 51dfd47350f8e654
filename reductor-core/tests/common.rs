use reductor_core::tensor::create::randn_seeded;
use reductor_core::Tensor;

/// Initializes `env_logger` once per test binary. Set `RUST_LOG=debug` to see
/// the reduction logs.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

/// Standard-normal f64 tensor, reproducible from `seed`.
#[allow(dead_code)]
pub fn random_f64(shape: &[usize], seed: u64) -> Tensor {
    randn_seeded(shape, seed)
        .and_then(|t| t.get_f32_data())
        .map(|v| v.into_iter().map(f64::from).collect())
        .and_then(|v| Tensor::new_f64(v, shape.to_vec()))
        .expect("Random test tensor creation failed")
}

/// Asserts two f64 slices agree elementwise within `epsilon`.
#[allow(dead_code)]
pub fn assert_all_close(actual: &[f64], expected: &[f64], epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= epsilon,
            "Mismatch at index {}: actual={}, expected={}",
            i,
            a,
            e
        );
    }
}
