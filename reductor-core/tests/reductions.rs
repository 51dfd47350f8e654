mod common;

use approx::assert_relative_eq;
use common::{assert_all_close, create_test_tensor, init_logger, random_f64};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use reductor_core::ops::reduction::{max_op, mean_op, min_op, sum_op};
use reductor_core::ops::view::unsqueeze_op;
use reductor_core::{ErrorKind, ReductorError, Tensor};

/// Random shape of rank 1..=4 with extents 1..=4, plus a random non-empty
/// subset of its axes in shuffled order.
fn random_case(rng: &mut StdRng) -> (Vec<usize>, Vec<usize>) {
    let rank = rng.gen_range(1..=4);
    let shape: Vec<usize> = (0..rank).map(|_| rng.gen_range(1..=4)).collect();
    let mut axes: Vec<usize> = (0..rank).filter(|_| rng.gen_bool(0.5)).collect();
    if axes.is_empty() {
        axes.push(rng.gen_range(0..rank));
    }
    axes.shuffle(rng);
    (shape, axes)
}

#[test]
fn test_documented_scenarios() -> Result<(), ReductorError> {
    init_logger();
    let t = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);

    let sum = t.reduce_sum(Some(&[1]), false)?;
    assert_eq!(sum.shape(), vec![2]);
    assert_eq!(sum.get_f32_data()?, vec![6.0, 15.0]);

    let max = t.reduce_max(Some(&[0]), true)?;
    assert_eq!(max.shape(), vec![1, 3]);
    assert_eq!(max.get_f32_data()?, vec![4.0, 5.0, 6.0]);

    let mean = t.reduce_mean(None, false)?;
    assert_eq!(mean.rank(), 0);
    assert_relative_eq!(mean.item::<f32>()?, 3.5);

    let l2 = create_test_tensor(vec![3.0, 4.0], vec![2]).reduce_l2(None, false)?;
    assert_relative_eq!(l2.item::<f32>()?, 5.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_invalid_axes_report_errors() {
    init_logger();
    let t = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);

    let err = t.reduce_sum(Some(&[2]), false).unwrap_err();
    assert_eq!(err, ReductorError::InvalidAxis { axis: 2, rank: 2 });
    assert_eq!(err.kind(), ErrorKind::Shape);

    let err = t.reduce_mean(Some(&[0, 0]), true).unwrap_err();
    assert_eq!(err, ReductorError::DuplicateAxis { axis: 0 });
    assert_eq!(err.kind(), ErrorKind::Shape);

    let empty = create_test_tensor(vec![], vec![3, 0]);
    let err = empty.reduce_min(Some(&[1]), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arity);
}

#[test]
fn test_random_keep_dims_and_squeezed_shapes() -> Result<(), ReductorError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(7);
    for seed in 0..50 {
        let (shape, axes) = random_case(&mut rng);
        let t = random_f64(&shape, seed);

        let kept = sum_op(&t, Some(&axes), true)?;
        let mut expected_kept = shape.clone();
        for &axis in &axes {
            expected_kept[axis] = 1;
        }
        assert_eq!(kept.shape(), expected_kept);

        let squeezed = sum_op(&t, Some(&axes), false)?;
        let expected_squeezed: Vec<usize> =
            expected_kept.iter().copied().filter(|&d| d != 1).collect();
        assert_eq!(squeezed.shape(), expected_squeezed);
        assert_eq!(squeezed.get_f64_data()?, kept.get_f64_data()?);
    }
    Ok(())
}

#[test]
fn test_random_total_sum_independent_of_axis_order() -> Result<(), ReductorError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(11);
    for seed in 0..30 {
        let (shape, _) = random_case(&mut rng);
        let t = random_f64(&shape, seed);
        let expected: f64 = t.get_f64_data()?.iter().sum();

        let mut all_axes: Vec<usize> = (0..shape.len()).collect();
        all_axes.shuffle(&mut rng);
        let shuffled = sum_op(&t, Some(&all_axes), false)?.item::<f64>()?;
        let none = sum_op(&t, None, false)?.item::<f64>()?;

        assert_relative_eq!(shuffled, expected, epsilon = 1e-9);
        assert_eq!(shuffled, none);
    }
    Ok(())
}

#[test]
fn test_random_mean_is_sum_over_count() -> Result<(), ReductorError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(13);
    for seed in 0..30 {
        let (shape, axes) = random_case(&mut rng);
        let t = random_f64(&shape, seed);
        let count: usize = axes.iter().map(|&a| shape[a]).product();

        let mean = mean_op(&t, Some(&axes), true)?.get_f64_data()?;
        let expected: Vec<f64> = sum_op(&t, Some(&axes), true)?
            .get_f64_data()?
            .into_iter()
            .map(|s| s / count as f64)
            .collect();
        assert_all_close(&mean, &expected, 1e-12);
    }
    Ok(())
}

#[test]
fn test_random_max_min_bounds() -> Result<(), ReductorError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(17);
    for seed in 0..30 {
        let (shape, axes) = random_case(&mut rng);
        let t = random_f64(&shape, seed);
        let max = max_op(&t, Some(&axes), true)?.get_f64_data()?;
        let min = min_op(&t, Some(&axes), true)?.get_f64_data()?;
        let mean = mean_op(&t, Some(&axes), true)?.get_f64_data()?;
        for ((hi, lo), m) in max.iter().zip(min.iter()).zip(mean.iter()) {
            assert!(lo <= m && m <= hi, "mean {} not within [{}, {}]", m, lo, hi);
        }
    }
    Ok(())
}

#[test]
fn test_random_l2_squared_is_sum_square() -> Result<(), ReductorError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(19);
    for seed in 0..30 {
        let (shape, axes) = random_case(&mut rng);
        let t = random_f64(&shape, seed);
        let l2: Vec<f64> = t
            .reduce_l2(Some(&axes), false)?
            .get_f64_data()?
            .into_iter()
            .map(|n| n * n)
            .collect();
        let sum_square = t.reduce_sum_square(Some(&axes), false)?.get_f64_data()?;
        assert_all_close(&l2, &sum_square, 1e-9);
    }
    Ok(())
}

#[test]
fn test_max_min_idempotent_on_single_elements() -> Result<(), ReductorError> {
    init_logger();
    let t = random_f64(&[3, 1, 4], 23);
    let max = t.reduce_max(Some(&[1]), true)?;
    let min = t.reduce_min(Some(&[1]), true)?;
    assert_eq!(max, t);
    assert_eq!(min, t);
    assert_eq!(max.reduce_max(Some(&[1]), true)?, max);
    Ok(())
}

#[test]
fn test_reduce_unsqueezed_view() -> Result<(), ReductorError> {
    init_logger();
    let t = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
    let view = unsqueeze_op(&t, 1)?;
    assert_eq!(view.shape(), vec![2, 1, 3]);

    let kept = view.reduce_sum(Some(&[2]), true)?;
    assert_eq!(kept.shape(), vec![2, 1, 1]);
    assert_eq!(kept.get_f32_data()?, vec![6.0, 15.0]);
    // The inserted axis is squeezed away too.
    let squeezed = view.reduce_sum(Some(&[2]), false)?;
    assert_eq!(squeezed.shape(), vec![2]);
    Ok(())
}

#[test]
fn test_rank0_and_empty_axes() -> Result<(), ReductorError> {
    init_logger();
    let scalar = Tensor::scalar(2.0);
    assert_eq!(scalar.reduce_prod(None, false)?.item::<f32>()?, 2.0);
    assert_eq!(scalar.reduce_sum(Some(&[]), true)?.rank(), 0);

    let t = random_f64(&[2, 3], 29);
    let identity = t.reduce_mean(Some(&[]), false)?;
    assert_eq!(identity, t);
    Ok(())
}

#[test]
fn test_nan_propagation() -> Result<(), ReductorError> {
    init_logger();
    let t = create_test_tensor(vec![1.0, f32::NAN, 3.0, 4.0], vec![2, 2]);
    let max = t.reduce_max(Some(&[1]), false)?.get_f32_data()?;
    assert!(max[0].is_nan());
    assert_eq!(max[1], 4.0);
    let sum = t.reduce_sum(Some(&[0]), false)?.get_f32_data()?;
    assert_eq!(sum[0], 4.0);
    assert!(sum[1].is_nan());
    Ok(())
}

#[test]
fn test_empty_tensor_with_large_extents() -> Result<(), ReductorError> {
    init_logger();
    let t = create_test_tensor(vec![], vec![usize::MAX / 2, 0, 3]);
    let sum = t.reduce_sum(Some(&[0, 2]), false)?;
    assert_eq!(sum.shape(), vec![0]);
    let l2 = t.reduce_l2(Some(&[0, 2]), true)?;
    assert_eq!(l2.shape(), vec![1, 0, 1]);

    let err = Tensor::new(vec![], vec![0, usize::MAX, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
    Ok(())
}
