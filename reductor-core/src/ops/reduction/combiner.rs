//! Combining functions folded by the reduction engine.

use crate::types::Element;

/// A fold over the values gathered for one output element.
///
/// The engine seeds the accumulator with the value at reduce index 0, then
/// calls [`fold`](Combiner::fold) for reduce indices `1..total` in ascending
/// order, and finally [`finish`](Combiner::finish) once. `position` is the
/// reduce index of `value` and `total` the number of values being folded.
pub trait Combiner<T> {
    /// Name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Smallest number of values this combiner can fold.
    fn min_elements(&self) -> usize {
        1
    }

    /// Folds `value` into `acc`.
    fn fold(&self, acc: T, value: T, position: usize, total: usize) -> T;

    /// Post-processes the folded accumulator.
    fn finish(&self, acc: T, _total: usize) -> T {
        acc
    }
}

/// Running maximum. A NaN anywhere in the group makes the result NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

/// Running minimum. A NaN anywhere in the group makes the result NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// Running sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

/// Running product.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prod;

/// Arithmetic mean: sums, then divides by the group size in `finish`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<T: Element> Combiner<T> for Max {
    fn name(&self) -> &'static str {
        "max_op"
    }

    fn fold(&self, acc: T, value: T, _position: usize, _total: usize) -> T {
        if acc.is_nan() {
            acc
        } else if value.is_nan() || value > acc {
            value
        } else {
            acc
        }
    }
}

impl<T: Element> Combiner<T> for Min {
    fn name(&self) -> &'static str {
        "min_op"
    }

    fn fold(&self, acc: T, value: T, _position: usize, _total: usize) -> T {
        if acc.is_nan() {
            acc
        } else if value.is_nan() || value < acc {
            value
        } else {
            acc
        }
    }
}

impl<T: Element> Combiner<T> for Sum {
    fn name(&self) -> &'static str {
        "sum_op"
    }

    fn fold(&self, acc: T, value: T, _position: usize, _total: usize) -> T {
        acc + value
    }
}

impl<T: Element> Combiner<T> for Prod {
    fn name(&self) -> &'static str {
        "prod_op"
    }

    fn fold(&self, acc: T, value: T, _position: usize, _total: usize) -> T {
        acc * value
    }
}

impl<T: Element> Combiner<T> for Mean {
    fn name(&self) -> &'static str {
        "mean_op"
    }

    fn fold(&self, acc: T, value: T, _position: usize, _total: usize) -> T {
        acc + value
    }

    fn finish(&self, acc: T, total: usize) -> T {
        match T::from_usize(total) {
            Some(n) => acc / n,
            None => T::nan(),
        }
    }
}

/// Wraps a plain binary function as a [`Combiner`].
///
/// ```
/// use reductor_core::ops::reduction::{reduce_typed, FoldFn};
/// use reductor_core::Tensor;
///
/// let t = Tensor::new(vec![1.0, 5.0, 3.0, 2.0], vec![2, 2]).unwrap();
/// let spread = FoldFn::new("abs_max", |a: f32, b: f32| a.abs().max(b.abs()));
/// let r = reduce_typed::<f32, _>(&t, &spread, Some(&[1]), false).unwrap();
/// assert_eq!(r.get_f32_data().unwrap(), vec![5.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FoldFn<F> {
    name: &'static str,
    f: F,
}

impl<F> FoldFn<F> {
    pub fn new(name: &'static str, f: F) -> Self {
        FoldFn { name, f }
    }
}

impl<T, F> Combiner<T> for FoldFn<F>
where
    F: Fn(T, T) -> T,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn fold(&self, acc: T, value: T, _position: usize, _total: usize) -> T {
        (self.f)(acc, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_all<C: Combiner<f64>>(combiner: &C, values: &[f64]) -> f64 {
        let total = values.len();
        let acc = values[1..]
            .iter()
            .enumerate()
            .fold(values[0], |acc, (i, &v)| combiner.fold(acc, v, i + 1, total));
        combiner.finish(acc, total)
    }

    #[test]
    fn test_basic_combiners() {
        let values = [3.0, -1.0, 4.0, 1.5];
        assert_eq!(fold_all(&Max, &values), 4.0);
        assert_eq!(fold_all(&Min, &values), -1.0);
        assert_eq!(fold_all(&Sum, &values), 7.5);
        assert_eq!(fold_all(&Prod, &values), -18.0);
        assert_eq!(fold_all(&Mean, &values), 1.875);
    }

    #[test]
    fn test_single_value_is_identity() {
        assert_eq!(fold_all(&Max, &[2.0]), 2.0);
        assert_eq!(fold_all(&Mean, &[2.0]), 2.0);
    }

    #[test]
    fn test_max_min_propagate_nan() {
        assert!(fold_all(&Max, &[1.0, f64::NAN, 3.0]).is_nan());
        assert!(fold_all(&Max, &[f64::NAN, 3.0]).is_nan());
        assert!(fold_all(&Min, &[1.0, 0.0, f64::NAN]).is_nan());
    }

    #[test]
    fn test_fold_fn() {
        let c = FoldFn::new("sub", |a: f64, b: f64| a - b);
        assert_eq!(Combiner::<f64>::name(&c), "sub");
        // Left-to-right: ((10 - 1) - 2) - 3
        assert_eq!(fold_all(&c, &[10.0, 1.0, 2.0, 3.0]), 4.0);
    }
}
