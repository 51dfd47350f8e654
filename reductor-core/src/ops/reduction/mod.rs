// src/ops/reduction/mod.rs
// Axis reductions: the generic engine, its combining functions, and the named reducers.

pub mod combiner;
pub mod engine;
pub mod utils;

pub mod log_sum;
pub mod max;
pub mod mean;
pub mod min;
pub mod norm;
pub mod prod;
pub mod sum;

pub use combiner::{Combiner, FoldFn, Max, Mean, Min, Prod, Sum};
pub use engine::{reduce_op, reduce_typed};
pub use log_sum::{log_sum_exp_op, log_sum_op};
pub use max::max_op;
pub use mean::mean_op;
pub use min::min_op;
pub use norm::{l1_op, l2_op, sum_square_op};
pub use prod::prod_op;
pub use sum::sum_op;
pub use utils::{validate_reduce_params, ReduceDescriptor};
