// src/ops/math_elem/mod.rs
// Element-wise math functions used by the derived reductions.

pub mod abs;
pub mod exp;
pub mod ln;
pub mod pow;
pub mod square;

pub use abs::abs_op;
pub use exp::exp_op;
pub use ln::ln_op;
pub use pow::{pow_op, pow_scalar_op};
pub use square::square_op;
