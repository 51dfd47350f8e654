// src/ops/view/mod.rs

pub mod squeeze_unsqueeze;

pub use squeeze_unsqueeze::{squeeze_op, unsqueeze_op};
