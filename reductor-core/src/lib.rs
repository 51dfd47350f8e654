//! Axis-wise reductions over dense `f32` / `f64` tensors.
//!
//! All reducers share one engine (`ops::reduction::reduce_op`) that walks the
//! reduced sub-space of each output element in mixed-radix order.

pub mod buffer;
pub mod error;
pub mod ops;
pub mod tensor;
pub mod tensor_data;
pub mod types;
pub mod utils;

pub use error::{ErrorKind, ReductorError};
pub use tensor::Tensor;
pub use types::{DType, Element};

// Re-export traits required by public functions/structs
pub use num_traits;
