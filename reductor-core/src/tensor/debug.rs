// src/tensor/debug.rs
use crate::tensor::Tensor;
use crate::types::DType;
use std::fmt;

const PREVIEW_LEN: usize = 8;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Tensor(shape={:?}, strides={:?}, offset={}, dtype={:?}, data=",
            guard.shape, guard.strides, guard.offset, guard.dtype
        )?;
        let numel = guard.numel();
        let preview = match guard.dtype {
            DType::F32 => guard
                .to_contiguous_vec::<f32>()
                .map(|v| format!("{:?}", &v[..numel.min(PREVIEW_LEN)])),
            DType::F64 => guard
                .to_contiguous_vec::<f64>()
                .map(|v| format!("{:?}", &v[..numel.min(PREVIEW_LEN)])),
        };
        match preview {
            Ok(p) if numel > PREVIEW_LEN => write!(f, "{} ... ({} elements))", p, numel),
            Ok(p) => write!(f, "{})", p),
            Err(_) => write!(f, "<unreadable>)"),
        }
    }
}
