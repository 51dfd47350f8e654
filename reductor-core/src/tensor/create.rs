// src/tensor/create.rs

use crate::error::ReductorError;
use crate::tensor::utils::checked_numel;
use crate::tensor::Tensor;
use crate::types::DType;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Creates a new f32 tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor, ReductorError> {
    full(shape, 0.0)
}

/// Creates a new f64 tensor filled with zeros with the specified shape.
pub fn zeros_f64(shape: &[usize]) -> Result<Tensor, ReductorError> {
    full_f64(shape, 0.0)
}

/// Creates a new f32 tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Result<Tensor, ReductorError> {
    full(shape, 1.0)
}

/// Creates a new f64 tensor filled with ones with the specified shape.
pub fn ones_f64(shape: &[usize]) -> Result<Tensor, ReductorError> {
    full_f64(shape, 1.0)
}

/// Creates a new f32 tensor filled with `value`.
pub fn full(shape: &[usize], value: f32) -> Result<Tensor, ReductorError> {
    let numel = checked_numel(shape)?;
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a new f64 tensor filled with `value`.
pub fn full_f64(shape: &[usize], value: f64) -> Result<Tensor, ReductorError> {
    let numel = checked_numel(shape)?;
    Tensor::new_f64(vec![value; numel], shape.to_vec())
}

/// Creates a tensor of zeros with the same shape and DType as `tensor`.
pub fn zeros_like(tensor: &Tensor) -> Result<Tensor, ReductorError> {
    let shape = tensor.shape();
    match tensor.dtype() {
        DType::F32 => zeros(&shape),
        DType::F64 => zeros_f64(&shape),
    }
}

/// f32 tensor with values drawn uniformly from `[0, 1)`.
pub fn rand(shape: &[usize]) -> Result<Tensor, ReductorError> {
    rand_with(shape, &mut rand::thread_rng())
}

/// Like [`rand`], but reproducible for a given seed.
pub fn rand_seeded(shape: &[usize], seed: u64) -> Result<Tensor, ReductorError> {
    rand_with(shape, &mut StdRng::seed_from_u64(seed))
}

/// f32 tensor with values drawn from the standard normal distribution.
pub fn randn(shape: &[usize]) -> Result<Tensor, ReductorError> {
    randn_with(shape, &mut rand::thread_rng())
}

/// Like [`randn`], but reproducible for a given seed.
pub fn randn_seeded(shape: &[usize], seed: u64) -> Result<Tensor, ReductorError> {
    randn_with(shape, &mut StdRng::seed_from_u64(seed))
}

fn rand_with<R: Rng>(shape: &[usize], rng: &mut R) -> Result<Tensor, ReductorError> {
    let numel = checked_numel(shape)?;
    let data_vec: Vec<f32> = (0..numel).map(|_| rng.gen::<f32>()).collect();
    Tensor::new(data_vec, shape.to_vec())
}

fn randn_with<R: Rng>(shape: &[usize], rng: &mut R) -> Result<Tensor, ReductorError> {
    let numel = checked_numel(shape)?;
    let data_vec: Vec<f32> = (0..numel).map(|_| StandardNormal.sample(rng)).collect();
    Tensor::new(data_vec, shape.to_vec())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
