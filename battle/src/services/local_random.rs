//! In-process random sources

use async_trait::async_trait;
use rand::Rng;

use crate::error::RandomSourceError;
use crate::traits::RandomSource;

/// Uniform samples from the thread-local RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RandomSource for ThreadRngSource {
    async fn sample(&self) -> Result<f64, RandomSourceError> {
        // gen::<f64>() is uniform over [0, 1)
        Ok(rand::thread_rng().gen::<f64>())
    }
}

/// Always returns the same sample
#[derive(Clone, Copy, Debug)]
pub struct FixedRandomSource {
    value: f64,
}

impl FixedRandomSource {
    /// Create a fixed source, rejecting values outside `[0, 1)`
    pub fn new(value: f64) -> Result<Self, RandomSourceError> {
        if !(0.0..1.0).contains(&value) {
            return Err(RandomSourceError::OutOfRange { value });
        }
        Ok(Self { value })
    }
}

#[async_trait]
impl RandomSource for FixedRandomSource {
    async fn sample(&self) -> Result<f64, RandomSourceError> {
        Ok(self.value)
    }
}
