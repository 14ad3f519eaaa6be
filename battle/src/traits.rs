//! Collaborator trait definitions for dependency injection

use async_trait::async_trait;

use shared::{MealId, Outcome};
use crate::error::{RandomSourceError, StoreResult};

/// Source of uniform samples in `[0, 1)`
#[mockall::automock]
#[async_trait]
pub trait RandomSource: Send + Sync {
    /// Draw one sample
    async fn sample(&self) -> Result<f64, RandomSourceError>;
}

/// Persistent win/loss statistics for meals.
///
/// Implementations must fail with a not-found error when `id` is missing or
/// has been deleted.
#[mockall::automock]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Record one battle result for a meal
    async fn update_stats(&self, id: MealId, outcome: Outcome) -> StoreResult<()>;
}
