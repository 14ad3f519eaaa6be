//! Battle error types

use thiserror::Error;
use shared::{MealId, SharedError};

/// Result type for battle operations
pub type BattleResult<T> = Result<T, BattleError>;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Battle error types
#[derive(Error, Debug)]
pub enum BattleError {
    #[error("Combatant list is full, cannot add more combatants.")]
    CapacityExceeded { capacity: usize },

    #[error("Two combatants must be prepped for a battle (staged: {staged}).")]
    InsufficientCombatants { staged: usize },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Validation(#[from] SharedError),
}

/// Errors raised by a record store collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Meal with ID {id} not found")]
    NotFound { id: MealId },

    #[error("Meal with ID {id} has been deleted")]
    Deleted { id: MealId },

    #[error("Meal with name {name} not found")]
    NameNotFound { name: String },

    #[error("Meal with name {name} already exists")]
    Duplicate { name: String },

    #[error(transparent)]
    Validation(#[from] SharedError),
}

impl StoreError {
    /// True when the id does not resolve to a live record
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::Deleted { .. } | StoreError::NameNotFound { .. }
        )
    }
}

/// Errors raised while drawing a random sample
#[derive(Error, Debug)]
pub enum RandomSourceError {
    #[error("Random source request failed: {message}")]
    Request { message: String },

    #[error("Random source returned HTTP {status}")]
    Status { status: u16 },

    #[error("Random source returned unparseable value: {body:?}")]
    Parse { body: String },

    #[error("Random sample {value} outside [0, 1)")]
    OutOfRange { value: f64 },
}

impl From<reqwest::Error> for RandomSourceError {
    fn from(err: reqwest::Error) -> Self {
        RandomSourceError::Request {
            message: err.to_string(),
        }
    }
}
