//! Shared error types for meal validation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid price: {value}. Price must be a positive number.")]
    InvalidPrice { value: f64 },

    #[error("Invalid difficulty level: {input}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty { input: String },

    #[error("Invalid outcome: {input}. Must be 'win' or 'loss'.")]
    InvalidOutcome { input: String },

    #[error("Invalid sort_by parameter: {input}. Must be 'wins' or 'win_pct'.")]
    InvalidSort { input: String },

    #[error("Invalid meal specification: {input}")]
    InvalidMealSpec { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
