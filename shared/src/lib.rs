//! Shared types for the meal battle workspace
//!
//! Contains the meal record model, tier and outcome enums, validation
//! errors and logging setup used by every crate in the workspace.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
