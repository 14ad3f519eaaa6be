//! Battle engine for meal match-ups
//!
//! Stage two meals, score them, and let a random draw decide the winner.
//! Outcomes are reported to a record store and the loser leaves the stage
//! so the winner can face the next challenger.

pub mod error;
pub mod traits;
pub mod config;
pub mod core;
pub mod battle_impl;
pub mod services;

// Re-export main types
pub use error::{BattleError, BattleResult, RandomSourceError, StoreError, StoreResult};
pub use traits::*;
pub use config::{BattleConfig, RandomSourceKind};
pub use self::core::{battle_score, decide, score_delta, Side, Stage, Verdict, NORMALIZATION, STAGE_CAPACITY};
pub use battle_impl::BattleEngine;
pub use services::*;
