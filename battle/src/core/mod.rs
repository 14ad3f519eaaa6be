//! Core battle logic: staging, scoring and the winner decision

pub mod decision;
pub mod score;
pub mod stage;

pub use decision::{decide, Side, Verdict};
pub use score::{battle_score, score_delta, NORMALIZATION};
pub use stage::{Stage, STAGE_CAPACITY};
