//! Battle score calculation

use shared::Meal;

/// Divisor mapping a raw score gap onto the `[0, 1)` scale of a random draw
pub const NORMALIZATION: f64 = 100.0;

/// Fitness of a meal: `price * cuisine length - difficulty penalty`.
///
/// The cuisine length counts characters, not bytes.
pub fn battle_score(meal: &Meal) -> f64 {
    let cuisine_len = meal.cuisine.chars().count() as f64;
    meal.price * cuisine_len - f64::from(meal.difficulty.penalty())
}

/// Normalized score gap. Not clamped: large gaps exceed 1.0.
pub fn score_delta(first: f64, second: f64) -> f64 {
    (first - second).abs() / NORMALIZATION
}
