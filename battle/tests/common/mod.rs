//! Shared fixtures for battle integration tests

use battle::{MockRandomSource, MockRecordStore};
use mockall::predicate::eq;
use shared::{Difficulty, Meal, MealId, Outcome};

/// Italian, HIGH difficulty: 20 * 7 - 1 = 139
pub fn sample_meal1() -> Meal {
    Meal::new(MealId(1), "Meal 1", "Italian", 20.0, Difficulty::High).unwrap()
}

/// Mexican, LOW difficulty: 15 * 7 - 3 = 102
pub fn sample_meal2() -> Meal {
    Meal::new(MealId(2), "Meal 2", "Mexican", 15.0, Difficulty::Low).unwrap()
}

/// Saudi, MED difficulty: 18 * 5 - 2 = 88
pub fn sample_meal3() -> Meal {
    Meal::new(MealId(3), "Meal 3", "Saudi", 18.0, Difficulty::Med).unwrap()
}

/// Random source returning `value` exactly once
pub fn draw_once(value: f64) -> MockRandomSource {
    let mut random = MockRandomSource::new();
    random.expect_sample().times(1).returning(move || Ok(value));
    random
}

/// Record store expecting one win for `winner` and one loss for `loser`
pub fn expect_result(winner: MealId, loser: MealId) -> MockRecordStore {
    let mut store = MockRecordStore::new();
    store
        .expect_update_stats()
        .with(eq(winner), eq(Outcome::Win))
        .times(1)
        .returning(|_, _| Ok(()));
    store
        .expect_update_stats()
        .with(eq(loser), eq(Outcome::Loss))
        .times(1)
        .returning(|_, _| Ok(()));
    store
}
