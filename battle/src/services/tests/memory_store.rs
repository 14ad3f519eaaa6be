//! Tests for InMemoryMealStore

use shared::{Difficulty, LeaderboardSort, MealId, MealSpec, Outcome, SharedError};
use crate::error::StoreError;
use crate::services::memory_store::InMemoryMealStore;
use crate::traits::RecordStore;

async fn seeded_store() -> InMemoryMealStore {
    let store = InMemoryMealStore::new();
    store.create_meal("Spaghetti", "Italian", 10.99, Difficulty::Low).await.unwrap();
    store.create_meal("Ravioli", "Italian", 12.99, Difficulty::Med).await.unwrap();
    store.create_meal("Sushi", "Japanese", 15.99, Difficulty::High).await.unwrap();
    store
}

#[tokio::test]
async fn test_create_meal_assigns_sequential_ids() {
    let store = seeded_store().await;

    let sushi = store.get_meal_by_name("Sushi").await.unwrap();
    assert_eq!(sushi.id, MealId(3));
    assert_eq!(sushi.cuisine, "Japanese");
    assert_eq!(sushi.difficulty, Difficulty::High);
}

#[tokio::test]
async fn test_create_meal_validation() {
    let store = InMemoryMealStore::new();

    let err = store
        .create_meal("Spaghetti", "Italian", -10.99, Difficulty::Low)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(SharedError::InvalidPrice { .. })));
    assert_eq!(err.to_string(), "Invalid price: -10.99. Price must be a positive number.");

    store.create_meal("Spaghetti", "Italian", 10.99, Difficulty::Low).await.unwrap();
    let err = store
        .create_meal("Spaghetti", "Italian", 10.99, Difficulty::Low)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Meal with name Spaghetti already exists");
}

#[tokio::test]
async fn test_create_from_spec() {
    let store = InMemoryMealStore::new();
    let spec: MealSpec = "Tacos:Mexican:8.5:MED".parse().unwrap();
    let meal = store.create_from_spec(&spec).await.unwrap();
    assert_eq!(meal.name, "Tacos");
    assert_eq!(meal.price, 8.5);
}

#[tokio::test]
async fn test_delete_meal_is_soft() {
    let store = seeded_store().await;

    store.delete_meal(MealId(1)).await.unwrap();

    assert_eq!(
        store.get_meal_by_id(MealId(1)).await.unwrap_err(),
        StoreError::Deleted { id: MealId(1) }
    );
    assert_eq!(
        store.get_meal_by_name("Spaghetti").await.unwrap_err(),
        StoreError::Deleted { id: MealId(1) }
    );
    assert_eq!(
        store.delete_meal(MealId(1)).await.unwrap_err().to_string(),
        "Meal with ID 1 has been deleted"
    );

    // Deleted names stay reserved
    let err = store
        .create_meal("Spaghetti", "Italian", 9.0, Difficulty::Low)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { .. }));
}

#[tokio::test]
async fn test_lookups_for_unknown_meals() {
    let store = seeded_store().await;

    let err = store.get_meal_by_id(MealId(999)).await.unwrap_err();
    assert_eq!(err.to_string(), "Meal with ID 999 not found");
    assert!(err.is_not_found());

    let err = store.get_meal_by_name("Ravioli al forno").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!StoreError::Duplicate { name: "x".into() }.is_not_found());
}

#[tokio::test]
async fn test_update_stats_counts_battles_and_wins() {
    let store = seeded_store().await;

    store.update_stats(MealId(1), Outcome::Win).await.unwrap();
    store.update_stats(MealId(1), Outcome::Loss).await.unwrap();
    store.update_stats(MealId(2), Outcome::Loss).await.unwrap();

    let first = store.stats(MealId(1)).await.unwrap();
    assert_eq!((first.battles, first.wins), (2, 1));
    let second = store.stats(MealId(2)).await.unwrap();
    assert_eq!((second.battles, second.wins), (1, 0));
}

#[tokio::test]
async fn test_update_stats_rejects_missing_and_deleted() {
    let store = seeded_store().await;

    let err = store.update_stats(MealId(999), Outcome::Win).await.unwrap_err();
    assert_eq!(err, StoreError::NotFound { id: MealId(999) });

    store.delete_meal(MealId(2)).await.unwrap();
    let err = store.update_stats(MealId(2), Outcome::Win).await.unwrap_err();
    assert_eq!(err, StoreError::Deleted { id: MealId(2) });
}

#[tokio::test]
async fn test_leaderboard_sorting() {
    let store = seeded_store().await;
    // Spaghetti 2/5, Ravioli 1/3, Sushi 3/4
    for (id, wins, battles) in [(1, 2, 5), (2, 1, 3), (3, 3, 4)] {
        for n in 0..battles {
            let outcome = if n < wins { Outcome::Win } else { Outcome::Loss };
            store.update_stats(MealId(id), outcome).await.unwrap();
        }
    }

    let by_wins = store.leaderboard(LeaderboardSort::Wins).await;
    let names: Vec<&str> = by_wins.iter().map(|e| e.meal.name.as_str()).collect();
    assert_eq!(names, vec!["Sushi", "Spaghetti", "Ravioli"]);
    assert_eq!(by_wins[0].win_pct, 0.75);
    assert_eq!(by_wins[1].win_pct, 0.4);
    assert_eq!(by_wins[2].win_pct, 0.333);

    let by_pct = store.leaderboard(LeaderboardSort::WinPct).await;
    let names: Vec<&str> = by_pct.iter().map(|e| e.meal.name.as_str()).collect();
    assert_eq!(names, vec!["Sushi", "Spaghetti", "Ravioli"]);
}

#[tokio::test]
async fn test_leaderboard_skips_unbattled_and_deleted() {
    let store = seeded_store().await;
    assert!(store.leaderboard(LeaderboardSort::Wins).await.is_empty());

    store.update_stats(MealId(1), Outcome::Win).await.unwrap();
    store.update_stats(MealId(2), Outcome::Win).await.unwrap();
    store.delete_meal(MealId(2)).await.unwrap();

    let board = store.leaderboard(LeaderboardSort::Wins).await;
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].meal.id, MealId(1));
}

#[tokio::test]
async fn test_clear_meals_resets_catalogue() {
    let store = seeded_store().await;
    store.clear_meals().await;

    assert!(store.get_meal_by_id(MealId(1)).await.unwrap_err().is_not_found());
    let meal = store.create_meal("Spaghetti", "Italian", 10.99, Difficulty::Low).await.unwrap();
    assert_eq!(meal.id, MealId(1));
}

#[tokio::test]
async fn test_clones_share_catalogue() {
    let store = seeded_store().await;
    let handle = store.clone();
    handle.update_stats(MealId(3), Outcome::Win).await.unwrap();
    assert_eq!(store.stats(MealId(3)).await.unwrap().wins, 1);
}
