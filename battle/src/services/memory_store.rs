//! In-memory meal catalogue implementing the record store

use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use shared::{
    validate_price, Difficulty, LeaderboardEntry, LeaderboardSort, Meal, MealId, MealSpec,
    MealStats, Outcome,
};
use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

#[derive(Debug, Clone)]
struct StoredMeal {
    meal: Meal,
    stats: MealStats,
    deleted: bool,
}

#[derive(Debug, Default)]
struct Catalogue {
    meals: BTreeMap<MealId, StoredMeal>,
    next_id: u64,
}

impl Catalogue {
    fn live(&self, id: MealId) -> StoreResult<&StoredMeal> {
        match self.meals.get(&id) {
            None => Err(StoreError::NotFound { id }),
            Some(stored) if stored.deleted => Err(StoreError::Deleted { id }),
            Some(stored) => Ok(stored),
        }
    }

    fn live_mut(&mut self, id: MealId) -> StoreResult<&mut StoredMeal> {
        match self.meals.get_mut(&id) {
            None => Err(StoreError::NotFound { id }),
            Some(stored) if stored.deleted => Err(StoreError::Deleted { id }),
            Some(stored) => Ok(stored),
        }
    }
}

/// Meal catalogue with soft deletes and battle statistics, held in memory.
///
/// Clones share the same catalogue.
#[derive(Clone, Default)]
pub struct InMemoryMealStore {
    catalogue: Arc<RwLock<Catalogue>>,
}

impl InMemoryMealStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a meal. Names are unique across live and deleted meals.
    pub async fn create_meal(
        &self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> StoreResult<Meal> {
        validate_price(price)?;

        let mut catalogue = self.catalogue.write().await;
        if catalogue.meals.values().any(|stored| stored.meal.name == name) {
            return Err(StoreError::Duplicate {
                name: name.to_string(),
            });
        }

        catalogue.next_id += 1;
        let id = MealId(catalogue.next_id);
        let meal = Meal::new(id, name, cuisine, price, difficulty)?;
        catalogue.meals.insert(
            id,
            StoredMeal {
                meal: meal.clone(),
                stats: MealStats::default(),
                deleted: false,
            },
        );

        info!(meal_id = %id, meal = %name, "Created meal");
        Ok(meal)
    }

    /// Add a meal from a parsed specification
    pub async fn create_from_spec(&self, spec: &MealSpec) -> StoreResult<Meal> {
        self.create_meal(&spec.name, &spec.cuisine, spec.price, spec.difficulty)
            .await
    }

    /// Mark a meal as deleted. Deleting twice fails.
    pub async fn delete_meal(&self, id: MealId) -> StoreResult<()> {
        let mut catalogue = self.catalogue.write().await;
        catalogue.live_mut(id)?.deleted = true;
        info!(meal_id = %id, "Deleted meal");
        Ok(())
    }

    pub async fn get_meal_by_id(&self, id: MealId) -> StoreResult<Meal> {
        let catalogue = self.catalogue.read().await;
        Ok(catalogue.live(id)?.meal.clone())
    }

    pub async fn get_meal_by_name(&self, name: &str) -> StoreResult<Meal> {
        let catalogue = self.catalogue.read().await;
        let stored = catalogue
            .meals
            .values()
            .find(|stored| stored.meal.name == name)
            .ok_or_else(|| StoreError::NameNotFound {
                name: name.to_string(),
            })?;
        if stored.deleted {
            return Err(StoreError::Deleted { id: stored.meal.id });
        }
        Ok(stored.meal.clone())
    }

    pub async fn stats(&self, id: MealId) -> StoreResult<MealStats> {
        let catalogue = self.catalogue.read().await;
        Ok(catalogue.live(id)?.stats)
    }

    /// Live meals with at least one battle, best first
    pub async fn leaderboard(&self, sort: LeaderboardSort) -> Vec<LeaderboardEntry> {
        let catalogue = self.catalogue.read().await;
        let mut entries: Vec<LeaderboardEntry> = catalogue
            .meals
            .values()
            .filter(|stored| !stored.deleted && stored.stats.battles > 0)
            .map(|stored| LeaderboardEntry {
                meal: stored.meal.clone(),
                battles: stored.stats.battles,
                wins: stored.stats.wins,
                win_pct: stored.stats.win_pct(),
            })
            .collect();

        match sort {
            LeaderboardSort::Wins => entries.sort_by(|a, b| b.wins.cmp(&a.wins)),
            LeaderboardSort::WinPct => entries.sort_by(|a, b| b.win_pct.total_cmp(&a.win_pct)),
        }
        entries
    }

    /// Drop every meal and reset id allocation
    pub async fn clear_meals(&self) {
        let mut catalogue = self.catalogue.write().await;
        *catalogue = Catalogue::default();
        info!("Cleared meal catalogue");
    }
}

#[async_trait]
impl RecordStore for InMemoryMealStore {
    async fn update_stats(&self, id: MealId, outcome: Outcome) -> StoreResult<()> {
        let mut catalogue = self.catalogue.write().await;
        let stored = catalogue.live_mut(id)?;
        stored.stats.record(outcome);
        debug!(meal_id = %id, %outcome, battles = stored.stats.battles, "Updated meal stats");
        Ok(())
    }
}
