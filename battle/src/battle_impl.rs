//! Battle engine with dependency injection

use tracing::{debug, info, warn};

use shared::{Meal, Outcome};
use crate::core::{decide, Stage, Verdict};
use crate::error::{BattleError, BattleResult, RandomSourceError};
use crate::traits::{RandomSource, RecordStore};

/// Stages two meals and resolves a battle between them.
///
/// The engine holds no locks; mutating operations take `&mut self` and
/// callers sharing one engine must serialize access themselves. Dropping a
/// `resolve` future after it has started may leave stats half-recorded.
pub struct BattleEngine<R, S>
where
    R: RandomSource,
    S: RecordStore,
{
    stage: Stage,
    pub random_source: R,
    pub record_store: S,
}

impl<R, S> BattleEngine<R, S>
where
    R: RandomSource,
    S: RecordStore,
{
    /// Create a new engine with an empty stage
    pub fn new(random_source: R, record_store: S) -> Self {
        Self {
            stage: Stage::new(),
            random_source,
            record_store,
        }
    }

    /// Stage a combatant
    pub fn prep(&mut self, meal: Meal) -> BattleResult<()> {
        let name = meal.name.clone();
        match self.stage.prep(meal) {
            Ok(()) => {
                info!(meal = %name, staged = self.stage.len(), "Prepped combatant");
                Ok(())
            }
            Err(e) => {
                warn!(meal = %name, "Rejected combatant: stage is full");
                Err(e)
            }
        }
    }

    /// Snapshot of the staged combatants
    pub fn list(&self) -> Vec<Meal> {
        self.stage.list()
    }

    /// Remove every staged combatant
    pub fn clear(&mut self) {
        debug!(staged = self.stage.len(), "Clearing combatants");
        self.stage.clear();
    }

    /// Resolve the staged battle and return the winner's name.
    ///
    /// Both stats updates must succeed before the loser is evicted; on any
    /// collaborator failure the stage still holds both combatants.
    pub async fn resolve(&mut self) -> BattleResult<String> {
        let (verdict, winner, loser) = self.judge().await?;

        self.record_store
            .update_stats(winner.id, Outcome::Win)
            .await
            .inspect_err(|e| warn!(meal_id = %winner.id, error = %e, "Failed to record win"))?;
        self.record_store
            .update_stats(loser.id, Outcome::Loss)
            .await
            .inspect_err(|e| warn!(meal_id = %loser.id, error = %e, "Failed to record loss"))?;

        self.stage.evict(verdict.loser().index());

        let upset = verdict.favorite.is_some() && !verdict.favorite_won();
        info!(winner = %winner.name, loser = %loser.name, upset, "Battle resolved");
        Ok(winner.name)
    }

    /// Score the staged pair and draw the sample, without side effects
    async fn judge(&self) -> BattleResult<(Verdict, Meal, Meal)> {
        let Some((first, second)) = self.stage.pair() else {
            return Err(BattleError::InsufficientCombatants {
                staged: self.stage.len(),
            });
        };

        let draw = self.random_source.sample().await?;
        if !(0.0..1.0).contains(&draw) {
            return Err(RandomSourceError::OutOfRange { value: draw }.into());
        }

        let verdict = decide(first, second, draw);
        debug!(
            first = %first.name,
            first_score = verdict.first_score,
            second = %second.name,
            second_score = verdict.second_score,
            delta = verdict.delta,
            draw = verdict.draw,
            "Scored combatants"
        );

        let (winner, loser) = match verdict.winner.index() {
            0 => (first.clone(), second.clone()),
            _ => (second.clone(), first.clone()),
        };
        Ok((verdict, winner, loser))
    }
}
