//! Bounded holding area for combatants

use shared::Meal;

use crate::error::{BattleError, BattleResult};

/// Maximum number of staged combatants
pub const STAGE_CAPACITY: usize = 2;

/// Ordered stage holding at most [`STAGE_CAPACITY`] meals.
///
/// Insertion order decides which meal is the first and which the second
/// combatant. The same meal may be staged twice.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    combatants: Vec<Meal>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            combatants: Vec::with_capacity(STAGE_CAPACITY),
        }
    }

    /// Append a combatant, failing without mutation when the stage is full
    pub fn prep(&mut self, meal: Meal) -> BattleResult<()> {
        if self.is_full() {
            return Err(BattleError::CapacityExceeded {
                capacity: STAGE_CAPACITY,
            });
        }
        self.combatants.push(meal);
        Ok(())
    }

    /// Snapshot of the staged combatants in insertion order
    pub fn list(&self) -> Vec<Meal> {
        self.combatants.clone()
    }

    pub fn clear(&mut self) {
        self.combatants.clear();
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.combatants.len() >= STAGE_CAPACITY
    }

    /// Borrow both combatants when exactly two are staged
    pub fn pair(&self) -> Option<(&Meal, &Meal)> {
        match self.combatants.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Remove the combatant at `index`, if present
    pub fn evict(&mut self, index: usize) -> Option<Meal> {
        (index < self.combatants.len()).then(|| self.combatants.remove(index))
    }
}
