//! Pure winner selection for a staged pair

use serde::Serialize;

use shared::Meal;
use super::score::{battle_score, score_delta};

/// Position of a combatant on the stage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Outcome of comparing two scored combatants against one draw
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Verdict {
    pub first_score: f64,
    pub second_score: f64,
    pub delta: f64,
    pub draw: f64,
    /// Combatant with the strictly higher score, if any
    pub favorite: Option<Side>,
    pub winner: Side,
}

impl Verdict {
    pub fn loser(&self) -> Side {
        self.winner.other()
    }

    /// True when the higher-scoring combatant won
    pub fn favorite_won(&self) -> bool {
        self.favorite == Some(self.winner)
    }
}

/// Decide a battle between `first` and `second` for the sample `draw`.
///
/// The favorite wins when `delta > draw`, otherwise the underdog wins. With
/// equal scores the first combatant stands in as favorite; `delta` is zero
/// so that branch is never taken and the second combatant wins.
pub fn decide(first: &Meal, second: &Meal, draw: f64) -> Verdict {
    let first_score = battle_score(first);
    let second_score = battle_score(second);
    let delta = score_delta(first_score, second_score);

    let favorite = if first_score > second_score {
        Some(Side::First)
    } else if second_score > first_score {
        Some(Side::Second)
    } else {
        None
    };

    let nominal_favorite = favorite.unwrap_or(Side::First);
    let winner = if delta > draw {
        nominal_favorite
    } else {
        nominal_favorite.other()
    };

    Verdict {
        first_score,
        second_score,
        delta,
        draw,
        favorite,
        winner,
    }
}
