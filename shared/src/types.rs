//! Core shared types for meals, tiers and battle outcomes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Unique identifier for a meal record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MealId(pub u64);

impl MealId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Preparation difficulty of a meal.
///
/// Variants are declared from lowest to highest battle penalty. The penalty is
/// derived from this ordering, so renaming a tier never changes its weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MED")]
    Med,
    #[serde(rename = "LOW")]
    Low,
}

impl Difficulty {
    /// All tiers in penalty order
    pub const ALL: [Difficulty; 3] = [Difficulty::High, Difficulty::Med, Difficulty::Low];

    /// Score penalty for this tier: 1, 2 or 3 by position in [`Difficulty::ALL`]
    pub fn penalty(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::High => write!(f, "HIGH"),
            Difficulty::Med => write!(f, "MED"),
            Difficulty::Low => write!(f, "LOW"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Difficulty::High),
            "MED" => Ok(Difficulty::Med),
            "LOW" => Ok(Difficulty::Low),
            _ => Err(SharedError::InvalidDifficulty {
                input: s.to_string(),
            }),
        }
    }
}

/// A meal that can be staged for battle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

impl Meal {
    /// Build a meal, rejecting non-positive or non-finite prices
    pub fn new(
        id: MealId,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> SharedResult<Self> {
        validate_price(price)?;
        Ok(Self {
            id,
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        })
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, ${:.2}, {})",
            self.name, self.cuisine, self.price, self.difficulty
        )
    }
}

/// Ensure a price is a positive, finite number
pub fn validate_price(price: f64) -> SharedResult<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(SharedError::InvalidPrice { value: price })
    }
}

/// Result of a single battle from one combatant's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

impl FromStr for Outcome {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Outcome::Win),
            "loss" => Ok(Outcome::Loss),
            _ => Err(SharedError::InvalidOutcome {
                input: s.to_string(),
            }),
        }
    }
}

/// Accumulated battle statistics for a meal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealStats {
    pub battles: u64,
    pub wins: u64,
}

impl MealStats {
    pub fn record(&mut self, outcome: Outcome) {
        self.battles += 1;
        if outcome == Outcome::Win {
            self.wins += 1;
        }
    }

    /// Fraction of battles won, rounded to three decimals (0.0 with no battles)
    pub fn win_pct(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        let raw = self.wins as f64 / self.battles as f64;
        (raw * 1000.0).round() / 1000.0
    }
}

/// Leaderboard ordering key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl FromStr for LeaderboardSort {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            _ => Err(SharedError::InvalidSort {
                input: s.to_string(),
            }),
        }
    }
}

/// One row of the leaderboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub meal: Meal,
    pub battles: u64,
    pub wins: u64,
    pub win_pct: f64,
}

/// Unsaved meal description in `NAME:CUISINE:PRICE:DIFFICULTY` form
#[derive(Clone, Debug, PartialEq)]
pub struct MealSpec {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

impl FromStr for MealSpec {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SharedError::InvalidMealSpec {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [name, cuisine, price, difficulty] = parts.as_slice() else {
            return Err(invalid());
        };
        if name.is_empty() || cuisine.is_empty() {
            return Err(invalid());
        }

        let price: f64 = price.parse().map_err(|_| invalid())?;
        validate_price(price)?;

        Ok(Self {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            price,
            difficulty: difficulty.parse()?,
        })
    }
}
