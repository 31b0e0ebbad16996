use serde::{Deserialize, Serialize};

use super::Card;

/// One extremum of a puzzle: the lowest (Dusk) or highest (Dawn) valid result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Target {
    pub result: u64,
    pub arrangement: Vec<Card>,
    pub permutation_count: usize,
    pub float_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PuzzleResult {
    pub has_valid_answers: bool,
    /// Dawn is reachable by exactly one arrangement. Always true for sampled hands.
    pub is_good: bool,
    pub has_zero: bool,
    pub total_permutations: usize,
    pub unique_answers: usize,
    pub dusk: Target,
    pub dawn: Target,
}

impl PuzzleResult {
    /// The result reported for hands without a usable Dusk/Dawn spread.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Arrangements examined per distinct valid answer; lower means fewer
    /// duplicate orderings per discoverable value.
    pub fn quality_ratio(&self) -> f64 {
        if self.unique_answers == 0 {
            return f64::INFINITY;
        }
        self.total_permutations as f64 / self.unique_answers as f64
    }
}
