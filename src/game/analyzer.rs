use std::collections::BTreeMap;

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use super::arrangement_search::{arrangements_for, SearchStrategy};
use super::evaluator::{evaluate, is_valid_answer};
use crate::model::{Card, PuzzleResult, Target};

/// Scratch record for one distinct valid answer
#[derive(Debug)]
struct AnswerEntry {
    arrangement: Vec<Card>,
    count: usize,
    float_detected: bool,
}

impl AnswerEntry {
    fn to_target(&self, result: u64) -> Target {
        Target {
            result,
            arrangement: self.arrangement.clone(),
            permutation_count: self.count,
            float_detected: self.float_detected,
        }
    }
}

/// Evaluate every arrangement of `hand` and derive its Dusk and Dawn targets.
/// Hands with fewer than two distinct valid answers come back invalid.
pub fn generate_answers<R: Rng + ?Sized>(hand: &[Card], rng: &mut R) -> PuzzleResult {
    if hand.is_empty() {
        return PuzzleResult::invalid();
    }

    let search = arrangements_for(hand, rng);
    let total_permutations = search.arrangements.len();

    // keyed by answer, so iteration is ascending
    let mut answers: BTreeMap<u64, AnswerEntry> = BTreeMap::new();
    for arrangement in search.arrangements {
        let evaluation = evaluate(&arrangement);
        if !is_valid_answer(evaluation.answer) {
            continue;
        }
        answers
            .entry(evaluation.answer as u64)
            .and_modify(|entry| entry.count += 1)
            .or_insert(AnswerEntry {
                arrangement: evaluation.arrangement,
                count: 1,
                float_detected: evaluation.float_detected,
            });
    }

    if answers.len() < 2 {
        debug!(
            target: "analyzer",
            "Hand {:?} has {} distinct valid answers; not a usable puzzle",
            hand,
            answers.len()
        );
        return PuzzleResult::invalid();
    }

    let (dusk, dawn) = match (answers.first_key_value(), answers.last_key_value()) {
        (Some((&low, low_entry)), Some((&high, high_entry))) => {
            (low_entry.to_target(low), high_entry.to_target(high))
        }
        _ => return PuzzleResult::invalid(),
    };

    let is_good = match search.strategy {
        SearchStrategy::Exhaustive => dawn.permutation_count == 1,
        // uniqueness cannot be established from a sample
        SearchStrategy::Sampled => true,
    };

    let result = PuzzleResult {
        has_valid_answers: true,
        is_good,
        has_zero: dusk.result == 0,
        total_permutations,
        unique_answers: answers.len(),
        dusk,
        dawn,
    };
    trace!(
        target: "analyzer",
        "Hand {:?}: dusk {} dawn {} over {} arrangements ({} unique)",
        hand,
        result.dusk.result,
        result.dawn.result,
        result.total_permutations,
        result.unique_answers
    );
    result
}

/// Analyze a hand that arrived from elsewhere, e.g. a shared link. Passing a
/// seed makes sampled hands reproducible.
pub fn analyze(hand: &[Card], seed: Option<u64>) -> PuzzleResult {
    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
    trace!(target: "analyzer", "Analyzing with seed {}", seed);
    generate_answers(hand, &mut StdRng::seed_from_u64(seed))
}
