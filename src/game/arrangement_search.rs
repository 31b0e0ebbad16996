use std::collections::HashSet;

use log::{debug, trace};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use super::signature::ordering_key;
use crate::model::Card;

/// Hands up to this size are searched exhaustively (6! = 720 orderings)
pub const EXHAUSTIVE_LIMIT: usize = 6;

/// Number of distinct orderings sampled from larger hands
pub const SAMPLE_TARGET: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    Exhaustive,
    Sampled,
}

impl SearchStrategy {
    pub fn for_hand_size(n_cards: usize) -> SearchStrategy {
        if n_cards <= EXHAUSTIVE_LIMIT {
            SearchStrategy::Exhaustive
        } else {
            SearchStrategy::Sampled
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArrangementSet {
    pub strategy: SearchStrategy,
    pub arrangements: Vec<Vec<Card>>,
}

/// Every ordering of `cards`, using Heap's algorithm. Each emitted ordering is
/// an independent copy of the working array.
pub fn all_permutations(cards: &[Card]) -> Vec<Vec<Card>> {
    let n = cards.len();
    if n == 0 {
        return vec![];
    }

    let mut working = cards.to_vec();
    let mut counters = vec![0usize; n];
    let mut permutations = vec![working.clone()];

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                working.swap(0, i);
            } else {
                working.swap(counters[i], i);
            }
            permutations.push(working.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
    permutations
}

/// Up to `target` distinct orderings of `cards` drawn by repeated shuffling.
/// Gives up after `2 * target` shuffles, so fewer may be returned.
pub fn sample_permutations<R: Rng + ?Sized>(
    cards: &[Card],
    target: usize,
    rng: &mut R,
) -> Vec<Vec<Card>> {
    if cards.is_empty() {
        return vec![];
    }

    let mut seen = HashSet::new();
    let mut samples = Vec::with_capacity(target);
    let max_shuffles = target * 2;
    let mut shuffles = 0;

    while samples.len() < target && shuffles < max_shuffles {
        shuffles += 1;
        let mut ordering = cards.to_vec();
        ordering.shuffle(rng);
        if seen.insert(ordering_key(&ordering)) {
            samples.push(ordering);
        }
    }

    if samples.len() < target {
        debug!(
            target: "arrangement_search",
            "Sampling stopped after {} shuffles with {} of {} orderings",
            shuffles,
            samples.len(),
            target
        );
    }
    samples
}

pub fn arrangements_for<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> ArrangementSet {
    let strategy = SearchStrategy::for_hand_size(cards.len());
    let arrangements = match strategy {
        SearchStrategy::Exhaustive => all_permutations(cards),
        SearchStrategy::Sampled => sample_permutations(cards, SAMPLE_TARGET, rng),
    };
    trace!(
        target: "arrangement_search",
        "{:?} search over {} cards produced {} arrangements",
        strategy,
        cards.len(),
        arrangements.len()
    );
    ArrangementSet {
        strategy,
        arrangements,
    }
}
