use log::trace;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::model::{Card, CardRanges, Operator};

/// Rejection counters for one generator run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorStats {
    pub n_rejected_invalid: usize,
    pub n_rejected_quality_ratio: usize,
    pub n_rejected_no_zero: usize,
    pub n_rejected_not_good: usize,
}

pub struct GeneratorState {
    pub deck: Vec<Card>,
    pub rng: Box<dyn RngCore>,
    pub stats: GeneratorStats,
}

/// Every operator paired with every value in that operator's range.
/// Division by zero is impossible because zero-valued divide cards are skipped.
pub fn build_deck(ranges: &CardRanges) -> Vec<Card> {
    let mut deck = Vec::new();
    for operator in Operator::all() {
        for value in ranges.for_operator(operator) {
            if operator == Operator::Divide && value == 0 {
                trace!(target: "generator", "Skipping /0 card");
                continue;
            }
            deck.push(Card::new(operator, value));
        }
    }
    deck
}

impl GeneratorState {
    pub(crate) fn new(ranges: &CardRanges, rng: Box<dyn RngCore>) -> Self {
        Self {
            deck: build_deck(ranges),
            rng,
            stats: GeneratorStats::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn seeded(ranges: &CardRanges, seed: u64) -> Self {
        use rand::{rngs::StdRng, SeedableRng};
        Self::new(ranges, Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Draw `count` cards without replacement. A deck smaller than `count`
    /// yields a shorter hand.
    pub fn draw_hand(&mut self, count: usize) -> Vec<Card> {
        let mut remaining = self.deck.clone();
        let mut hand = Vec::with_capacity(count);
        while hand.len() < count && !remaining.is_empty() {
            let index = self.rng.random_range(0..remaining.len());
            hand.push(remaining.swap_remove(index));
        }
        trace!(target: "generator", "Drew hand {:?}", hand);
        hand
    }
}
