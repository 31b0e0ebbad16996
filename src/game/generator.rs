use log::{info, trace, warn};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::analyzer::generate_answers;
use super::generator_state::{GeneratorState, GeneratorStats};
use crate::model::{Card, CardRanges, Difficulty, PuzzleResult};

/// Highest acceptable permutations-per-answer ratio before relaxation
const INITIAL_QUALITY_THRESHOLD: f64 = 5.0;
const RELAXED_QUALITY_THRESHOLD: f64 = 10.0;

pub const DEFAULT_CARD_COUNT: usize = 6;
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub card_count: usize,
    pub require_zero: bool,
    pub require_good: bool,
    pub max_attempts: usize,
    pub ranges: CardRanges,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            require_zero: false,
            require_good: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            ranges: CardRanges::default(),
        }
    }
}

impl GeneratorOptions {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            card_count: difficulty.card_count(),
            require_zero: difficulty.requires_zero(),
            require_good: difficulty.requires_good(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationOutcome {
    Accepted,
    /// No hand passed within the budget; one extra hand was returned unchecked
    ExhaustedFallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub hand: Vec<Card>,
    pub result: PuzzleResult,
    pub attempts_used: usize,
    pub was_relaxed: bool,
    pub outcome: GenerationOutcome,
    pub stats: GeneratorStats,
}

fn check_candidate(
    state: &mut GeneratorState,
    options: &GeneratorOptions,
    result: &PuzzleResult,
    threshold: f64,
    relaxed: bool,
) -> bool {
    if !result.has_valid_answers {
        state.stats.n_rejected_invalid += 1;
        trace!(target: "generator", "Rejected: no usable Dusk/Dawn spread");
        return false;
    }
    let ratio = result.quality_ratio();
    if ratio > threshold {
        state.stats.n_rejected_quality_ratio += 1;
        trace!(
            target: "generator",
            "Rejected: quality ratio {:.2} above {}",
            ratio,
            threshold
        );
        return false;
    }
    if options.require_zero && !result.has_zero {
        state.stats.n_rejected_no_zero += 1;
        trace!(target: "generator", "Rejected: dusk {} is not zero", result.dusk.result);
        return false;
    }
    if options.require_good && !relaxed && !result.is_good {
        state.stats.n_rejected_not_good += 1;
        trace!(
            target: "generator",
            "Rejected: dawn {} reached {} ways",
            result.dawn.result,
            result.dawn.permutation_count
        );
        return false;
    }
    true
}

/// Draw and analyze hands until one meets `options`, relaxing the quality
/// bar after `max_attempts` and giving up after twice that. Always returns a
/// puzzle; check `outcome` to see whether it passed.
pub fn find_good_puzzle_with_rng(
    options: &GeneratorOptions,
    rng: Box<dyn RngCore>,
) -> GeneratedPuzzle {
    let mut state = GeneratorState::new(&options.ranges, rng);
    let mut threshold = INITIAL_QUALITY_THRESHOLD;
    let mut relaxed = false;
    let max_total_attempts = options.max_attempts * 2;

    for attempt in 1..=max_total_attempts {
        if attempt > options.max_attempts && !relaxed {
            relaxed = true;
            threshold = RELAXED_QUALITY_THRESHOLD;
            info!(
                target: "generator",
                "No puzzle after {} attempts; relaxing quality threshold to {}",
                options.max_attempts,
                threshold
            );
        }

        let hand = state.draw_hand(options.card_count);
        let result = generate_answers(&hand, &mut state.rng);
        if check_candidate(&mut state, options, &result, threshold, relaxed) {
            info!(
                target: "generator",
                "Accepted {:?} on attempt {} (dusk {}, dawn {}, relaxed: {})",
                hand,
                attempt,
                result.dusk.result,
                result.dawn.result,
                relaxed
            );
            return GeneratedPuzzle {
                hand,
                result,
                attempts_used: attempt,
                was_relaxed: relaxed,
                outcome: GenerationOutcome::Accepted,
                stats: state.stats,
            };
        }
    }

    warn!(
        target: "generator",
        "Exhausted {} attempts; returning an unchecked puzzle. Stats: {:?}",
        max_total_attempts,
        state.stats
    );
    let hand = state.draw_hand(options.card_count);
    let result = generate_answers(&hand, &mut state.rng);
    GeneratedPuzzle {
        hand,
        result,
        attempts_used: max_total_attempts + 1,
        was_relaxed: relaxed,
        outcome: GenerationOutcome::ExhaustedFallback,
        stats: state.stats,
    }
}

pub fn find_good_puzzle(options: &GeneratorOptions, seed: Option<u64>) -> GeneratedPuzzle {
    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
    trace!(target: "generator", "Generating with seed {}", seed);
    find_good_puzzle_with_rng(options, Box::new(StdRng::seed_from_u64(seed)))
}

pub fn generate_for_difficulty(difficulty: Difficulty, seed: Option<u64>) -> GeneratedPuzzle {
    find_good_puzzle(&GeneratorOptions::for_difficulty(difficulty), seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::evaluator::evaluate;
    use crate::game::tests::UsingLogger;
    use crate::model::DeckPreset;
    use test_context::test_context;

    #[test_context(UsingLogger)]
    #[test]
    fn test_generate_for_each_difficulty(_: &mut UsingLogger) {
        // GEN_ITERATIONS=100 RUST_LOG=info cargo test game::generator::tests -- --nocapture
        let n_iterations = std::env::var("GEN_ITERATIONS").unwrap_or("3".to_string());
        let n_iterations = n_iterations.parse::<u64>().unwrap();
        for difficulty in Difficulty::all() {
            for seed in 0..n_iterations {
                let puzzle = generate_for_difficulty(difficulty, Some(seed));
                assert_eq!(puzzle.hand.len(), difficulty.card_count());
                assert!(puzzle.attempts_used >= 1);
                if puzzle.outcome == GenerationOutcome::Accepted {
                    let result = &puzzle.result;
                    assert!(result.has_valid_answers);
                    assert!(result.dusk.result <= result.dawn.result);
                    assert_eq!(
                        evaluate(&result.dawn.arrangement).answer,
                        result.dawn.result as f64
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_required_for_easier_difficulties() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            for seed in 0..5 {
                let puzzle = generate_for_difficulty(difficulty, Some(seed));
                let max_attempts = GeneratorOptions::for_difficulty(difficulty).max_attempts;
                if puzzle.outcome == GenerationOutcome::Accepted {
                    assert!(puzzle.result.has_zero);
                }
                if !puzzle.result.has_zero {
                    assert!(puzzle.was_relaxed);
                    assert!(puzzle.attempts_used > max_attempts);
                }
            }
        }
    }

    #[test]
    fn test_relaxation_only_after_max_attempts() {
        for seed in 0..10 {
            let puzzle = generate_for_difficulty(Difficulty::Easy, Some(seed));
            assert_eq!(puzzle.was_relaxed, puzzle.attempts_used > DEFAULT_MAX_ATTEMPTS);
            if !puzzle.was_relaxed {
                assert!(puzzle.result.is_good);
            }
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let a = generate_for_difficulty(Difficulty::Medium, Some(99));
        let b = generate_for_difficulty(Difficulty::Medium, Some(99));
        assert_eq!(a.hand, b.hand);
        assert_eq!(a.result, b.result);
        assert_eq!(a.attempts_used, b.attempts_used);
    }

    #[test]
    fn test_impossible_requirements_fall_back() {
        // every card is +1, so every ordering gives the same answer
        let options = GeneratorOptions {
            card_count: 4,
            max_attempts: 3,
            ranges: CardRanges {
                add: 1..=1,
                subtract: 1..=0,
                multiply: 2..=1,
                divide: 2..=1,
            },
            ..Default::default()
        };
        let puzzle = find_good_puzzle(&options, Some(5));
        assert_eq!(puzzle.outcome, GenerationOutcome::ExhaustedFallback);
        assert_eq!(puzzle.attempts_used, 7);
        assert!(puzzle.was_relaxed);
        assert_eq!(puzzle.hand, vec![Card::parse("+1")]);
        assert!(!puzzle.result.has_valid_answers);
        assert_eq!(puzzle.stats.n_rejected_invalid, 6);
    }

    #[test]
    fn test_zero_budget_returns_fallback_immediately() {
        let options = GeneratorOptions {
            max_attempts: 0,
            ..Default::default()
        };
        let puzzle = find_good_puzzle(&options, Some(1));
        assert_eq!(puzzle.outcome, GenerationOutcome::ExhaustedFallback);
        assert_eq!(puzzle.attempts_used, 1);
        assert!(!puzzle.was_relaxed);
        assert_eq!(puzzle.hand.len(), DEFAULT_CARD_COUNT);
    }

    #[test]
    fn test_extended_ranges() {
        let options = GeneratorOptions {
            ranges: DeckPreset::Extended.ranges(),
            ..GeneratorOptions::for_difficulty(Difficulty::Hard)
        };
        for seed in 0..3 {
            let puzzle = find_good_puzzle(&options, Some(seed));
            assert_eq!(puzzle.hand.len(), 8);
            assert!(puzzle
                .hand
                .iter()
                .all(|card| card.value >= 1 && card.value <= 18));
        }
    }

    #[test]
    fn test_generator_never_fails() {
        for seed in 0..25 {
            let options = GeneratorOptions {
                card_count: 4,
                require_zero: seed % 2 == 0,
                require_good: true,
                max_attempts: 5,
                ..Default::default()
            };
            let puzzle = find_good_puzzle(&options, Some(seed));
            assert_eq!(puzzle.hand.len(), 4);
            assert!(puzzle.attempts_used <= 11);
        }
    }

    fn state() -> GeneratorState {
        GeneratorState::seeded(&CardRanges::default(), 0)
    }

    fn candidate(total_permutations: usize, unique_answers: usize) -> PuzzleResult {
        PuzzleResult {
            has_valid_answers: true,
            is_good: true,
            has_zero: true,
            total_permutations,
            unique_answers,
            ..Default::default()
        }
    }

    #[test]
    fn test_quality_threshold_loosens_when_relaxed() {
        let options = GeneratorOptions::default();
        let mut state = state();
        // 7 arrangements per answer
        let result = candidate(168, 24);
        assert_eq!(result.quality_ratio(), 7.0);

        assert!(!check_candidate(
            &mut state,
            &options,
            &result,
            INITIAL_QUALITY_THRESHOLD,
            false
        ));
        assert_eq!(state.stats.n_rejected_quality_ratio, 1);
        assert!(check_candidate(
            &mut state,
            &options,
            &result,
            RELAXED_QUALITY_THRESHOLD,
            true
        ));

        let result = candidate(264, 24);
        assert!(!check_candidate(
            &mut state,
            &options,
            &result,
            RELAXED_QUALITY_THRESHOLD,
            true
        ));
        assert_eq!(state.stats.n_rejected_quality_ratio, 2);
    }

    #[test]
    fn test_unique_dawn_dropped_when_relaxed() {
        let options = GeneratorOptions {
            require_good: true,
            ..Default::default()
        };
        let mut state = state();
        let result = PuzzleResult {
            is_good: false,
            ..candidate(24, 8)
        };

        assert!(!check_candidate(
            &mut state,
            &options,
            &result,
            INITIAL_QUALITY_THRESHOLD,
            false
        ));
        assert_eq!(state.stats.n_rejected_not_good, 1);
        assert!(check_candidate(
            &mut state,
            &options,
            &result,
            RELAXED_QUALITY_THRESHOLD,
            true
        ));
        assert_eq!(state.stats.n_rejected_not_good, 1);
    }

    #[test]
    fn test_zero_requirement_survives_relaxation() {
        let options = GeneratorOptions {
            require_zero: true,
            require_good: true,
            ..Default::default()
        };
        let mut state = state();
        let result = PuzzleResult {
            has_zero: false,
            ..candidate(24, 8)
        };

        assert!(!check_candidate(
            &mut state,
            &options,
            &result,
            INITIAL_QUALITY_THRESHOLD,
            false
        ));
        assert!(!check_candidate(
            &mut state,
            &options,
            &result,
            RELAXED_QUALITY_THRESHOLD,
            true
        ));
        assert_eq!(state.stats.n_rejected_no_zero, 2);
    }

    #[test]
    fn test_invalid_result_rejected_even_when_relaxed() {
        let options = GeneratorOptions::default();
        let mut state = state();
        assert!(!check_candidate(
            &mut state,
            &options,
            &PuzzleResult::invalid(),
            RELAXED_QUALITY_THRESHOLD,
            true
        ));
        assert_eq!(state.stats.n_rejected_invalid, 1);
    }

    #[test]
    fn test_medium_accepts_looser_puzzles_after_relaxing() {
        let options = GeneratorOptions::for_difficulty(Difficulty::Medium);
        let mut relaxed_in_band = 0;
        for seed in 0..12 {
            let puzzle = find_good_puzzle(&options, Some(seed));
            if puzzle.outcome != GenerationOutcome::Accepted {
                continue;
            }
            let ratio = puzzle.result.quality_ratio();
            assert!(puzzle.result.has_zero);
            if puzzle.was_relaxed {
                assert!(puzzle.attempts_used > options.max_attempts);
                assert!(ratio <= RELAXED_QUALITY_THRESHOLD);
                if ratio > INITIAL_QUALITY_THRESHOLD {
                    relaxed_in_band += 1;
                }
            } else {
                assert!(ratio <= INITIAL_QUALITY_THRESHOLD);
                assert!(puzzle.result.is_good);
            }
        }
        assert!(relaxed_in_band > 0);
    }
}
