pub mod analyzer;
pub mod arrangement_search;
pub mod daily;
pub mod evaluator;
pub mod generator;
mod generator_state;
pub mod settings;
pub mod signature;

pub use analyzer::{analyze, generate_answers};
pub use evaluator::{evaluate, evaluate_steps, is_valid_answer};
pub use generator::{
    find_good_puzzle, find_good_puzzle_with_rng, generate_for_difficulty, GeneratedPuzzle,
    GenerationOutcome, GeneratorOptions,
};
pub use generator_state::{build_deck, GeneratorStats};
pub use signature::SignatureError;
