mod card;
mod card_ranges;
mod difficulty;
mod evaluation;
mod puzzle_result;

pub use card::{describe_arrangement, Card, Operator};
pub use card_ranges::{CardRanges, DeckPreset};
pub use difficulty::Difficulty;
pub use evaluation::EvaluationResult;
pub use puzzle_result::{PuzzleResult, Target};
