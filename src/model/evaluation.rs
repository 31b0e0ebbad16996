use serde::{Deserialize, Serialize};

use super::Card;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EvaluationResult {
    /// `raw_answer` rounded to two decimals
    pub answer: f64,
    pub raw_answer: f64,
    /// Set when any intermediate total was fractional, even if the final one is whole
    pub float_detected: bool,
    pub arrangement: Vec<Card>,
}

impl EvaluationResult {
    pub fn empty() -> Self {
        Self {
            answer: 0.0,
            raw_answer: 0.0,
            float_detected: false,
            arrangement: vec![],
        }
    }
}
