use log::trace;

use crate::model::{Card, EvaluationResult};

/// Nudge applied before rounding to absorb binary division error.
const ROUNDING_EPSILON: f64 = f64::EPSILON;

fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn round_to_hundredths(value: f64) -> f64 {
    ((value + ROUNDING_EPSILON) * 100.0).round() / 100.0
}

/// Running totals after each card, left to right. The first card contributes
/// only its value; its operator is ignored.
pub fn evaluate_steps(arrangement: &[Card]) -> Vec<f64> {
    let mut steps = Vec::with_capacity(arrangement.len());
    let Some(first) = arrangement.first() else {
        return steps;
    };

    let mut total = first.value as f64;
    steps.push(total);
    for card in &arrangement[1..] {
        total = card.operator.apply(total, card.value as f64);
        steps.push(total);
    }
    steps
}

/// Evaluate one fixed ordering of cards with strict left-to-right semantics.
pub fn evaluate(arrangement: &[Card]) -> EvaluationResult {
    if arrangement.is_empty() {
        return EvaluationResult::empty();
    }

    let steps = evaluate_steps(arrangement);
    let float_detected = steps.iter().any(|step| !is_integer(*step));
    let raw_answer = steps.last().copied().unwrap_or(0.0);
    let answer = round_to_hundredths(raw_answer);

    trace!(
        target: "evaluator",
        "{:?} -> {:?} (float: {})",
        arrangement,
        steps,
        float_detected
    );

    EvaluationResult {
        answer,
        raw_answer,
        float_detected,
        arrangement: arrangement.to_vec(),
    }
}

/// A Dusk/Dawn candidate must be a whole number no smaller than zero
pub fn is_valid_answer(answer: f64) -> bool {
    answer >= 0.0 && is_integer(answer)
}
