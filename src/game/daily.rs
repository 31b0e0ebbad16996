use chrono::{Datelike, NaiveDate};

use super::generator::{generate_for_difficulty, GeneratedPuzzle};
use crate::model::Difficulty;

/// Seed shared by every player for a given day and difficulty.
pub fn daily_seed(date: NaiveDate, difficulty: Difficulty) -> u64 {
    let day = date.num_days_from_ce() as u64;
    // splitmix64 finalizer spreads consecutive days across the seed space
    let mut z = day
        .wrapping_mul(4)
        .wrapping_add(difficulty.index() as u64)
        .wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn daily_puzzle(date: NaiveDate, difficulty: Difficulty) -> GeneratedPuzzle {
    generate_for_difficulty(difficulty, Some(daily_seed(date, difficulty)))
}

pub fn todays_puzzle(difficulty: Difficulty) -> GeneratedPuzzle {
    daily_puzzle(chrono::Local::now().date_naive(), difficulty)
}
