use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::Operator;

/// Value range for each operator's cards when a deck is synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardRanges {
    pub add: RangeInclusive<u32>,
    pub subtract: RangeInclusive<u32>,
    pub multiply: RangeInclusive<u32>,
    pub divide: RangeInclusive<u32>,
}

impl Default for CardRanges {
    fn default() -> Self {
        DeckPreset::Standard.ranges()
    }
}

impl CardRanges {
    pub fn for_operator(&self, operator: Operator) -> RangeInclusive<u32> {
        match operator {
            Operator::Add => self.add.clone(),
            Operator::Subtract => self.subtract.clone(),
            Operator::Multiply => self.multiply.clone(),
            Operator::Divide => self.divide.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum DeckPreset {
    #[default]
    Standard,
    Extended,
}

impl DeckPreset {
    pub fn ranges(&self) -> CardRanges {
        match self {
            DeckPreset::Standard => CardRanges {
                add: 1..=9,
                subtract: 1..=9,
                multiply: 2..=9,
                divide: 2..=9,
            },
            DeckPreset::Extended => CardRanges {
                add: 1..=18,
                subtract: 1..=18,
                multiply: 2..=12,
                divide: 2..=12,
            },
        }
    }
}
