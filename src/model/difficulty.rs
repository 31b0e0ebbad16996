use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Challenger,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Challenger,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Challenger => 3,
        }
    }

    pub fn from_index(index: usize) -> Difficulty {
        match index {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            3 => Difficulty::Challenger,
            _ => Difficulty::Medium,
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 6,
            Difficulty::Hard => 8,
            Difficulty::Challenger => 10,
        }
    }

    /// Easier hands must let the player reach a Dusk of exactly zero
    pub fn requires_zero(&self) -> bool {
        match self {
            Difficulty::Easy | Difficulty::Medium => true,
            Difficulty::Hard | Difficulty::Challenger => false,
        }
    }

    pub fn requires_good(&self) -> bool {
        true
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Challenger => "Challenger",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for difficulty in Difficulty::all() {
            assert_eq!(Difficulty::from_index(difficulty.index()), difficulty);
        }
    }

    #[test]
    fn test_card_counts() {
        let counts: Vec<usize> = Difficulty::all().iter().map(|d| d.card_count()).collect();
        assert_eq!(counts, vec![4, 6, 8, 10]);
        assert!(Difficulty::Easy.requires_zero());
        assert!(Difficulty::Medium.requires_zero());
        assert!(!Difficulty::Hard.requires_zero());
        assert!(!Difficulty::Challenger.requires_zero());
    }
}
