use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn all() -> [Operator; 4] {
        [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ]
    }

    /// Position used for canonical ordering: `+` < `-` < `*` < `/`
    pub fn rank(&self) -> usize {
        match self {
            Operator::Add => 0,
            Operator::Subtract => 1,
            Operator::Multiply => 2,
            Operator::Divide => 3,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn apply(&self, total: f64, value: f64) -> f64 {
        match self {
            Operator::Add => total + value,
            Operator::Subtract => total - value,
            Operator::Multiply => total * value,
            Operator::Divide => total / value,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operator/number pair. Cards carry no identity beyond their fields, so two
/// equal cards are interchangeable even when a hand holds both.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Card {
    pub operator: Operator,
    pub value: u32,
}

impl Card {
    pub fn new(operator: Operator, value: u32) -> Self {
        Self { operator, value }
    }

    /// Key used for hashing and signatures, e.g. `+9` or `/12`.
    pub fn token(&self) -> String {
        format!("{}{}", self.operator.symbol(), self.value)
    }

    #[cfg(test)]
    /// Parse a card from a token of the form "+3" or "/12"
    pub fn parse(s: &str) -> Self {
        let operator = Operator::from_symbol(s.chars().next().unwrap()).unwrap();
        let value = s[1..].parse::<u32>().unwrap();
        Self { operator, value }
    }

    #[cfg(test)]
    pub fn parse_hand(s: &str) -> Vec<Card> {
        s.split_whitespace().map(Card::parse).collect()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.operator
            .rank()
            .cmp(&other.operator.rank())
            .then(self.value.cmp(&other.value))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Render an arrangement the way a player reads it: `9 + 1 / 2 - 5`.
/// The first card's operator is dropped because evaluation ignores it.
pub fn describe_arrangement(cards: &[Card]) -> String {
    let mut output = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i == 0 {
            output.push_str(&card.value.to_string());
        } else {
            output.push_str(&format!(" {} {}", card.operator, card.value));
        }
    }
    output
}
