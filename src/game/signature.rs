//! Canonical, order-independent keys for hands of cards.
//!
//! A signature lists every card as `<operator><value>` in canonical order
//! (operator rank, then numeric value) joined by commas: `+3,+10,-5,/4`.
//! The URL form swaps each operator and the separator for a letter so the
//! signature can sit in a path segment: `p3sp10sm5sd4`.

use itertools::Itertools;
use thiserror::Error;

use crate::model::{Card, Operator};

const SEPARATOR: char = ',';

const URL_SUBSTITUTIONS: [(char, char); 5] = [
    ('+', 'p'),
    ('-', 'm'),
    ('*', 't'),
    ('/', 'd'),
    (SEPARATOR, 's'),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("signature is empty")]
    Empty,

    #[error("unrecognized operator in token '{token}'")]
    InvalidOperator { token: String },

    #[error("invalid value in token '{token}'")]
    InvalidValue { token: String },

    #[error("character '{character}' cannot appear in a share token")]
    InvalidTokenCharacter { character: char },

    #[error("signature '{signature}' is not in canonical form")]
    NotCanonical { signature: String },
}

pub fn canonical_order(cards: &[Card]) -> Vec<Card> {
    cards.iter().copied().sorted().collect()
}

pub fn to_canonical_signature(cards: &[Card]) -> String {
    cards.iter().sorted().map(Card::token).join(",")
}

/// Key for one exact ordering; unlike the canonical signature, two orderings
/// of the same cards produce different keys.
pub fn ordering_key(cards: &[Card]) -> String {
    cards.iter().map(Card::token).join(",")
}

fn parse_token(token: &str) -> Result<Card, SignatureError> {
    let mut chars = token.chars();
    let operator = chars
        .next()
        .and_then(Operator::from_symbol)
        .ok_or_else(|| SignatureError::InvalidOperator {
            token: token.to_string(),
        })?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(SignatureError::InvalidValue {
            token: token.to_string(),
        });
    }
    let value = digits
        .parse::<u32>()
        .map_err(|_| SignatureError::InvalidValue {
            token: token.to_string(),
        })?;

    Ok(Card::new(operator, value))
}

/// Parse a signature back into cards, in the order written.
pub fn from_signature(signature: &str) -> Result<Vec<Card>, SignatureError> {
    if signature.is_empty() {
        return Err(SignatureError::Empty);
    }
    signature.split(SEPARATOR).map(parse_token).collect()
}

/// A signature is valid when it parses and is already in canonical form.
pub fn is_valid_signature(signature: &str) -> bool {
    match from_signature(signature) {
        Ok(cards) => !cards.is_empty() && to_canonical_signature(&cards) == signature,
        Err(_) => false,
    }
}

pub fn same_puzzle(a: &[Card], b: &[Card]) -> bool {
    to_canonical_signature(a) == to_canonical_signature(b)
}

fn substitute(signature: &str, forward: bool) -> String {
    signature
        .chars()
        .map(|c| {
            URL_SUBSTITUTIONS
                .iter()
                .find(|(plain, url)| if forward { *plain == c } else { *url == c })
                .map(|(plain, url)| if forward { *url } else { *plain })
                .unwrap_or(c)
        })
        .collect()
}

pub fn encode_signature_for_url(signature: &str) -> String {
    substitute(signature, true)
}

pub fn decode_signature_from_url(encoded: &str) -> String {
    substitute(encoded, false)
}

/// Share token for a hand: its canonical signature in URL form.
pub fn hand_to_url_token(cards: &[Card]) -> String {
    encode_signature_for_url(&to_canonical_signature(cards))
}

fn is_url_token_char(c: char) -> bool {
    c.is_ascii_digit() || URL_SUBSTITUTIONS.iter().any(|(_, url)| *url == c)
}

/// Recover a hand from a share token. Tokens must be in URL form and decode
/// to a canonical signature, so tampered links never yield a hand.
pub fn hand_from_url_token(token: &str) -> Result<Vec<Card>, SignatureError> {
    if let Some(character) = token.chars().find(|c| !is_url_token_char(*c)) {
        return Err(SignatureError::InvalidTokenCharacter { character });
    }
    let signature = decode_signature_from_url(token);
    let cards = from_signature(&signature)?;
    if to_canonical_signature(&cards) != signature {
        return Err(SignatureError::NotCanonical { signature });
    }
    Ok(cards)
}
