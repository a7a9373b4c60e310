use crate::cards::{strength_of, Rank};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Number of symbols in a complete hand.
pub const HAND_SIZE: usize = 5;

/// A hand of rank symbols, e.g. `"AAKK2"`.
///
/// Construction never fails: length and alphabet are only checked where an
/// operation needs them (see [`crate::evaluator::break_tie`]).
///
/// ```
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "KKKKQ".parse().unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(hand.strengths(), vec![12, 12, 12, 12, 11]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand(String);

impl Hand {
    pub fn new(symbols: impl Into<String>) -> Self {
        Self(symbols.into())
    }

    /// Build a hand from ranks.
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        Self(ranks.iter().map(|r| r.to_char()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols (characters, not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Per-symbol strengths in hand order.
    pub fn strengths(&self) -> Vec<u8> {
        self.symbols().map(strength_of).collect()
    }

    /// True when the hand has [`HAND_SIZE`] symbols, all from the rank alphabet.
    pub fn is_well_formed(&self) -> bool {
        self.len() == HAND_SIZE && self.symbols().all(|c| Rank::try_from(c).is_ok())
    }
}

impl FromStr for Hand {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Hand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
