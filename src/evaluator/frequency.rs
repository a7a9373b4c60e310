use crate::hand::Hand;
use std::collections::HashMap;

/// Occurrence counts of each distinct symbol in a hand, sorted descending.
///
/// Example: AAKKQ profiles as [2, 2, 1]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyProfile {
    counts: Vec<usize>,
}

impl FrequencyProfile {
    /// Count every symbol of the hand. Symbols outside the rank alphabet are
    /// counted like any other.
    pub fn from_hand(hand: &Hand) -> Self {
        let mut by_symbol: HashMap<char, usize> = HashMap::new();
        for symbol in hand.symbols() {
            *by_symbol.entry(symbol).or_insert(0) += 1;
        }

        let mut counts: Vec<usize> = by_symbol.into_values().collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));

        Self { counts }
    }

    /// Counts, largest first.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the hand's symbol count.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The two largest counts, or `None` when fewer than two distinct symbols exist.
    pub fn top_two(&self) -> Option<(usize, usize)> {
        match self.counts.as_slice() {
            [c0, c1, ..] => Some((*c0, *c1)),
            _ => None,
        }
    }
}
