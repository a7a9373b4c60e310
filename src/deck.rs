use crate::cards::Rank;
use crate::hand::{Hand, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A 52-card deck reduced to ranks: four copies of each rank symbol.
///
/// Source of random well-formed hands for property tests and benches.
#[derive(Debug, Clone)]
pub struct RankDeck {
    ranks: Vec<Rank>,
}

impl RankDeck {
    /// ```
    /// use poker_showdown::deck::RankDeck;
    ///
    /// let deck = RankDeck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut ranks = Vec::with_capacity(52);
        for _ in 0..4 {
            ranks.extend_from_slice(&Rank::ALL);
        }
        Self { ranks }
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.ranks.shuffle(&mut rng);
    }

    pub fn draw(&mut self) -> Option<Rank> {
        self.ranks.pop()
    }

    /// Draw a five-symbol hand, or `None` when fewer than five cards remain.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.ranks.len() < HAND_SIZE {
            return None;
        }
        let at = self.ranks.len() - HAND_SIZE;
        let drawn = self.ranks.split_off(at);
        Some(Hand::from_ranks(&drawn))
    }
}
