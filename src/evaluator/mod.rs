pub mod frequency;
mod tiebreak;

pub use frequency::FrequencyProfile;
pub use tiebreak::break_tie;

use crate::hand::{Hand, HAND_SIZE};
use core::cmp::Ordering;
use std::fmt;
use tracing::{event, Level};

/// Literal returned by [`showdown`] when neither hand wins.
pub const TIE: &str = "tie";

/// Hand category from weakest to strongest.
///
/// A single pair is classified as [`Category::TwoPair`]; there is no
/// separate one-pair category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    TwoPair = 1,
    Triple = 2,
    FullHouse = 3,
    FourOfAKind = 4,
}

impl Category {
    /// All categories, strongest first.
    pub const ALL: [Category; 5] = [
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Triple,
        Category::TwoPair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::FourOfAKind => "four_of_a_kind",
            Category::FullHouse => "full_house",
            Category::Triple => "triple",
            Category::TwoPair => "two_pair",
            Category::HighCard => "high_card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of comparing two things in argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    FirstWins,
    SecondWins,
    Equal,
}

impl Verdict {
    /// The verdict with the arguments swapped.
    pub const fn flip(self) -> Self {
        match self {
            Verdict::FirstWins => Verdict::SecondWins,
            Verdict::SecondWins => Verdict::FirstWins,
            Verdict::Equal => Verdict::Equal,
        }
    }

    /// Pick the winning value, or `None` on a tie.
    pub fn pick<T>(self, first: T, second: T) -> Option<T> {
        match self {
            Verdict::FirstWins => Some(first),
            Verdict::SecondWins => Some(second),
            Verdict::Equal => None,
        }
    }
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::FirstWins,
            Ordering::Less => Verdict::SecondWins,
            Ordering::Equal => Verdict::Equal,
        }
    }
}

/// Which argument of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSlot {
    First,
    Second,
}

impl fmt::Display for HandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandSlot::First => f.write_str("hand1"),
            HandSlot::Second => f.write_str("hand2"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClassifyError {
    #[error("insufficient data: frequency profile has {distinct} entries, need at least 2")]
    InsufficientData { distinct: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("failed to classify {slot}: {source}")]
    Classification {
        slot: HandSlot,
        #[source]
        source: ClassifyError,
    },
    #[error("invalid hand length: {slot} has {len} symbols, expected {}", HAND_SIZE)]
    InvalidHandLength { slot: HandSlot, len: usize },
}

/// Coarse error classes for callers that dispatch on failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    Classification,
    InvalidHandLength,
}

impl EvalError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Classification { .. } => ErrorKind::Classification,
            EvalError::InvalidHandLength { .. } => ErrorKind::InvalidHandLength,
        }
    }

    /// The hand the error refers to.
    pub const fn slot(&self) -> HandSlot {
        match self {
            EvalError::Classification { slot, .. } | EvalError::InvalidHandLength { slot, .. } => {
                *slot
            }
        }
    }
}

/// A classified hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub profile: FrequencyProfile,
}

/// Map a frequency profile to its category.
///
/// Only the two largest counts matter. Profiles with fewer than two entries
/// (a hand made of one repeated symbol) cannot be classified.
pub fn classify(profile: &FrequencyProfile) -> Result<Category, ClassifyError> {
    let (c0, c1) =
        profile.top_two().ok_or(ClassifyError::InsufficientData { distinct: profile.len() })?;

    let category = match (c0, c1) {
        (4, _) => Category::FourOfAKind,
        (3, 2) => Category::FullHouse,
        (3, 1) => Category::Triple,
        (2, 2) => Category::TwoPair,
        (2, 1) => Category::TwoPair,
        _ => Category::HighCard,
    };
    Ok(category)
}

/// Profile and classify a hand.
pub fn evaluate(hand: &Hand) -> Result<Evaluation, ClassifyError> {
    let profile = FrequencyProfile::from_hand(hand);
    let category = classify(&profile)?;
    event!(Level::TRACE, %hand, counts = ?profile.counts(), %category, "classified hand");
    Ok(Evaluation { category, profile })
}

/// Classify a raw hand string.
///
/// ```
/// use poker_showdown::evaluator::{classify_hand, Category};
///
/// assert_eq!(classify_hand("AAA23").unwrap(), Category::Triple);
/// assert_eq!(classify_hand("AA234").unwrap(), Category::TwoPair);
/// assert!(classify_hand("AAAAA").is_err());
/// ```
pub fn classify_hand(hand: &str) -> Result<Category, ClassifyError> {
    evaluate(&Hand::new(hand)).map(|e| e.category)
}

/// Compare two categories by strength.
pub fn compare_categories(a: Category, b: Category) -> Verdict {
    Verdict::from(a.cmp(&b))
}

/// Decide which of two hands is stronger.
///
/// Categories are compared first; hands of the same category go to
/// [`break_tie`].
///
/// ```
/// use poker_showdown::evaluator::{compare, Verdict};
/// use poker_showdown::hand::Hand;
///
/// let v = compare(&Hand::new("AAAKK"), &Hand::new("AAKK2")).unwrap();
/// assert_eq!(v, Verdict::FirstWins);
/// ```
pub fn compare(hand1: &Hand, hand2: &Hand) -> Result<Verdict, EvalError> {
    let e1 = evaluate(hand1)
        .map_err(|source| EvalError::Classification { slot: HandSlot::First, source })?;
    let e2 = evaluate(hand2)
        .map_err(|source| EvalError::Classification { slot: HandSlot::Second, source })?;

    let verdict = match compare_categories(e1.category, e2.category) {
        Verdict::Equal => break_tie(hand1, hand2)?,
        decided => decided,
    };
    event!(
        Level::DEBUG,
        %hand1,
        %hand2,
        first = %e1.category,
        second = %e2.category,
        ?verdict,
        "compared hands"
    );
    Ok(verdict)
}

/// String boundary: return the winning hand verbatim, or `"tie"`.
///
/// ```
/// use poker_showdown::evaluator::showdown;
///
/// assert_eq!(showdown("23456", "23457").unwrap(), "23457");
/// ```
pub fn showdown(hand1: &str, hand2: &str) -> Result<String, EvalError> {
    let verdict = compare(&Hand::new(hand1), &Hand::new(hand2))?;
    Ok(verdict.pick(hand1, hand2).unwrap_or(TIE).to_string())
}
