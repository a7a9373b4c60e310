use std::fmt;
use std::str::FromStr;

/// Rank symbols from weakest to strongest.
pub const SYMBOL_ORDER: &str = "23456789TJQKA";

/// Card ranks from Two (weakest) to Ace (strongest).
///
/// The discriminant is the rank's strength: its position in
/// [`SYMBOL_ORDER`] plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
    Ace = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Strength used by the tie-break: `2` = 1 up to `A` = 13.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Strength of a raw hand symbol.
///
/// Symbols outside [`SYMBOL_ORDER`] have strength 0, so they sort below every
/// legal rank instead of failing.
///
/// ```
/// use poker_showdown::cards::strength_of;
///
/// assert_eq!(strength_of('2'), 1);
/// assert_eq!(strength_of('A'), 13);
/// assert_eq!(strength_of('x'), 0);
/// ```
pub fn strength_of(symbol: char) -> u8 {
    Rank::try_from(symbol).map(Rank::strength).unwrap_or(0)
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string()))
            }
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    // Case-sensitive: only the canonical spelling maps to a rank.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert!(Rank::from_str("10").is_err());
        assert_eq!(Rank::from_str(" K ").unwrap(), Rank::King);
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("AK").is_err());
        assert!(Rank::from_str("").is_err());
    }

    #[test]
    fn strengths_follow_symbol_order() {
        for (idx, ch) in SYMBOL_ORDER.chars().enumerate() {
            let rank = Rank::try_from(ch).unwrap();
            assert_eq!(rank.strength() as usize, idx + 1);
            assert_eq!(rank.to_char(), ch);
            assert_eq!(Rank::ALL[idx], rank);
        }
    }

    #[test]
    fn ordering_is_total_and_strict() {
        for w in Rank::ALL.windows(2) {
            assert!(w[0] < w[1]);
            assert!(w[0].strength() < w[1].strength());
        }
    }

    #[test]
    fn unknown_symbols_are_weakest() {
        assert_eq!(strength_of('a'), 0);
        assert_eq!(strength_of('1'), 0);
        assert_eq!(strength_of('T'), 9);
        assert!(Rank::try_from('t').is_err());
    }
}
