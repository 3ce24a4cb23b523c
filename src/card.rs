//! Card types: suits, ranks, and the Joker.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the display symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    /// Accepts the suit symbol or its initial letter in either case.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '♥' | 'h' | 'H' => Ok(Self::Hearts),
            '♦' | 'd' | 'D' => Ok(Self::Diamonds),
            '♣' | 'c' | 'C' => Ok(Self::Clubs),
            '♠' | 's' | 'S' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered from Two up to Ace.
///
/// The discriminant is the comparison value used by the Higher or Lower game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace (high).
    Ace = 14,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the comparison value (2 through 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the short label printed on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Self::ALL[value as usize - 2]),
            _ => Err(CardError::InvalidRank),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CardError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
            .ok_or(CardError::InvalidRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison value of a Joker. Strictly above [`Rank::Ace`].
pub const JOKER_VALUE: u8 = 15;

/// A playing card or a Joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// A regular card from one of the four suits.
    Standard {
        /// The rank of the card.
        rank: Rank,
        /// The suit of the card.
        suit: Suit,
    },
    /// A Joker. Ranks above every standard card and ties with the other Joker.
    Joker,
}

impl Card {
    /// Creates a standard card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::Standard { rank, suit }
    }

    /// Returns the comparison value: 2 through 14 for standard cards,
    /// [`JOKER_VALUE`] for Jokers.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Standard { rank, .. } => rank.value(),
            Self::Joker => JOKER_VALUE,
        }
    }

    /// Compares two cards by value only. Suits never break ties.
    #[must_use]
    pub fn compare_value(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }

    /// Returns whether the card is a Joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns the suit, or `None` for a Joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Self::Standard { suit, .. } => Some(*suit),
            Self::Joker => None,
        }
    }

    /// Returns the rank, or `None` for a Joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Self::Standard { rank, .. } => Some(*rank),
            Self::Joker => None,
        }
    }

    /// Returns whether the card is printed in red. Jokers are not.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        match self {
            Self::Standard { suit, .. } => suit.is_red(),
            Self::Joker => false,
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `"7♠"`, `"10h"`, `"KD"` or `"joker"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("joker") {
            return Ok(Self::Joker);
        }

        let mut chars = s.chars();
        let suit = chars.next_back().ok_or(CardError::Empty)?;
        let suit = Suit::try_from(suit)?;
        let rank = chars.as_str().parse::<Rank>()?;

        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Self::Joker => f.write_str("Joker"),
        }
    }
}

/// Number of standard cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of Jokers added when Jokers are enabled.
pub const JOKER_COUNT: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_order_by_value() {
        let king = Card::new(Rank::King, Suit::Spades);
        let queen = Card::new(Rank::Queen, Suit::Hearts);
        let ace = Card::new(Rank::Ace, Suit::Clubs);

        assert!(king.value() > queen.value());
        assert_eq!(ace.value(), 14);
        assert_eq!(Card::Joker.value(), 15);
        assert_eq!(ace.compare_value(&Card::Joker), Ordering::Less);
        assert_eq!(Card::Joker.compare_value(&Card::Joker), Ordering::Equal);
    }

    #[test]
    fn suit_never_affects_comparison() {
        let a = Card::new(Rank::Seven, Suit::Hearts);
        let b = Card::new(Rank::Seven, Suit::Spades);
        assert_ne!(a, b);
        assert_eq!(a.compare_value(&b), Ordering::Equal);
    }

    #[test]
    fn rank_from_number_rejects_out_of_range() {
        assert_eq!(Rank::try_from(2), Ok(Rank::Two));
        assert_eq!(Rank::try_from(11), Ok(Rank::Jack));
        assert_eq!(Rank::try_from(14), Ok(Rank::Ace));
        assert_eq!(Rank::try_from(1), Err(CardError::InvalidRank));
        assert_eq!(Rank::try_from(15), Err(CardError::InvalidRank));
    }

    #[test]
    fn parse_cards() {
        assert_eq!("7♠".parse(), Ok(Card::new(Rank::Seven, Suit::Spades)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("kd".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("Joker".parse(), Ok(Card::Joker));
        assert_eq!("".parse::<Card>(), Err(CardError::Empty));
        assert_eq!("1s".parse::<Card>(), Err(CardError::InvalidRank));
        assert_eq!("Kx".parse::<Card>(), Err(CardError::InvalidSuit));
        assert_eq!("♠".parse::<Card>(), Err(CardError::Empty));
    }

    #[test]
    fn display_and_colour() {
        let ten = Card::new(Rank::Ten, Suit::Diamonds);
        assert_eq!(alloc::format!("{ten}"), "10♦");
        assert!(ten.is_red());
        assert!(!Card::new(Rank::Ace, Suit::Clubs).is_red());
        assert!(!Card::Joker.is_red());
        assert_eq!(alloc::format!("{}", Card::Joker), "Joker");
    }
}
