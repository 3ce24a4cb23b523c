//! Guess directions, comparisons, and display snapshots.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::DirectionError;

/// The player's prediction for the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The next card ranks above the current one.
    Higher,
    /// The next card ranks below the current one.
    Lower,
}

impl Direction {
    /// Returns whether this prediction is borne out by `comparison`.
    ///
    /// [`Comparison::Same`] never matches.
    #[must_use]
    pub const fn matches(self, comparison: Comparison) -> bool {
        matches!(
            (self, comparison),
            (Self::Higher, Comparison::Higher) | (Self::Lower, Comparison::Lower)
        )
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    /// Accepts `h`, `higher`, `l` or `lower` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("higher") {
            Ok(Self::Higher)
        } else if s.eq_ignore_ascii_case("l") || s.eq_ignore_ascii_case("lower") {
            Ok(Self::Lower)
        } else {
            Err(DirectionError::Invalid)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Higher => f.write_str("higher"),
            Self::Lower => f.write_str("lower"),
        }
    }
}

/// How the revealed card compared to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The revealed card has a greater value.
    Higher,
    /// The revealed card has a smaller value.
    Lower,
    /// Both cards have the same value.
    Same,
}

impl Comparison {
    /// Compares `next` against `current` by value.
    #[must_use]
    pub fn between(current: &Card, next: &Card) -> Self {
        match next.compare_value(current) {
            Ordering::Greater => Self::Higher,
            Ordering::Less => Self::Lower,
            Ordering::Equal => Self::Same,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Higher => f.write_str("higher"),
            Self::Lower => f.write_str("lower"),
            Self::Same => f.write_str("the same"),
        }
    }
}

/// Read-only snapshot of everything a front end renders between rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    /// The face-up card the next guess is made against.
    pub current_card: Card,
    /// Total points scored.
    pub score: u32,
    /// Consecutive correct guesses.
    pub current_streak: u32,
    /// Longest streak this session.
    pub best_streak: u32,
    /// Rounds played.
    pub total_rounds: u32,
    /// Rounds guessed correctly.
    pub correct_rounds: u32,
    /// `correct_rounds / total_rounds`, or 0.0 before the first round.
    pub accuracy: f64,
    /// Cards left in the deck.
    pub remaining: usize,
}
