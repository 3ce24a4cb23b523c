//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when parsing or constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of 2-10, J, Q, K, A.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not one of the four suits.
    #[error("invalid suit")]
    InvalidSuit,
    /// Input is empty.
    #[error("empty card input")]
    Empty,
}

/// Errors that can occur when parsing a guess direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectionError {
    /// Input is neither higher nor lower.
    #[error("direction must be higher or lower")]
    Invalid,
}

/// Errors that can occur when constructing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same standard card appears twice.
    #[error("duplicate card in deck")]
    DuplicateCard,
    /// A Joker was supplied to a deck without Jokers.
    #[error("joker in a deck without jokers")]
    UnexpectedJoker,
    /// More Jokers than a deck can hold.
    #[error("too many jokers")]
    TooManyJokers,
    /// Reshuffle threshold is zero or larger than the full deck.
    #[error("invalid reshuffle threshold")]
    InvalidThreshold,
}

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Reshuffle threshold is zero or larger than the full deck.
    #[error("invalid reshuffle threshold")]
    InvalidThreshold,
    /// A correct guess must award at least one point.
    #[error("points per correct guess is zero")]
    ZeroPoints,
    /// The supplied deck disagrees with the Joker option.
    #[error("deck joker configuration does not match options")]
    JokerMismatch,
    /// The supplied deck holds fewer cards than the reshuffle threshold, so
    /// it would be discarded before its first draw.
    #[error("deck holds fewer cards than the reshuffle threshold")]
    DeckBelowThreshold,
}

/// Errors that can occur during a Blackjack Lite round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlackjackError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}
