//! Round result type for a resolved guess.

use crate::card::Card;
use crate::game::{Comparison, Direction, DisplayState};

/// Result of one `guess` call, with enough state to render feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The direction the player guessed.
    pub direction: Direction,
    /// Whether the guess was correct. Ties are always incorrect.
    pub correct: bool,
    /// How the revealed card compared to the previous one.
    pub comparison: Comparison,
    /// The card the guess was made against.
    pub previous_card: Card,
    /// The revealed card, now the current card.
    pub next_card: Card,
    /// Points added to the score this round.
    pub points_awarded: u32,
    /// Whether the deck was reshuffled to reveal the next card.
    pub reshuffled: bool,
    /// Statistics and deck state after the round.
    pub state: DisplayState,
}
