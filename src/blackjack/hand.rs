//! Blackjack hands.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Total above which a hand is bust.
pub const BLACKJACK: u8 = 21;

/// Returns the blackjack value of a card.
///
/// Face cards count 10 and Aces count 11 (reduced to 1 by [`Hand::value`]
/// when needed). Jokers count nothing.
#[must_use]
pub const fn card_value(card: &Card) -> u8 {
    match card.rank() {
        Some(Rank::Ace) => 11,
        Some(Rank::Jack | Rank::Queen | Rank::King) => 10,
        Some(rank) => rank.value(),
        None => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank() == Some(Rank::Ace) {
            aces += 1;
        }
        value = value.saturating_add(card_value(card));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// A hand of cards for either the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the best total, counting Aces as 1 where 11 would bust.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether an Ace is still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
