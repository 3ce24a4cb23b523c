//! The deck: ordered undrawn cards with automatic reshuffling.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, JOKER_COUNT, Rank, Suit};
use crate::error::DeckError;
use crate::shuffle::fisher_yates;

/// Default reshuffle threshold: rebuild only once the deck is empty.
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 1;

/// A single deck of 52 cards plus 0 or 2 Jokers.
///
/// Cards are drawn from the back of the sequence. When fewer cards than the
/// reshuffle threshold remain, [`Deck::draw`] first replaces the deck with a
/// fresh shuffled one, so drawing never fails.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Undrawn cards; the last element is drawn next.
    cards: Vec<Card>,
    /// Whether the two Jokers belong to this deck.
    include_jokers: bool,
    /// Remaining count below which the deck is rebuilt before a draw.
    reshuffle_threshold: usize,
    /// Number of automatic reshuffles performed so far.
    reshuffles: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Builds a full deck in canonical order without shuffling.
    ///
    /// Canonical order is Hearts, Diamonds, Clubs, Spades, each from Two to
    /// Ace, followed by the Jokers.
    #[must_use]
    pub fn build(include_jokers: bool, seed: u64) -> Self {
        Self {
            cards: full_set(include_jokers),
            include_jokers,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds a full deck and shuffles it.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::Deck;
    ///
    /// let deck = Deck::new(true, 42);
    /// assert_eq!(deck.remaining_count(), 54);
    /// ```
    #[must_use]
    pub fn new(include_jokers: bool, seed: u64) -> Self {
        let mut deck = Self::build(include_jokers, seed);
        deck.shuffle();
        deck
    }

    /// Creates a stacked deck that yields `draws` in the given order.
    ///
    /// Once the stacked cards are used up the deck reshuffles into a regular
    /// full deck with the given Joker configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a standard card appears twice, a Joker is given
    /// while Jokers are disabled, or more than two Jokers are given.
    pub fn from_draws(draws: &[Card], include_jokers: bool, seed: u64) -> Result<Self, DeckError> {
        let jokers = draws.iter().filter(|card| card.is_joker()).count();
        if jokers > 0 && !include_jokers {
            return Err(DeckError::UnexpectedJoker);
        }
        if jokers > JOKER_COUNT {
            return Err(DeckError::TooManyJokers);
        }

        for (index, card) in draws.iter().enumerate() {
            if !card.is_joker() && draws[..index].contains(card) {
                return Err(DeckError::DuplicateCard);
            }
        }

        let mut cards = draws.to_vec();
        cards.reverse();

        Ok(Self {
            cards,
            include_jokers,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is zero or exceeds [`Deck::full_size`].
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::Deck;
    ///
    /// let deck = Deck::new(false, 1).with_reshuffle_threshold(10).unwrap();
    /// assert_eq!(deck.reshuffle_threshold(), 10);
    /// assert!(Deck::new(false, 1).with_reshuffle_threshold(0).is_err());
    /// ```
    pub fn with_reshuffle_threshold(mut self, threshold: usize) -> Result<Self, DeckError> {
        if threshold == 0 || threshold > self.full_size() {
            return Err(DeckError::InvalidThreshold);
        }
        self.reshuffle_threshold = threshold;
        Ok(self)
    }

    /// Shuffles the undrawn cards in place.
    pub fn shuffle(&mut self) {
        fisher_yates(&mut self.cards, &mut self.rng);
    }

    /// Draws the next card, reshuffling a fresh deck first if fewer than the
    /// threshold remain.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the threshold is at least 1, so the deck is non-empty after the check"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < self.reshuffle_threshold {
            log::debug!(
                "{} card(s) left, below threshold {}; reshuffling",
                self.cards.len(),
                self.reshuffle_threshold
            );
            self.reset();
            self.reshuffles += 1;
        }

        let card = self
            .cards
            .pop()
            .expect("deck holds at least the threshold after the check");
        log::trace!("drew {card}, {} remaining", self.cards.len());
        card
    }

    /// Reshuffles a fresh deck if fewer than `count` cards remain.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn ensure_at_least(&mut self, count: usize) -> bool {
        if self.cards.len() < count {
            log::debug!("{} card(s) left, need {count}; reshuffling", self.cards.len());
            self.reset();
            self.reshuffles += 1;
            true
        } else {
            false
        }
    }

    /// Discards the undrawn cards and replaces them with a full shuffled deck.
    pub fn reset(&mut self) {
        self.cards = full_set(self.include_jokers);
        self.shuffle();
    }

    /// Changes the Joker configuration and resets the deck.
    pub fn rebuild(&mut self, include_jokers: bool) {
        self.include_jokers = include_jokers;
        self.reshuffle_threshold = self.reshuffle_threshold.min(self.full_size());
        self.reset();
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the size of a full deck with this Joker configuration.
    #[must_use]
    pub const fn full_size(&self) -> usize {
        full_size(self.include_jokers)
    }

    /// Returns whether this deck includes Jokers.
    #[must_use]
    pub const fn include_jokers(&self) -> bool {
        self.include_jokers
    }

    /// Returns the reshuffle threshold.
    #[must_use]
    pub const fn reshuffle_threshold(&self) -> usize {
        self.reshuffle_threshold
    }

    /// Returns how many automatic reshuffles have happened.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Returns the undrawn cards. The last card is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Returns the size of a full deck.
#[must_use]
pub const fn full_size(include_jokers: bool) -> usize {
    if include_jokers {
        DECK_SIZE + JOKER_COUNT
    } else {
        DECK_SIZE
    }
}

fn full_set(include_jokers: bool) -> Vec<Card> {
    let mut cards = Vec::with_capacity(full_size(include_jokers));

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    if include_jokers {
        cards.extend([Card::Joker; JOKER_COUNT]);
    }

    cards
}
