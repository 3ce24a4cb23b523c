//! Game engine and session state.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::OptionsError;
use crate::options::GameOptions;

mod guess;
pub mod state;
pub mod stats;

pub use state::{Comparison, Direction, DisplayState};
pub use stats::Statistics;

/// A Higher or Lower game session.
///
/// The game owns the deck, the face-up card, and the session statistics. It
/// has a single state, awaiting a guess: [`Game::guess`] resolves a round
/// synchronously and [`Game::new_game`] starts over.
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck cards are drawn from.
    deck: Deck,
    /// The face-up card the next guess is made against.
    current_card: Card,
    /// Session statistics.
    stats: Statistics,
    /// Game options.
    options: GameOptions,
}

impl Game {
    /// Creates a new game with a shuffled deck and the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::{Direction, Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42).unwrap();
    /// let result = game.guess(Direction::Higher);
    /// assert_eq!(result.state.total_rounds, 1);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::from_deck(Deck::new(options.include_jokers, seed), options)
    }

    /// Creates a game that draws from `deck`, e.g. a stacked deck built with
    /// [`Deck::from_draws`]. The first draw becomes the current card.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, disagree with the deck's
    /// Joker configuration, or if a non-empty deck holds fewer cards than the
    /// reshuffle threshold (its cards would never be drawn).
    pub fn from_deck(deck: Deck, options: GameOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        if deck.include_jokers() != options.include_jokers {
            return Err(OptionsError::JokerMismatch);
        }
        let remaining = deck.remaining_count();
        if remaining > 0 && remaining < options.reshuffle_threshold {
            return Err(OptionsError::DeckBelowThreshold);
        }

        let mut deck = deck
            .with_reshuffle_threshold(options.reshuffle_threshold)
            .map_err(|_| OptionsError::InvalidThreshold)?;
        let current_card = deck.draw();
        log::info!(
            "new game: jokers {}, first card {current_card}",
            options.include_jokers
        );

        Ok(Self {
            deck,
            current_card,
            stats: Statistics::default(),
            options,
        })
    }

    /// Starts over with a fresh shuffled deck and zeroed statistics.
    ///
    /// The random stream and reshuffle threshold carry over.
    pub fn new_game(&mut self, include_jokers: bool) -> DisplayState {
        self.options.include_jokers = include_jokers;
        self.deck.rebuild(include_jokers);
        self.options.reshuffle_threshold = self.deck.reshuffle_threshold();
        self.current_card = self.deck.draw();
        self.stats = Statistics::default();
        log::info!(
            "new game: jokers {include_jokers}, first card {}",
            self.current_card
        );
        self.display_state()
    }

    /// Returns a snapshot of the current card, statistics, and deck size.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            current_card: self.current_card,
            score: self.stats.score,
            current_streak: self.stats.current_streak,
            best_streak: self.stats.best_streak,
            total_rounds: self.stats.total_rounds,
            correct_rounds: self.stats.correct_rounds,
            accuracy: self.stats.accuracy(),
            remaining: self.deck.remaining_count(),
        }
    }

    /// Returns the face-up card.
    #[must_use]
    pub const fn current_card(&self) -> Card {
        self.current_card
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
