//! A Higher or Lower card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a shuffled [`Deck`], hands out
//! cards, resolves guesses, and tracks session statistics. Presentation is
//! left to the caller: ask for a [`DisplayState`], collect a [`Direction`],
//! call [`Game::guess`], and render the returned [`RoundResult`].
//!
//! A second mode, [`blackjack::BlackjackLite`], plays single-hand blackjack on
//! the same card model.
//!
//! # Example
//!
//! ```
//! use hilors::{Direction, Game, GameOptions};
//!
//! let options = GameOptions::default().with_jokers(true);
//! let mut game = Game::new(options, 42).unwrap();
//!
//! let result = game.guess(Direction::Higher);
//! assert_eq!(result.next_card, game.current_card());
//! assert!(result.state.best_streak >= result.state.current_streak);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_COUNT, JOKER_VALUE, Rank, Suit};
pub use deck::Deck;
pub use error::{BlackjackError, CardError, DeckError, DirectionError, OptionsError};
pub use game::{Comparison, Direction, DisplayState, Game, Statistics};
pub use options::GameOptions;
pub use result::RoundResult;
