//! Blackjack Lite: a single-hand blackjack variant on the same deck.
//!
//! No betting, splitting, or doubling. The dealer stands on 17 and the
//! session keeps a win/loss/push record.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{BlackjackError, DeckError};

mod hand;
mod outcome;

pub use hand::{BLACKJACK, Hand, card_value};
pub use outcome::{BlackjackOutcome, Record};

/// Fewest cards that must remain before a round starts; otherwise the deck
/// is reshuffled first.
pub const ROUND_MIN_CARDS: usize = 15;

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u8 = 17;

/// Blackjack Lite round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackState {
    /// No round has been dealt yet.
    Idle,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Round has been resolved.
    RoundOver,
}

/// A Blackjack Lite session.
#[derive(Debug, Clone)]
pub struct BlackjackLite {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    state: BlackjackState,
    record: Record,
    last_outcome: Option<BlackjackOutcome>,
}

impl BlackjackLite {
    /// Creates a session with a shuffled Joker-free deck.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::blackjack::{BlackjackLite, BlackjackState};
    ///
    /// let mut game = BlackjackLite::new(7);
    /// let outcome = game.start_round().unwrap();
    /// if outcome.is_none() {
    ///     assert_eq!(game.state(), BlackjackState::PlayerTurn);
    ///     game.stand().unwrap();
    /// }
    /// assert_eq!(game.record().total(), 1);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::build(Deck::new(false, seed))
    }

    /// Creates a session drawing from `deck`.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck includes Jokers.
    pub fn from_deck(deck: Deck) -> Result<Self, DeckError> {
        if deck.include_jokers() {
            return Err(DeckError::UnexpectedJoker);
        }
        Ok(Self::build(deck))
    }

    const fn build(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: BlackjackState::Idle,
            record: Record {
                wins: 0,
                losses: 0,
                pushes: 0,
            },
            last_outcome: None,
        }
    }

    /// Deals a new round: player, dealer, player, dealer.
    ///
    /// A player blackjack is settled at once; in that case the outcome is
    /// returned and the state is [`BlackjackState::RoundOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress.
    pub fn start_round(&mut self) -> Result<Option<BlackjackOutcome>, BlackjackError> {
        if self.state == BlackjackState::PlayerTurn {
            return Err(BlackjackError::InvalidState);
        }

        self.deck.ensure_at_least(ROUND_MIN_CARDS);
        self.player.clear();
        self.dealer.clear();
        self.last_outcome = None;

        self.player.add_card(self.deck.draw());
        self.dealer.add_card(self.deck.draw());
        self.player.add_card(self.deck.draw());
        self.dealer.add_card(self.deck.draw());
        self.state = BlackjackState::PlayerTurn;

        if self.player.is_blackjack() {
            self.dealer_play();
            return Ok(Some(self.resolve()));
        }

        Ok(None)
    }

    /// Player takes a card. Going bust ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, BlackjackError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw();
        self.player.add_card(card);
        if self.player.is_bust() {
            self.resolve();
        }

        Ok(card)
    }

    /// Player stands; the dealer plays out and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<BlackjackOutcome, BlackjackError> {
        self.ensure_player_turn()?;
        self.dealer_play();
        Ok(self.resolve())
    }

    fn ensure_player_turn(&self) -> Result<(), BlackjackError> {
        if self.state == BlackjackState::PlayerTurn {
            Ok(())
        } else {
            Err(BlackjackError::InvalidState)
        }
    }

    fn dealer_play(&mut self) {
        while self.dealer.value() < DEALER_STANDS_ON {
            self.dealer.add_card(self.deck.draw());
        }
    }

    fn resolve(&mut self) -> BlackjackOutcome {
        let outcome = classify(&self.player, &self.dealer);
        self.record.record(outcome);
        self.last_outcome = Some(outcome);
        self.state = BlackjackState::RoundOver;
        log::trace!(
            "blackjack round: player {} dealer {} -> {outcome:?}",
            self.player.value(),
            self.dealer.value()
        );
        outcome
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> BlackjackState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns the session record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// Returns the outcome of the last settled round.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<BlackjackOutcome> {
        self.last_outcome
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining_count()
    }
}

/// Settles a finished round.
#[must_use]
pub fn classify(player: &Hand, dealer: &Hand) -> BlackjackOutcome {
    if player.is_bust() {
        return BlackjackOutcome::PlayerBust;
    }
    if dealer.is_bust() {
        return BlackjackOutcome::DealerBust;
    }

    match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, false) => return BlackjackOutcome::PlayerBlackjack,
        (false, true) => return BlackjackOutcome::DealerBlackjack,
        _ => {}
    }

    match player.value().cmp(&dealer.value()) {
        core::cmp::Ordering::Greater => BlackjackOutcome::PlayerHigher,
        core::cmp::Ordering::Less => BlackjackOutcome::DealerHigher,
        core::cmp::Ordering::Equal => BlackjackOutcome::Push,
    }
}
