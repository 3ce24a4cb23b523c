//! Blackjack Lite integration tests.

#![allow(clippy::float_cmp)]

use hilors::blackjack::{BlackjackLite, BlackjackOutcome, BlackjackState, Hand, classify};
use hilors::{BlackjackError, Card, Deck, DeckError, Rank, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Stacks `draws` on top of the rest of a canonical deck so a round never
/// triggers the minimum-cards reshuffle.
fn stacked(draws: &[Card]) -> BlackjackLite {
    let mut all = draws.to_vec();
    for card in Deck::build(false, 0).cards() {
        if !all.contains(card) {
            all.push(*card);
        }
    }
    BlackjackLite::from_deck(Deck::from_draws(&all, false, 1).unwrap()).unwrap()
}

#[test]
fn equal_totals_push() {
    let mut game = stacked(&[
        card(Rank::Ten, Suit::Spades),  // player
        card(Rank::Nine, Suit::Hearts), // dealer up
        card(Rank::Seven, Suit::Clubs), // player
        card(Rank::Eight, Suit::Diamonds), // dealer hole
    ]);

    assert_eq!(game.start_round().unwrap(), None);
    assert_eq!(game.state(), BlackjackState::PlayerTurn);
    assert_eq!(game.player_hand().value(), 17);
    assert_eq!(game.dealer_up_card(), Some(&card(Rank::Nine, Suit::Hearts)));

    assert_eq!(game.stand().unwrap(), BlackjackOutcome::Push);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.state(), BlackjackState::RoundOver);
    assert_eq!(game.record().pushes, 1);
}

#[test]
fn player_blackjack_settles_on_deal() {
    let mut game = stacked(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
    ]);

    assert_eq!(
        game.start_round().unwrap(),
        Some(BlackjackOutcome::PlayerBlackjack)
    );
    assert_eq!(game.state(), BlackjackState::RoundOver);
    assert_eq!(game.last_outcome(), Some(BlackjackOutcome::PlayerBlackjack));
    assert_eq!(game.record().wins, 1);
    assert_eq!(game.stand().unwrap_err(), BlackjackError::InvalidState);
}

#[test]
fn hitting_past_21_loses() {
    let mut game = stacked(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::King, Suit::Hearts),
    ]);

    game.start_round().unwrap();
    assert_eq!(game.hit().unwrap(), card(Rank::King, Suit::Hearts));
    assert!(game.player_hand().is_bust());
    assert_eq!(game.state(), BlackjackState::RoundOver);
    assert_eq!(game.last_outcome(), Some(BlackjackOutcome::PlayerBust));
    assert_eq!(game.record().losses, 1);
    assert_eq!(game.hit().unwrap_err(), BlackjackError::InvalidState);
}

#[test]
fn dealer_draws_until_17_and_can_bust() {
    let mut game = stacked(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::King, Suit::Clubs),
    ]);

    game.start_round().unwrap();
    assert_eq!(game.stand().unwrap(), BlackjackOutcome::DealerBust);
    assert_eq!(game.dealer_hand().value(), 26);
}

#[test]
fn dealer_draws_and_wins() {
    let mut game = stacked(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Three, Suit::Clubs),
    ]);

    game.start_round().unwrap();
    assert_eq!(game.stand().unwrap(), BlackjackOutcome::DealerHigher);
    assert_eq!(game.dealer_hand().value(), 18);
    assert_eq!(game.dealer_hand().len(), 3);
}

#[test]
fn actions_out_of_turn_are_rejected() {
    let mut game = BlackjackLite::new(3);
    assert_eq!(game.state(), BlackjackState::Idle);
    assert_eq!(game.hit().unwrap_err(), BlackjackError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), BlackjackError::InvalidState);

    if game.start_round().unwrap().is_none() {
        assert_eq!(game.start_round().unwrap_err(), BlackjackError::InvalidState);
    }
}

#[test]
fn short_deck_is_reshuffled_before_dealing() {
    let short = Deck::from_draws(
        &[
            card(Rank::Ten, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Eight, Suit::Diamonds),
        ],
        false,
        5,
    )
    .unwrap();
    let mut game = BlackjackLite::from_deck(short).unwrap();
    assert_eq!(game.cards_remaining(), 4);

    game.start_round().unwrap();
    let dealt = game.player_hand().len() + game.dealer_hand().len();
    assert_eq!(game.cards_remaining() + dealt, 52);

    if game.state() == BlackjackState::PlayerTurn {
        assert_eq!(game.cards_remaining(), 48);
    }
}

#[test]
fn deck_with_jokers_is_rejected() {
    assert_eq!(
        BlackjackLite::from_deck(Deck::new(true, 1)).unwrap_err(),
        DeckError::UnexpectedJoker
    );
}

#[test]
fn dealer_blackjack_beats_three_card_21() {
    let mut player = Hand::new();
    for rank in [Rank::Seven, Rank::Seven, Rank::Seven] {
        player.add_card(card(rank, Suit::Clubs));
    }
    let mut dealer = Hand::new();
    dealer.add_card(card(Rank::Ace, Suit::Hearts));
    dealer.add_card(card(Rank::Queen, Suit::Hearts));

    assert_eq!(classify(&player, &dealer), BlackjackOutcome::DealerBlackjack);
}

#[test]
fn record_tracks_win_rate() {
    let mut game = BlackjackLite::new(99);
    assert_eq!(game.record().win_rate(), 0.0);

    for _ in 0..20 {
        if game.start_round().unwrap().is_none() {
            game.stand().unwrap();
        }
    }

    let record = game.record();
    assert_eq!(record.total(), 20);
    let expected = f64::from(record.wins) / 20.0;
    assert_eq!(record.win_rate(), expected);
}
