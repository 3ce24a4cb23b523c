//! Property tests for shuffling and session statistics.

use std::collections::HashMap;

use hilors::shuffle::fisher_yates;
use hilors::{Card, Deck, Direction, Game, GameOptions};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(items in proptest::collection::vec(any::<u8>(), 0..80), seed in any::<u64>()) {
        let mut shuffled = items.clone();
        fisher_yates(&mut shuffled, &mut ChaCha8Rng::seed_from_u64(seed));

        let mut expected = items;
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn deck_shuffle_keeps_multiset(include_jokers in any::<bool>(), seed in any::<u64>()) {
        let ordered = Deck::build(include_jokers, seed);
        let mut shuffled = ordered.clone();
        shuffled.shuffle();

        prop_assert_eq!(counts(ordered.cards()), counts(shuffled.cards()));
    }

    #[test]
    fn streak_invariants_hold(
        seed in any::<u64>(),
        include_jokers in any::<bool>(),
        guesses in proptest::collection::vec(any::<bool>(), 1..200),
    ) {
        let options = GameOptions::default().with_jokers(include_jokers);
        let mut game = Game::new(options, seed).unwrap();
        let mut correct = 0;

        for &higher in &guesses {
            let direction = if higher { Direction::Higher } else { Direction::Lower };
            let result = game.guess(direction);
            let state = result.state;

            prop_assert!(state.best_streak >= state.current_streak);
            if result.correct {
                correct += 1;
            } else {
                prop_assert_eq!(state.current_streak, 0);
            }
            if result.previous_card.value() == result.next_card.value() {
                prop_assert!(!result.correct);
            }
        }

        let stats = game.statistics();
        prop_assert_eq!(stats.total_rounds as usize, guesses.len());
        prop_assert_eq!(stats.correct_rounds, correct);
        prop_assert_eq!(stats.score, correct);
    }
}
