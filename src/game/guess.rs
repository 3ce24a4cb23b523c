use crate::result::RoundResult;

use super::{Comparison, Direction, Game};

impl Game {
    /// Resolves one round: draws the next card and scores the guess.
    ///
    /// A tie (including two Jokers) is always incorrect. An incorrect guess
    /// resets the current streak but never lowers the score. The revealed card
    /// becomes the current card. This never fails: an exhausted deck is
    /// reshuffled transparently.
    pub fn guess(&mut self, direction: Direction) -> RoundResult {
        let reshuffles = self.deck.reshuffles();
        let previous_card = self.current_card;
        let next_card = self.deck.draw();

        let comparison = Comparison::between(&previous_card, &next_card);
        let correct = direction.matches(comparison);
        let points_awarded = if correct {
            self.options.points_per_correct
        } else {
            0
        };

        self.stats.record(correct, self.options.points_per_correct);
        self.current_card = next_card;

        log::trace!(
            "{previous_card} -> {next_card}: guessed {direction}, was {comparison}, correct {correct}"
        );

        RoundResult {
            direction,
            correct,
            comparison,
            previous_card,
            next_card,
            points_awarded,
            reshuffled: self.deck.reshuffles() != reshuffles,
            state: self.display_state(),
        }
    }
}
