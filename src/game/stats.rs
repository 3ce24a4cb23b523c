//! Session statistics.

/// Score and streak counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Statistics {
    /// Total points scored. Never decreases.
    pub score: u32,
    /// Consecutive correct guesses.
    pub current_streak: u32,
    /// Longest streak this session. Always at least `current_streak`.
    pub best_streak: u32,
    /// Rounds played.
    pub total_rounds: u32,
    /// Rounds guessed correctly.
    pub correct_rounds: u32,
}

impl Statistics {
    /// Records one resolved round.
    pub fn record(&mut self, correct: bool, points: u32) {
        self.total_rounds = self.total_rounds.saturating_add(1);

        if correct {
            self.score = self.score.saturating_add(points);
            self.correct_rounds = self.correct_rounds.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Returns the fraction of rounds guessed correctly, or 0.0 if no round
    /// has been played.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            f64::from(self.correct_rounds) / f64::from(self.total_rounds)
        }
    }
}
