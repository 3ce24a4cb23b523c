//! Game configuration options.

use crate::deck::{DEFAULT_RESHUFFLE_THRESHOLD, full_size};
use crate::error::OptionsError;

/// Configuration options for a Higher or Lower game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilors::GameOptions;
///
/// let options = GameOptions::default()
///     .with_jokers(true)
///     .with_reshuffle_threshold(5)
///     .with_points_per_correct(10);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether the deck includes two Jokers.
    pub include_jokers: bool,
    /// Remaining card count below which the deck is rebuilt before a draw.
    pub reshuffle_threshold: usize,
    /// Points awarded for each correct guess.
    pub points_per_correct: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            include_jokers: false,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            points_per_correct: 1,
        }
    }
}

impl GameOptions {
    /// Sets whether the deck includes Jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::GameOptions;
    ///
    /// let options = GameOptions::default().with_jokers(true);
    /// assert!(options.include_jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, include_jokers: bool) -> Self {
        self.include_jokers = include_jokers;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(2);
    /// assert_eq!(options.reshuffle_threshold, 2);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the points awarded per correct guess.
    ///
    /// # Example
    ///
    /// ```
    /// use hilors::GameOptions;
    ///
    /// let options = GameOptions::default().with_points_per_correct(5);
    /// assert_eq!(options.points_per_correct, 5);
    /// ```
    #[must_use]
    pub const fn with_points_per_correct(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if the reshuffle threshold is zero or larger than the
    /// full deck, or if a correct guess would award no points.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.reshuffle_threshold == 0
            || self.reshuffle_threshold > full_size(self.include_jokers)
        {
            return Err(OptionsError::InvalidThreshold);
        }
        if self.points_per_correct == 0 {
            return Err(OptionsError::ZeroPoints);
        }
        Ok(())
    }
}
