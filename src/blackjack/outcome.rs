//! Blackjack Lite round outcomes and the running record.

/// How a Blackjack Lite round ended, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlackjackOutcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has blackjack and the dealer does not.
    PlayerBlackjack,
    /// Dealer has blackjack and the player does not.
    DealerBlackjack,
    /// Player's total is higher.
    PlayerHigher,
    /// Dealer's total is higher.
    DealerHigher,
    /// Equal totals.
    Push,
}

impl BlackjackOutcome {
    /// Returns whether the player won.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::DealerBust | Self::PlayerBlackjack | Self::PlayerHigher
        )
    }

    /// Returns whether the player lost.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(
            self,
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerHigher
        )
    }
}

/// Wins, losses, and pushes across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Record {
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds tied.
    pub pushes: u32,
}

impl Record {
    /// Adds an outcome to the record.
    pub const fn record(&mut self, outcome: BlackjackOutcome) {
        if outcome.is_win() {
            self.wins = self.wins.saturating_add(1);
        } else if outcome.is_loss() {
            self.losses = self.losses.saturating_add(1);
        } else {
            self.pushes = self.pushes.saturating_add(1);
        }
    }

    /// Returns the number of rounds recorded.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.pushes)
    }

    /// Returns the fraction of rounds won, or 0.0 if none were played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.wins) / f64::from(total),
        }
    }
}
