use std::fmt;

use crate::engine::Outcome;

/// Running tally of game outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScoreAccumulator {
    scores: [u64; 3],
    games: u64,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.scores[outcome.index()] += 1;
        self.games += 1;
        debug_assert_eq!(self.games, self.scores.iter().sum::<u64>());
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        self.scores[outcome.index()]
    }

    pub fn total(&self) -> u64 {
        self.games
    }

    /// Share of recorded games that ended in `outcome`, 0.0 before any game.
    pub fn ratio(&self, outcome: Outcome) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / self.games as f64
    }
}

impl Extend<Outcome> for ScoreAccumulator {
    fn extend<T: IntoIterator<Item = Outcome>>(&mut self, outcomes: T) {
        for outcome in outcomes {
            self.record(outcome);
        }
    }
}

impl fmt::Display for ScoreAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player 1 wins: {}, Player 2 wins: {}, Draws: {}",
            self.count(Outcome::PlayerOneWin),
            self.count(Outcome::PlayerTwoWin),
            self.count(Outcome::Draw)
        )
    }
}
