use std::collections::VecDeque;

use crate::game::Player;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub winner: Option<Player>,
    pub moves: usize,
}

/// Session statistics with rolling window computations.
pub struct SessionStats {
    round_results: VecDeque<RoundResult>,
    capacity: usize,
    total_rounds: usize, // lifetime count, never capped
    total_draws: usize,
}

impl SessionStats {
    pub fn with_capacity(capacity: usize) -> Self {
        SessionStats {
            round_results: VecDeque::with_capacity(capacity),
            capacity,
            total_rounds: 0,
            total_draws: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record_round(&mut self, result: RoundResult) {
        self.total_rounds += 1;
        if result.winner.is_none() {
            self.total_draws += 1;
        }
        self.round_results.push_back(result);
        if self.round_results.len() > self.capacity {
            self.round_results.pop_front();
        }
    }

    /// Share of the last N rounds won by `player`.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner == Some(player))
    }

    /// Draw rate in the last N rounds.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner.is_none())
    }

    fn rate(&self, last_n: usize, pred: impl Fn(&RoundResult) -> bool) -> f32 {
        let n = self.round_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self
            .round_results
            .iter()
            .rev()
            .take(n)
            .filter(|r| pred(r))
            .count();
        hits as f32 / n as f32
    }

    /// Average number of drops per round over the last N rounds.
    pub fn average_round_length(&self, last_n: usize) -> f32 {
        let n = self.round_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .round_results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.moves)
            .sum();
        total as f32 / n as f32
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// Lifetime count of drawn rounds
    pub fn total_draws(&self) -> usize {
        self.total_draws
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
