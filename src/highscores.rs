//! Session scoreboard
//!
//! Every finished round is kept in memory for the life of the `Session` and is
//! never written to disk.

use serde::{Deserialize, Serialize};

/// Rows shown when the host draws the session board
pub const BOARD_LEN: usize = 10;

/// Outcome of one finished round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round number within the session
    pub round: u32,
    pub score: u64,
    /// Seconds the round lasted
    pub elapsed: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionScores {
    /// Finished rounds in play order
    history: Vec<RoundResult>,
}

impl SessionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished round and return its rank among all rounds so far.
    /// Equal scores share a rank.
    pub fn record(&mut self, result: RoundResult) -> usize {
        self.history.push(result);
        self.rank_of(result.score)
    }

    /// 1 + the number of recorded rounds that scored strictly higher
    pub fn rank_of(&self, score: u64) -> usize {
        1 + self.history.iter().filter(|r| r.score > score).count()
    }

    /// Highest-scoring round; the earliest one wins a tie
    pub fn best(&self) -> Option<&RoundResult> {
        self.history
            .iter()
            .fold(None, |best: Option<&RoundResult>, r| match best {
                Some(b) if b.score >= r.score => Some(b),
                _ => Some(r),
            })
    }

    /// Top `BOARD_LEN` rounds, highest first, earlier rounds first on ties
    pub fn board(&self) -> Vec<RoundResult> {
        let mut board = self.history.clone();
        board.sort_by(|a, b| b.score.cmp(&a.score));
        board.truncate(BOARD_LEN);
        board
    }

    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(round: u32, score: u64) -> RoundResult {
        RoundResult {
            round,
            score,
            elapsed: round as f32 * 10.0,
        }
    }

    #[test]
    fn test_empty_board() {
        let scores = SessionScores::new();
        assert_eq!(scores.best(), None);
        assert!(scores.board().is_empty());
        assert_eq!(scores.rank_of(0), 1);
    }

    #[test]
    fn test_record_returns_rank() {
        let mut scores = SessionScores::new();
        assert_eq!(scores.record(result(1, 5)), 1);
        assert_eq!(scores.record(result(2, 9)), 1);
        assert_eq!(scores.record(result(3, 7)), 2);
        // Ties share a rank
        assert_eq!(scores.record(result(4, 7)), 2);
        assert_eq!(scores.record(result(5, 0)), 5);
        assert_eq!(scores.rounds_played(), 5);
        assert_eq!(scores.history()[4].round, 5);
    }

    #[test]
    fn test_best_keeps_earliest_on_tie() {
        let mut scores = SessionScores::new();
        scores.record(result(1, 4));
        scores.record(result(2, 8));
        scores.record(result(3, 8));
        assert_eq!(scores.best().map(|r| r.round), Some(2));
    }

    #[test]
    fn test_board_sorted_and_capped() {
        let mut scores = SessionScores::new();
        for round in 1..=15 {
            scores.record(result(round, u64::from(round % 4)));
        }
        let board = scores.board();
        assert_eq!(board.len(), BOARD_LEN);
        assert!(board.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(board[0], result(3, 3));
        // Full history survives the cap
        assert_eq!(scores.history().len(), 15);
    }
}
