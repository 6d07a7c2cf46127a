//! Ranked leaderboard entry.
//!
//! ## Ranking
//!
//! Entries rank by score descending, ties broken by player id ascending.
//! `Ord` on [`LeaderboardEntry`] encodes exactly that, so "less than" means
//! "ranks ahead of".

use std::cmp::Ordering;

/// A player id and its current score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LeaderboardEntry {
    pub player_id: u64,
    pub score: i64,
}

impl LeaderboardEntry {
    #[inline]
    pub fn new(player_id: u64, score: i64) -> Self {
        Self { player_id, score }
    }

    /// True if `self` is placed before `other` on the board
    ///
    /// ```
    /// use arcade_ledger::types::LeaderboardEntry;
    ///
    /// let high = LeaderboardEntry::new(9, 500);
    /// let low = LeaderboardEntry::new(1, 100);
    /// assert!(high.ranks_ahead_of(&low));
    ///
    /// // Same score: lower id first
    /// let a = LeaderboardEntry::new(5, 100);
    /// let b = LeaderboardEntry::new(10, 100);
    /// assert!(a.ranks_ahead_of(&b));
    /// ```
    #[inline]
    pub fn ranks_ahead_of(&self, other: &Self) -> bool {
        self < other
    }
}

impl Ord for LeaderboardEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.player_id.cmp(&other.player_id))
    }
}

impl PartialOrd for LeaderboardEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
