//! Live score leaderboard.
//!
//! ## Architecture
//!
//! A skip list ordered by (score desc, player id asc):
//!
//! - **Randomized towers**: geometric heights from a [`LevelGenerator`]
//! - **Slab arena**: nodes addressed by stable keys, no reference cycles
//! - **Bounded top-N**: a walk along level 0
//!
//! ## Components
//!
//! - [`RankNode`]: entry plus per-level forward links
//! - [`LevelGenerator`], [`CoinFlipLevels`]: tower heights
//! - [`Leaderboard`]: the skip list
//!
//! ## Performance
//!
//! | Operation | Expected |
//! |-----------|----------|
//! | add_score | O(log n) |
//! | remove_player | O(log n) |
//! | top_n(k) | O(k) |
//! | rank_of | O(n) |

pub mod node;
pub mod levels;
pub mod skip_list;

pub use node::RankNode;
pub use levels::{CoinFlipLevels, LevelGenerator};
#[cfg(test)]
pub use levels::ScriptedLevels;
pub use skip_list::{Leaderboard, MAX_LEVEL};

/// Capability handed out by [`create_leaderboard`](crate::create_leaderboard).
pub trait Ranking {
    /// Record a score; a player already present moves to the new score
    fn add_score(&mut self, player_id: u64, score: i64);

    /// Remove a player; `false` if absent
    fn remove_player(&mut self, player_id: u64) -> bool;

    /// Up to `n` player ids, best first
    fn top_n(&self, n: usize) -> Vec<u64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<G: LevelGenerator> Ranking for Leaderboard<G> {
    fn add_score(&mut self, player_id: u64, score: i64) {
        Leaderboard::add_score(self, player_id, score)
    }

    fn remove_player(&mut self, player_id: u64) -> bool {
        Leaderboard::remove_player(self, player_id)
    }

    fn top_n(&self, n: usize) -> Vec<u64> {
        Leaderboard::top_n(self, n)
    }

    fn len(&self) -> usize {
        Leaderboard::len(self)
    }
}
