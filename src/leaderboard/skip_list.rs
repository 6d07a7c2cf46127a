//! Score leaderboard backed by a skip list.
//!
//! ## Architecture
//!
//! - **Slab arena**: every node (the head sentinel included) lives in a
//!   `Slab<RankNode>`; forward links are slab keys
//! - **Head sentinel**: slab key 0, spans all [`MAX_LEVEL`] levels
//! - **Id index**: `HashMap<player_id, slab key>` so a player is found in
//!   O(1) before the ranked descent that unlinks it. Removal by id goes
//!   through this index instead of a level-0 scan; the outcome is the same
//!
//! ## Ordering
//!
//! Level 0 holds every player sorted by score descending, then id
//! ascending. A node present at level `l` is present at every level below.
//!
//! ## Example
//!
//! ```
//! use arcade_ledger::leaderboard::Leaderboard;
//!
//! let mut board = Leaderboard::with_seed(1);
//! board.add_score(10, 100);
//! board.add_score(20, 100);
//! board.add_score(5, 100);
//! board.add_score(15, 100);
//!
//! assert_eq!(board.top_n(4), vec![5, 10, 15, 20]);
//! ```

use std::collections::HashMap;

use rand_chacha::ChaCha8Rng;
use slab::Slab;

use crate::digest::Fingerprinter;
use crate::leaderboard::{CoinFlipLevels, LevelGenerator, RankNode};
use crate::types::LeaderboardEntry;

/// Maximum tower height
pub const MAX_LEVEL: usize = 32;

/// Slab key of the head sentinel
const HEAD: usize = 0;

/// Skip-list leaderboard.
#[derive(Debug)]
pub struct Leaderboard<G = CoinFlipLevels<ChaCha8Rng>> {
    /// Node arena; key 0 is the head sentinel
    nodes: Slab<RankNode>,

    /// Player id to slab key
    index: HashMap<u64, usize>,

    /// Current tallest occupied level count (>= 1)
    level: usize,

    generator: G,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    /// Empty leaderboard with entropy-seeded tower heights
    pub fn new() -> Self {
        Self::with_generator(CoinFlipLevels::from_entropy())
    }

    /// Empty leaderboard whose shape is fully determined by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(CoinFlipLevels::seeded(seed))
    }
}

impl<G: LevelGenerator> Leaderboard<G> {
    /// Empty leaderboard drawing heights from `generator`
    pub fn with_generator(generator: G) -> Self {
        Self::with_capacity_and_generator(0, generator)
    }

    /// Pre-allocate room for `capacity` players
    pub fn with_capacity_and_generator(capacity: usize, generator: G) -> Self {
        let mut nodes = Slab::with_capacity(capacity + 1);
        let head = nodes.insert(RankNode::sentinel(MAX_LEVEL));
        debug_assert_eq!(head, HEAD);

        Self {
            nodes,
            index: HashMap::with_capacity(capacity),
            level: 1,
            generator,
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of levels currently in use
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    #[inline]
    pub fn contains(&self, player_id: u64) -> bool {
        self.index.contains_key(&player_id)
    }

    pub fn score_of(&self, player_id: u64) -> Option<i64> {
        let key = *self.index.get(&player_id)?;
        Some(self.nodes[key].entry.score)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Record a score for a player
    ///
    /// A player already on the board is moved to the new score.
    pub fn add_score(&mut self, player_id: u64, score: i64) {
        if let Some(&key) = self.index.get(&player_id) {
            if self.nodes[key].entry.score == score {
                return;
            }
            self.unlink(key);
        }

        let entry = LeaderboardEntry::new(player_id, score);
        let mut update = self.predecessors(&entry);

        let height = self.generator.next_height(MAX_LEVEL);
        if height > self.level {
            for slot in update.iter_mut().take(height).skip(self.level) {
                *slot = HEAD;
            }
            log::trace!("leaderboard level {} -> {}", self.level, height);
            self.level = height;
        }

        let key = self.nodes.insert(RankNode::new(entry, height));
        for (l, &prev) in update.iter().enumerate().take(height) {
            let next = self.nodes[prev].forward[l];
            self.nodes[key].forward[l] = next;
            self.nodes[prev].forward[l] = Some(key);
        }

        self.index.insert(player_id, key);
    }

    /// Remove a player; returns `false` if it was not on the board
    pub fn remove_player(&mut self, player_id: u64) -> bool {
        match self.index.get(&player_id) {
            Some(&key) => self.unlink(key),
            None => false,
        }
    }

    /// Drop every player
    pub fn clear(&mut self) {
        self.nodes.clear();
        let head = self.nodes.insert(RankNode::sentinel(MAX_LEVEL));
        debug_assert_eq!(head, HEAD);
        self.index.clear();
        self.level = 1;
    }

    /// Last node at each level that ranks strictly ahead of `entry`
    ///
    /// Levels at or above `self.level` are left pointing at the head.
    fn predecessors(&self, entry: &LeaderboardEntry) -> [usize; MAX_LEVEL] {
        let mut update = [HEAD; MAX_LEVEL];
        let mut current = HEAD;

        for l in (0..self.level).rev() {
            while let Some(next) = self.nodes[current].forward[l] {
                if !self.nodes[next].entry.ranks_ahead_of(entry) {
                    break;
                }
                current = next;
            }
            update[l] = current;
        }

        update
    }

    /// Splice `key` out of every level and free it
    fn unlink(&mut self, key: usize) -> bool {
        let entry = self.nodes[key].entry;
        let update = self.predecessors(&entry);

        if self.nodes[update[0]].forward[0] != Some(key) {
            log::warn!("leaderboard node for player {} not at its ranked position", entry.player_id);
            return false;
        }

        let node = self.nodes.remove(key);
        for (l, next) in node.forward.into_iter().enumerate() {
            self.nodes[update[l]].forward[l] = next;
        }
        self.index.remove(&entry.player_id);

        while self.level > 1 && self.nodes[HEAD].forward[self.level - 1].is_none() {
            self.level -= 1;
            log::trace!("leaderboard level shrank to {}", self.level);
        }

        true
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Up to `n` player ids in ranked order
    pub fn top_n(&self, n: usize) -> Vec<u64> {
        self.iter().take(n).map(|entry| entry.player_id).collect()
    }

    /// 0-based rank of a player, walking level 0
    pub fn rank_of(&self, player_id: u64) -> Option<usize> {
        if !self.contains(player_id) {
            return None;
        }
        self.iter().position(|entry| entry.player_id == player_id)
    }

    /// All entries in ranked order
    pub fn iter(&self) -> impl Iterator<Item = LeaderboardEntry> + '_ {
        self.keys_at(0).map(move |key| self.nodes[key].entry)
    }

    /// Slab keys along one level, head excluded
    fn keys_at(&self, level: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.nodes[HEAD].forward[level], move |&key| {
            self.nodes[key].forward.get(level).copied().flatten()
        })
    }

    /// Check level ordering, the tower property, the level counter and
    /// the id index against each other
    pub fn is_well_formed(&self) -> bool {
        let base: Vec<usize> = self.keys_at(0).collect();
        if base.len() != self.len() {
            return false;
        }
        if base.iter().any(|key| self.index.get(&self.nodes[*key].player_id()) != Some(key)) {
            return false;
        }

        for l in 0..MAX_LEVEL {
            let keys: Vec<usize> = self.keys_at(l).collect();
            if l >= self.level && !keys.is_empty() {
                return false;
            }
            let sorted = keys
                .windows(2)
                .all(|w| self.nodes[w[0]].entry.ranks_ahead_of(&self.nodes[w[1]].entry));
            // Every node on this level must be tall enough to be here.
            let towers_ok = keys.iter().all(|&key| self.nodes[key].height() > l);
            if !sorted || !towers_ok {
                return false;
            }
        }

        // Each node is linked at every level of its tower.
        let linked: usize = (0..MAX_LEVEL).map(|l| self.keys_at(l).count()).sum();
        let towers: usize = base.iter().map(|&key| self.nodes[key].height()).sum();
        linked == towers && (self.level == 1 || self.nodes[HEAD].forward[self.level - 1].is_some())
    }

    /// SHA-256 over ranked entries and their tower heights
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut fp = Fingerprinter::new("leaderboard");
        for key in self.keys_at(0) {
            let node = &self.nodes[key];
            fp.write_u64(node.entry.player_id);
            fp.write_i64(node.entry.score);
            fp.write_u64(node.height() as u64);
        }
        fp.finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::ScriptedLevels;

    fn scripted(heights: Vec<usize>) -> Leaderboard<ScriptedLevels> {
        Leaderboard::with_generator(ScriptedLevels::new(heights))
    }

    #[test]
    fn test_empty_board() {
        let board = Leaderboard::with_seed(1);
        assert!(board.is_empty());
        assert!(board.top_n(5).is_empty());
        assert_eq!(board.level(), 1);
        assert!(board.is_well_formed());
    }

    #[test]
    fn test_ranked_by_score_desc() {
        let mut board = Leaderboard::with_seed(3);
        board.add_score(1, 100);
        board.add_score(2, 300);
        board.add_score(3, 200);
        assert_eq!(board.top_n(10), vec![2, 3, 1]);
        assert!(board.is_well_formed());
    }

    #[test]
    fn test_ties_by_ascending_id() {
        let mut board = Leaderboard::with_seed(3);
        for id in [10, 20, 5, 15] {
            board.add_score(id, 100);
        }
        assert_eq!(board.top_n(4), vec![5, 10, 15, 20]);
        assert_eq!(board.top_n(2), vec![5, 10]);
        assert!(board.top_n(0).is_empty());
    }

    #[test]
    fn test_tall_node_raises_level() {
        let mut board = scripted(vec![1, 5, 2]);
        board.add_score(1, 10);
        assert_eq!(board.level(), 1);
        board.add_score(2, 20);
        assert_eq!(board.level(), 5);
        board.add_score(3, 30);
        assert_eq!(board.level(), 5);
        assert!(board.is_well_formed());
    }

    #[test]
    fn test_level_shrinks_on_removal() {
        let mut board = scripted(vec![1, 6, 3]);
        board.add_score(1, 10);
        board.add_score(2, 20);
        board.add_score(3, 30);
        assert_eq!(board.level(), 6);

        assert!(board.remove_player(2));
        assert_eq!(board.level(), 3);
        assert!(board.remove_player(3));
        assert_eq!(board.level(), 1);
        assert_eq!(board.top_n(5), vec![1]);
        assert!(board.is_well_formed());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut board = Leaderboard::with_seed(5);
        board.add_score(1, 100);
        board.add_score(2, 200);
        let before = board.fingerprint();

        assert!(!board.remove_player(999));
        assert_eq!(board.top_n(2), vec![2, 1]);
        assert_eq!(board.fingerprint(), before);
    }

    #[test]
    fn test_remove_all() {
        let mut board = Leaderboard::with_seed(5);
        board.add_score(1, 100);
        board.add_score(2, 200);
        board.add_score(3, 300);
        board.remove_player(2);
        board.remove_player(1);
        board.remove_player(3);
        assert!(board.top_n(5).is_empty());
        assert_eq!(board.level(), 1);
        assert!(board.is_well_formed());
    }

    #[test]
    fn test_rescoring_moves_player() {
        let mut board = Leaderboard::with_seed(8);
        board.add_score(1, 100);
        board.add_score(2, 200);
        board.add_score(1, 300);

        assert_eq!(board.len(), 2);
        assert_eq!(board.top_n(2), vec![1, 2]);
        assert_eq!(board.score_of(1), Some(300));
        assert_eq!(board.rank_of(2), Some(1));
        assert!(board.is_well_formed());
    }

    #[test]
    fn test_remove_then_readd() {
        let mut board = Leaderboard::with_seed(8);
        board.add_score(1, 100);
        board.add_score(2, 200);
        board.remove_player(2);
        board.add_score(2, 50);
        assert_eq!(board.top_n(2), vec![1, 2]);
    }

    #[test]
    fn test_negative_scores() {
        let mut board = Leaderboard::with_seed(2);
        board.add_score(1, -10);
        board.add_score(2, 0);
        board.add_score(3, -100);
        assert_eq!(board.top_n(3), vec![2, 1, 3]);
    }

    #[test]
    fn test_same_seed_same_shape() {
        let mut a = Leaderboard::with_seed(77);
        let mut b = Leaderboard::with_seed(77);
        for id in 0..500u64 {
            a.add_score(id, (id * 37 % 101) as i64);
            b.add_score(id, (id * 37 % 101) as i64);
        }
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_clear() {
        let mut board = scripted(vec![4]);
        board.add_score(1, 1);
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.level(), 1);
        board.add_score(2, 2);
        assert_eq!(board.top_n(3), vec![2]);
        assert!(board.is_well_formed());
    }

    #[test]
    fn test_many_players_stay_well_formed() {
        let mut board = Leaderboard::with_seed(11);
        for id in 0..2_000u64 {
            board.add_score(id, (id % 97) as i64);
        }
        for id in (0..2_000u64).step_by(3) {
            board.remove_player(id);
        }
        assert!(board.is_well_formed());
        assert_eq!(board.len(), 2_000 - 667);
    }
}
