//! Skip-list node stored in the leaderboard arena.
//!
//! ## Design
//!
//! `RankNode` wraps a [`LeaderboardEntry`] with one forward link per level
//! it occupies. Links are slab keys (`usize`), not references, so the
//! arena owns every node and unlinking is plain key rewriting.
//!
//! ```text
//! Level 2:  HEAD ───────────────► 40 ─────────────► None
//! Level 1:  HEAD ──► 90 ────────► 40 ──► 40 ───────► None
//! Level 0:  HEAD ──► 90 ──► 75 ─► 40 ──► 40 ─► 10 ─► None
//!                          (score desc, id asc)
//! ```

use crate::types::LeaderboardEntry;

/// A node in the leaderboard skip list.
#[derive(Debug, Clone)]
pub struct RankNode {
    pub entry: LeaderboardEntry,

    /// `forward[l]` is the next node at level `l`; len == tower height
    pub forward: Vec<Option<usize>>,
}

impl RankNode {
    /// Create an unlinked node with a tower of `height` levels
    ///
    /// ```
    /// use arcade_ledger::leaderboard::RankNode;
    /// use arcade_ledger::types::LeaderboardEntry;
    ///
    /// let node = RankNode::new(LeaderboardEntry::new(1, 100), 3);
    /// assert_eq!(node.height(), 3);
    /// assert!(node.is_unlinked());
    /// ```
    #[inline]
    pub fn new(entry: LeaderboardEntry, height: usize) -> Self {
        Self {
            entry,
            forward: vec![None; height],
        }
    }

    /// Head sentinel spanning every level; its entry is never compared
    pub fn sentinel(max_height: usize) -> Self {
        Self::new(LeaderboardEntry::new(u64::MAX, i64::MIN), max_height)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn player_id(&self) -> u64 {
        self.entry.player_id
    }

    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.forward.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_node_linking() {
        let mut node = RankNode::new(LeaderboardEntry::new(7, 50), 2);
        assert!(node.is_unlinked());

        node.forward[1] = Some(4);
        assert!(!node.is_unlinked());
        assert_eq!(node.player_id(), 7);
    }

    #[test]
    fn test_sentinel_spans_all_levels() {
        let head = RankNode::sentinel(32);
        assert_eq!(head.height(), 32);
        assert!(head.is_unlinked());
    }
}
