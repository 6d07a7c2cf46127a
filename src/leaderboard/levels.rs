//! Tower height generation.
//!
//! Heights follow a geometric distribution: height 1 with probability 1/2,
//! each extra level half as likely, capped at the list's maximum. The
//! source of randomness is injectable so tests can pin the shape of the
//! list.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies a tower height for each new leaderboard node.
pub trait LevelGenerator {
    /// A height in `1..=max_height`
    fn next_height(&mut self, max_height: usize) -> usize;
}

/// Fair-coin geometric heights drawn from any [`RngCore`].
#[derive(Debug, Clone)]
pub struct CoinFlipLevels<R> {
    rng: R,
}

impl<R: RngCore> CoinFlipLevels<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl CoinFlipLevels<ChaCha8Rng> {
    /// Deterministic heights for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Heights seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: RngCore> LevelGenerator for CoinFlipLevels<R> {
    fn next_height(&mut self, max_height: usize) -> usize {
        // Each trailing one bit is a heads; 64 flips outlast any sane cap.
        let heads = self.rng.next_u64().trailing_ones() as usize;
        (1 + heads).min(max_height.max(1))
    }
}

/// Replays a fixed list of heights, cycling when exhausted. Test builds only.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedLevels {
    heights: Vec<usize>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedLevels {
    pub fn new(heights: Vec<usize>) -> Self {
        Self { heights, cursor: 0 }
    }
}

#[cfg(test)]
impl LevelGenerator for ScriptedLevels {
    fn next_height(&mut self, max_height: usize) -> usize {
        let Some(&height) = self.heights.get(self.cursor % self.heights.len().max(1)) else {
            return 1;
        };
        self.cursor += 1;
        height.clamp(1, max_height.max(1))
    }
}
