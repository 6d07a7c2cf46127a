//! Player identity registry.
//!
//! ## Architecture
//!
//! An open-addressing hash table keyed by player id:
//!
//! - **Prime capacity**: every double-hash stride reaches every slot
//! - **Double hashing**: `(h1 + i * h2) mod capacity`, no primary clustering
//! - **Tombstones**: removed slots stay probe-transparent until the next rehash
//! - **Growth**: rehash to the next prime >= 2x capacity before load exceeds 0.7
//!
//! ## Components
//!
//! - [`Slot`]: Empty / Occupied / Deleted cell
//! - [`PlayerRegistry`]: the table itself
//! - [`prime`]: sizing helpers
//!
//! ## Performance
//!
//! | Operation | Expected | Worst |
//! |-----------|----------|-------|
//! | insert | O(1) amortized | O(n) on rehash |
//! | search | O(1) | O(n) |
//! | remove | O(1) | O(n) |

pub mod prime;
pub mod slot;
pub mod table;

pub use slot::Slot;
pub use table::{GrowthPolicy, InsertOutcome, PlayerRegistry, RegistryConfig};

use crate::error::RegistryError;

/// Capability handed out by [`create_player_registry`](crate::create_player_registry).
pub trait PlayerStore {
    /// Insert a player or overwrite the name of an existing id
    fn insert(&mut self, id: u64, name: &str) -> Result<InsertOutcome, RegistryError>;

    /// Name for `id`, `None` when absent
    fn search(&self, id: u64) -> Option<&str>;

    /// Remove `id`, returning its name if it was present
    fn remove(&mut self, id: u64) -> Option<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlayerStore for PlayerRegistry {
    fn insert(&mut self, id: u64, name: &str) -> Result<InsertOutcome, RegistryError> {
        PlayerRegistry::insert(self, id, name)
    }

    fn search(&self, id: u64) -> Option<&str> {
        PlayerRegistry::search(self, id)
    }

    fn remove(&mut self, id: u64) -> Option<String> {
        PlayerRegistry::remove(self, id)
    }

    fn len(&self) -> usize {
        PlayerRegistry::len(self)
    }
}
