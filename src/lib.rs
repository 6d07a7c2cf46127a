//! # Arcade Ledger
//!
//! In-memory indexed containers for a game backend simulation.
//!
//! ## Architecture
//!
//! Three independent containers, each owning its own node storage:
//! - **Registry**: player id -> name, double-hashing open addressing
//! - **Leaderboard**: skip list ranked by score desc, id asc
//! - **Auction**: red-black tree ordered by price asc, id asc
//!
//! Plus a **toolkit** of stateless solvers (DP, graphs, scheduling) that
//! share nothing with the containers.
//!
//! ## Design Principles
//!
//! 1. **Arena storage**: skip-list and tree nodes live in slabs and link by
//!    key, so there are no reference cycles and dropping a container frees
//!    every node exactly once
//! 2. **No Floating Point in keys**: auction prices are fixed-point (10^8)
//! 3. **Total contracts**: absent ids give `None` or `false`, never a panic
//! 4. **Determinism on demand**: randomized tower heights are seedable
//! 5. **Single-threaded**: no internal locking; wrap externally if shared

// ============================================================================
// Module declarations
// ============================================================================

/// Value types: PlayerRecord, LeaderboardEntry, AuctionItem, prices
pub mod types;

/// Error enums
pub mod error;

/// Content fingerprints
pub mod digest;

/// Player registry: double-hashing table
pub mod registry;

/// Leaderboard: skip list
pub mod leaderboard;

/// Auction book: red-black tree
pub mod auction;

/// Stateless solvers
pub mod toolkit;

/// Parameterless factories
pub mod factory;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{AuctionItem, LeaderboardEntry, PlayerRecord};
pub use error::{InvariantViolation, RegistryError, ToolkitError};
pub use registry::{GrowthPolicy, InsertOutcome, PlayerRegistry, PlayerStore, RegistryConfig};
pub use leaderboard::{Leaderboard, Ranking};
pub use auction::{AuctionBook, AuctionIndex};
pub use factory::{create_auction_book, create_leaderboard, create_player_registry};
