//! Parameterless factories.
//!
//! Each call returns a fresh, empty container behind the capability trait
//! it implements. Callers that want configuration (seeds, capacities,
//! growth policy) construct the concrete types directly.
//!
//! ```
//! use arcade_ledger::{create_auction_book, create_leaderboard, create_player_registry};
//!
//! let mut players = create_player_registry();
//! players.insert(1, "Alice").unwrap();
//! assert_eq!(players.search(1), Some("Alice"));
//!
//! let mut board = create_leaderboard();
//! board.add_score(1, 100);
//! assert_eq!(board.top_n(1), vec![1]);
//!
//! let mut book = create_auction_book();
//! book.insert_item(1, 100);
//! assert!(book.delete_item(1));
//! assert!(book.is_empty());
//! ```

use crate::auction::{AuctionBook, AuctionIndex};
use crate::leaderboard::{Leaderboard, Ranking};
use crate::registry::{PlayerRegistry, PlayerStore};

/// Empty registry: 101 slots, grows at load 0.7
pub fn create_player_registry() -> Box<dyn PlayerStore> {
    Box::new(PlayerRegistry::new())
}

/// Empty leaderboard with entropy-seeded tower heights
pub fn create_leaderboard() -> Box<dyn Ranking> {
    Box::new(Leaderboard::new())
}

/// Empty auction book
pub fn create_auction_book() -> Box<dyn AuctionIndex> {
    Box::new(AuctionBook::new())
}
