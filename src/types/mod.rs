//! Value types that cross the container boundaries.
//!
//! Containers never hand out references to their internal nodes; callers
//! only ever see these small copyable (or owned) records.
//!
//! ## Types
//!
//! - [`PlayerRecord`]: an `(id, name)` pair stored by the registry
//! - [`LeaderboardEntry`]: an `(id, score)` pair in ranked order
//! - [`AuctionItem`]: an `(id, price)` pair in price order
//!
//! ## Fixed-Point Prices
//!
//! Auction prices are `u64` scaled by 10^8, see [`price`].

mod player;
mod entry;
mod item;
pub mod price;

pub use player::PlayerRecord;
pub use entry::LeaderboardEntry;
pub use item::AuctionItem;
