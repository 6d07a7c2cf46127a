//! Auction order book.
//!
//! ## Architecture
//!
//! A red-black tree keyed by `(price, item_id)` ascending:
//!
//! - **Slab arena + sentinel**: parent/child links are slab keys; key 0 is
//!   the shared black NIL
//! - **Classical fixups**: recolor/rotate after insert, sibling cases after
//!   delete, both mirrored by side
//! - **Successor splice**: a node with two children takes its in-order
//!   successor's key and the successor is removed instead
//!
//! ## Components
//!
//! - [`ItemNode`], [`Color`], [`NIL`]: node layout
//! - [`AuctionBook`]: the tree plus its id -> price index
//! - `validate`: full invariant audit, used heavily by the tests
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | insert_item | O(log n) |
//! | delete_item | O(log n) |
//! | min / max | O(log n) |
//! | items_in_order | O(n) |

pub mod node;
pub mod tree;
mod audit;

pub use node::{Color, ItemNode, NIL};
pub use tree::AuctionBook;

use crate::types::AuctionItem;

/// Capability handed out by [`create_auction_book`](crate::create_auction_book).
pub trait AuctionIndex {
    /// List an item at a fixed-point price; re-prices a listed item
    fn insert_item(&mut self, item_id: u64, price: u64);

    /// Delist an item; `false` if absent
    fn delete_item(&mut self, item_id: u64) -> bool;

    /// Items in ascending `(price, id)` order
    fn items_in_order(&self) -> Vec<AuctionItem>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuctionIndex for AuctionBook {
    fn insert_item(&mut self, item_id: u64, price: u64) {
        AuctionBook::insert_item(self, item_id, price)
    }

    fn delete_item(&mut self, item_id: u64) -> bool {
        AuctionBook::delete_item(self, item_id)
    }

    fn items_in_order(&self) -> Vec<AuctionItem> {
        AuctionBook::items_in_order(self)
    }

    fn len(&self) -> usize {
        AuctionBook::len(self)
    }
}
