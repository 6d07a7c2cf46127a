//! Red-black node stored in the auction arena.
//!
//! ## Design
//!
//! `ItemNode` wraps an [`AuctionItem`] with a color bit and parent/child
//! links. Links are slab keys (`usize`). Key [`NIL`] is one shared black
//! sentinel standing in for every missing child and the root's parent, so
//! rotations and fixups never branch on `Option`.

use crate::types::AuctionItem;

/// Slab key of the shared sentinel
pub const NIL: usize = 0;

/// Node color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A node in the auction red-black tree.
#[derive(Debug, Clone)]
pub struct ItemNode {
    pub item: AuctionItem,
    pub color: Color,
    pub left: usize,
    pub right: usize,
    pub parent: usize,
}

impl ItemNode {
    /// A fresh red node with every link at the sentinel
    ///
    /// ```
    /// use arcade_ledger::auction::{Color, ItemNode, NIL};
    /// use arcade_ledger::types::AuctionItem;
    ///
    /// let node = ItemNode::new(AuctionItem::new(1, 100));
    /// assert_eq!(node.color, Color::Red);
    /// assert!(node.is_leaf());
    /// assert_eq!(node.parent, NIL);
    /// ```
    #[inline]
    pub fn new(item: AuctionItem) -> Self {
        Self {
            item,
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    /// The black sentinel
    pub fn sentinel() -> Self {
        Self {
            color: Color::Black,
            ..Self::new(AuctionItem::default())
        }
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// Both children are the sentinel
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == NIL && self.right == NIL
    }

    #[inline]
    pub fn item_id(&self) -> u64 {
        self.item.item_id
    }
}
