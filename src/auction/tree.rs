//! Auction book backed by a red-black tree.
//!
//! ## Architecture
//!
//! - **Slab arena**: every node lives in a `Slab<ItemNode>`; key 0 is the
//!   shared black sentinel [`NIL`]
//! - **Price index**: `HashMap<item_id, price>` recovers the `(price, id)`
//!   key so deletion by id is an ordered descent, not a scan
//! - **Iterative descent**: insertion and lookup loop with a parent cursor
//!
//! ## Ordering
//!
//! Items order by `(price, item_id)` ascending; ids are unique in the book,
//! so keys never tie.
//!
//! ## Example
//!
//! ```
//! use arcade_ledger::auction::AuctionBook;
//!
//! let mut book = AuctionBook::new();
//! book.insert_item(1, 100);
//! book.insert_item(2, 50);
//! book.insert_item(3, 150);
//! assert_eq!(book.min_item().map(|item| item.item_id), Some(2));
//!
//! assert!(book.delete_item(2));
//! assert!(!book.delete_item(2));
//! assert!(book.validate().is_ok());
//! ```

use std::collections::HashMap;

use slab::Slab;

use crate::auction::{Color, ItemNode, NIL};
use crate::digest::Fingerprinter;
use crate::types::AuctionItem;

/// Red-black tree of auction items.
#[derive(Debug, Clone)]
pub struct AuctionBook {
    /// Node arena; key 0 is the sentinel
    pub(super) nodes: Slab<ItemNode>,

    pub(super) root: usize,

    /// Item id to price (fixed-point)
    pub(super) prices: HashMap<u64, u64>,
}

impl Default for AuctionBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AuctionBook {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-allocate room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Slab::with_capacity(capacity + 1);
        let nil = nodes.insert(ItemNode::sentinel());
        debug_assert_eq!(nil, NIL);

        Self {
            nodes,
            root: NIL,
            prices: HashMap::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Size and Lookup
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    #[inline]
    pub fn contains(&self, item_id: u64) -> bool {
        self.prices.contains_key(&item_id)
    }

    /// Current price of an item (fixed-point)
    #[inline]
    pub fn price_of(&self, item_id: u64) -> Option<u64> {
        self.prices.get(&item_id).copied()
    }

    /// Cheapest item (lowest id among equal prices)
    pub fn min_item(&self) -> Option<AuctionItem> {
        (self.root != NIL).then(|| self.nodes[self.minimum(self.root)].item)
    }

    /// Most expensive item (highest id among equal prices)
    pub fn max_item(&self) -> Option<AuctionItem> {
        if self.root == NIL {
            return None;
        }
        let mut x = self.root;
        while self.nodes[x].right != NIL {
            x = self.nodes[x].right;
        }
        Some(self.nodes[x].item)
    }

    /// All items in `(price, id)` order
    pub fn items_in_order(&self) -> Vec<AuctionItem> {
        let mut items = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut x = self.root;

        while x != NIL || !stack.is_empty() {
            while x != NIL {
                stack.push(x);
                x = self.nodes[x].left;
            }
            if let Some(top) = stack.pop() {
                items.push(self.nodes[top].item);
                x = self.nodes[top].right;
            }
        }

        items
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((x, depth)) = stack.pop() {
            if x == NIL {
                best = best.max(depth);
                continue;
            }
            stack.push((self.nodes[x].left, depth + 1));
            stack.push((self.nodes[x].right, depth + 1));
        }
        best
    }

    /// Node holding exactly `item`, or NIL
    fn find(&self, item: &AuctionItem) -> usize {
        let mut x = self.root;
        while x != NIL {
            let here = &self.nodes[x].item;
            if item == here {
                return x;
            }
            x = if item < here {
                self.nodes[x].left
            } else {
                self.nodes[x].right
            };
        }
        NIL
    }

    fn minimum(&self, mut x: usize) -> usize {
        while self.nodes[x].left != NIL {
            x = self.nodes[x].left;
        }
        x
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// List an item at a fixed-point price
    ///
    /// An item already listed is moved to the new price.
    pub fn insert_item(&mut self, item_id: u64, price: u64) {
        if let Some(old_price) = self.price_of(item_id) {
            if old_price == price {
                return;
            }
            log::debug!("re-pricing item {}: {} -> {}", item_id, old_price, price);
            let z = self.find(&AuctionItem::new(item_id, old_price));
            self.remove_node(z);
        }

        let item = AuctionItem::new(item_id, price);
        let z = self.nodes.insert(ItemNode::new(item));

        let mut parent = NIL;
        let mut x = self.root;
        while x != NIL {
            parent = x;
            x = if item < self.nodes[x].item {
                self.nodes[x].left
            } else {
                self.nodes[x].right
            };
        }

        self.nodes[z].parent = parent;
        if parent == NIL {
            self.root = z;
        } else if item < self.nodes[parent].item {
            self.nodes[parent].left = z;
        } else {
            self.nodes[parent].right = z;
        }

        self.insert_fixup(z);
        self.prices.insert(item_id, price);
    }

    fn insert_fixup(&mut self, mut z: usize) {
        while self.nodes[self.nodes[z].parent].is_red() {
            let p = self.nodes[z].parent;
            let g = self.nodes[p].parent;

            if p == self.nodes[g].left {
                let uncle = self.nodes[g].right;
                if self.nodes[uncle].is_red() {
                    self.nodes[p].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[g].color = Color::Red;
                    z = g;
                } else {
                    if z == self.nodes[p].right {
                        z = p;
                        self.rotate_left(z);
                    }
                    let p = self.nodes[z].parent;
                    let g = self.nodes[p].parent;
                    self.nodes[p].color = Color::Black;
                    self.nodes[g].color = Color::Red;
                    self.rotate_right(g);
                }
            } else {
                let uncle = self.nodes[g].left;
                if self.nodes[uncle].is_red() {
                    self.nodes[p].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[g].color = Color::Red;
                    z = g;
                } else {
                    if z == self.nodes[p].left {
                        z = p;
                        self.rotate_right(z);
                    }
                    let p = self.nodes[z].parent;
                    let g = self.nodes[p].parent;
                    self.nodes[p].color = Color::Black;
                    self.nodes[g].color = Color::Red;
                    self.rotate_left(g);
                }
            }
        }

        let root = self.root;
        self.nodes[root].color = Color::Black;
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Delist an item; returns `false` if it was not listed
    pub fn delete_item(&mut self, item_id: u64) -> bool {
        let Some(price) = self.price_of(item_id) else {
            return false;
        };

        let z = self.find(&AuctionItem::new(item_id, price));
        if z == NIL {
            log::warn!("item {} indexed at {} but missing from tree", item_id, price);
            return false;
        }

        self.remove_node(z);
        self.prices.remove(&item_id);
        true
    }

    /// Drop every item
    pub fn clear(&mut self) {
        self.nodes.clear();
        let nil = self.nodes.insert(ItemNode::sentinel());
        debug_assert_eq!(nil, NIL);
        self.root = NIL;
        self.prices.clear();
    }

    /// Unlink `z` from the tree and free a node.
    ///
    /// With two children, `z` takes its successor's item and the successor
    /// (which has no left child) is the node physically removed.
    fn remove_node(&mut self, z: usize) {
        let y = if self.nodes[z].left == NIL || self.nodes[z].right == NIL {
            z
        } else {
            let successor = self.minimum(self.nodes[z].right);
            self.nodes[z].item = self.nodes[successor].item;
            successor
        };

        let x = if self.nodes[y].left != NIL {
            self.nodes[y].left
        } else {
            self.nodes[y].right
        };

        // x may be NIL: its parent link is borrowed for the fixup walk.
        let y_parent = self.nodes[y].parent;
        self.nodes[x].parent = y_parent;
        if y_parent == NIL {
            self.root = x;
        } else if y == self.nodes[y_parent].left {
            self.nodes[y_parent].left = x;
        } else {
            self.nodes[y_parent].right = x;
        }

        let removed = self.nodes.remove(y);
        if removed.is_black() {
            self.delete_fixup(x);
        }

        self.nodes[NIL].parent = NIL;
    }

    fn delete_fixup(&mut self, mut x: usize) {
        while x != self.root && self.nodes[x].is_black() {
            let p = self.nodes[x].parent;

            if x == self.nodes[p].left {
                let mut w = self.nodes[p].right;
                if self.nodes[w].is_red() {
                    self.nodes[w].color = Color::Black;
                    self.nodes[p].color = Color::Red;
                    self.rotate_left(p);
                    w = self.nodes[self.nodes[x].parent].right;
                }

                let (wl, wr) = (self.nodes[w].left, self.nodes[w].right);
                if self.nodes[wl].is_black() && self.nodes[wr].is_black() {
                    self.nodes[w].color = Color::Red;
                    x = self.nodes[x].parent;
                } else {
                    if self.nodes[wr].is_black() {
                        self.nodes[wl].color = Color::Black;
                        self.nodes[w].color = Color::Red;
                        self.rotate_right(w);
                        w = self.nodes[self.nodes[x].parent].right;
                    }
                    let p = self.nodes[x].parent;
                    let wr = self.nodes[w].right;
                    self.nodes[w].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    self.nodes[wr].color = Color::Black;
                    self.rotate_left(p);
                    x = self.root;
                }
            } else {
                let mut w = self.nodes[p].left;
                if self.nodes[w].is_red() {
                    self.nodes[w].color = Color::Black;
                    self.nodes[p].color = Color::Red;
                    self.rotate_right(p);
                    w = self.nodes[self.nodes[x].parent].left;
                }

                let (wl, wr) = (self.nodes[w].left, self.nodes[w].right);
                if self.nodes[wl].is_black() && self.nodes[wr].is_black() {
                    self.nodes[w].color = Color::Red;
                    x = self.nodes[x].parent;
                } else {
                    if self.nodes[wl].is_black() {
                        self.nodes[wr].color = Color::Black;
                        self.nodes[w].color = Color::Red;
                        self.rotate_left(w);
                        w = self.nodes[self.nodes[x].parent].left;
                    }
                    let p = self.nodes[x].parent;
                    let wl = self.nodes[w].left;
                    self.nodes[w].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    self.nodes[wl].color = Color::Black;
                    self.rotate_right(p);
                    x = self.root;
                }
            }
        }

        self.nodes[x].color = Color::Black;
    }

    // ========================================================================
    // Rotations
    // ========================================================================

    /// Lift `x`'s right child into `x`'s position
    fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right;
        let y_left = self.nodes[y].left;

        self.nodes[x].right = y_left;
        if y_left != NIL {
            self.nodes[y_left].parent = x;
        }

        let x_parent = self.nodes[x].parent;
        self.nodes[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if x == self.nodes[x_parent].left {
            self.nodes[x_parent].left = y;
        } else {
            self.nodes[x_parent].right = y;
        }

        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    /// Lift `y`'s left child into `y`'s position
    fn rotate_right(&mut self, y: usize) {
        let x = self.nodes[y].left;
        let x_right = self.nodes[x].right;

        self.nodes[y].left = x_right;
        if x_right != NIL {
            self.nodes[x_right].parent = y;
        }

        let y_parent = self.nodes[y].parent;
        self.nodes[x].parent = y_parent;
        if y_parent == NIL {
            self.root = x;
        } else if y == self.nodes[y_parent].left {
            self.nodes[y_parent].left = x;
        } else {
            self.nodes[y_parent].right = x;
        }

        self.nodes[x].right = y;
        self.nodes[y].parent = x;
    }

    // ========================================================================
    // Fingerprint
    // ========================================================================

    /// SHA-256 over items in order; independent of tree shape
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut fp = Fingerprinter::new("auction-book");
        for item in self.items_in_order() {
            fp.write_u64(item.item_id);
            fp.write_u64(item.price);
        }
        fp.finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
