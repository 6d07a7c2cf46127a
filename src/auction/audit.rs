//! Structural audit of the auction tree.
//!
//! Walks the whole tree once and reports the first broken invariant:
//!
//! 1. The sentinel is black
//! 2. The root is black and has the sentinel as parent
//! 3. Every child's parent link points back at its parent
//! 4. No red node has a red child
//! 5. Both subtrees of every node carry the same black height
//! 6. In-order keys are strictly ascending
//! 7. The tree, the arena and the price index agree on the item count

use crate::auction::{AuctionBook, NIL};
use crate::error::InvariantViolation;

impl AuctionBook {
    /// Check every red-black invariant; returns the root's black height
    /// (black nodes from root to sentinel, sentinel counted, root not).
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        if self.nodes[NIL].is_red() {
            return Err(InvariantViolation::RedSentinel);
        }

        if self.root == NIL {
            return self.check_count(0).map(|()| 0);
        }

        let root = &self.nodes[self.root];
        if root.is_red() {
            return Err(InvariantViolation::RedRoot { item_id: root.item_id() });
        }
        if root.parent != NIL {
            return Err(InvariantViolation::BrokenParentLink { item_id: root.item_id() });
        }

        let black_height = self.check_subtrees()?;
        self.check_order()?;
        Ok(black_height)
    }

    /// Post-order walk computing black heights bottom-up
    fn check_subtrees(&self) -> Result<usize, InvariantViolation> {
        // (node, children already pushed)
        let mut stack = vec![(self.root, false)];
        // Black height below each finished node, by slab key
        let mut below = std::collections::HashMap::new();
        below.insert(NIL, 0usize);
        let mut visited = 0usize;

        while let Some((x, expanded)) = stack.pop() {
            let node = &self.nodes[x];

            if !expanded {
                for child in [node.left, node.right] {
                    if child != NIL && self.nodes[child].parent != x {
                        return Err(InvariantViolation::BrokenParentLink {
                            item_id: self.nodes[child].item_id(),
                        });
                    }
                }
                stack.push((x, true));
                for child in [node.left, node.right] {
                    if child != NIL {
                        stack.push((child, false));
                    }
                }
                continue;
            }

            visited += 1;
            if node.is_red()
                && (self.nodes[node.left].is_red() || self.nodes[node.right].is_red())
            {
                return Err(InvariantViolation::RedRedEdge { item_id: node.item_id() });
            }

            let side = |child: usize| {
                let height = below.get(&child).copied().unwrap_or(0);
                height + usize::from(self.nodes[child].is_black())
            };
            let (left, right) = (side(node.left), side(node.right));
            if left != right {
                return Err(InvariantViolation::BlackHeightMismatch {
                    item_id: node.item_id(),
                    left,
                    right,
                });
            }
            below.insert(x, left);
        }

        self.check_count(visited)?;
        Ok(below.get(&self.root).copied().unwrap_or(0))
    }

    fn check_order(&self) -> Result<(), InvariantViolation> {
        let items = self.items_in_order();
        for pair in items.windows(2) {
            if pair[0] >= pair[1] {
                return Err(InvariantViolation::OutOfOrder { item_id: pair[1].item_id });
            }
        }
        for item in &items {
            if self.prices.get(&item.item_id) != Some(&item.price) {
                return Err(InvariantViolation::OutOfOrder { item_id: item.item_id });
            }
        }
        Ok(())
    }

    fn check_count(&self, found: usize) -> Result<(), InvariantViolation> {
        let indexed = self.prices.len();
        // The arena also holds the sentinel.
        if found != indexed || self.nodes.len() != found + 1 {
            return Err(InvariantViolation::CountMismatch { found, indexed });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::auction::{AuctionBook, Color, NIL};
    use crate::error::InvariantViolation;

    fn sample() -> AuctionBook {
        let mut book = AuctionBook::new();
        for (id, price) in [(1, 40), (2, 20), (3, 60), (4, 10), (5, 30)] {
            book.insert_item(id, price);
        }
        book
    }

    #[test]
    fn test_valid_tree_passes() {
        assert_eq!(sample().validate(), Ok(2));
    }

    #[test]
    fn test_detects_red_root() {
        let mut book = sample();
        let root = book.root;
        book.nodes[root].color = Color::Red;
        assert!(matches!(book.validate(), Err(InvariantViolation::RedRoot { .. })));
    }

    #[test]
    fn test_detects_red_sentinel() {
        let mut book = sample();
        book.nodes[NIL].color = Color::Red;
        assert_eq!(book.validate(), Err(InvariantViolation::RedSentinel));
    }

    #[test]
    fn test_detects_black_height_mismatch() {
        let mut book = sample();
        // Item 3 (price 60) is a black leaf on the right; repainting it
        // shortens the right side.
        let key = book
            .nodes
            .iter()
            .find(|(k, node)| *k != NIL && node.item_id() == 3)
            .map(|(k, _)| k)
            .unwrap();
        book.nodes[key].color = Color::Red;
        assert!(matches!(
            book.validate(),
            Err(InvariantViolation::BlackHeightMismatch { .. })
        ));
    }

    #[test]
    fn test_detects_out_of_order() {
        let mut book = sample();
        let root = book.root;
        book.nodes[root].item.price = 1_000;
        assert!(matches!(book.validate(), Err(InvariantViolation::OutOfOrder { .. })));
    }

    #[test]
    fn test_detects_count_mismatch() {
        let mut book = sample();
        book.prices.insert(99, 99);
        assert!(matches!(book.validate(), Err(InvariantViolation::CountMismatch { .. })));
    }
}
