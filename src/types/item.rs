//! Auction item key.
//!
//! Items order by `(price, id)` ascending. Since ids are unique inside a
//! book, no two live items compare equal.

use std::cmp::Ordering;

use crate::types::price::from_fixed_trimmed;

/// An item id and its fixed-point price (scaled by 10^8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AuctionItem {
    pub item_id: u64,
    pub price: u64,
}

impl AuctionItem {
    #[inline]
    pub fn new(item_id: u64, price: u64) -> Self {
        Self { item_id, price }
    }

    /// Human-readable price, trailing zeros trimmed
    pub fn display_price(&self) -> String {
        from_fixed_trimmed(self.price)
    }
}

impl Ord for AuctionItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.price
            .cmp(&other.price)
            .then_with(|| self.item_id.cmp(&other.item_id))
    }
}

impl PartialOrd for AuctionItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_then_id() {
        let cheap = AuctionItem::new(9, 100);
        let pricey = AuctionItem::new(1, 200);
        assert!(cheap < pricey);

        let a = AuctionItem::new(1, 500);
        let b = AuctionItem::new(2, 500);
        assert!(a < b);
    }

    #[test]
    fn test_display_price() {
        let item = AuctionItem::new(1, 150_000_000);
        assert_eq!(item.display_price(), "1.5");
    }
}
