//! Arcade Ledger - demo binary
//!
//! Drives each container through a short scripted session and prints
//! what comes back.

use arcade_ledger::digest::to_hex;
use arcade_ledger::types::price::{from_fixed_trimmed, to_fixed};
use arcade_ledger::{AuctionBook, Leaderboard, PlayerRegistry};

fn main() {
    println!("===========================================");
    println!("  Arcade Ledger");
    println!("===========================================");
    println!();

    println!("Player registry:");
    let mut registry = PlayerRegistry::new();
    for id in 0..=100u64 {
        if let Err(e) = registry.insert(id, format!("P{}", id)) {
            println!("  ERROR: {}", e);
            return;
        }
    }
    println!("  Players:     {}", registry.len());
    println!("  Capacity:    {}", registry.capacity());
    println!("  Load factor: {:.3}", registry.load_factor());
    println!("  search(42):  {:?}", registry.search(42));
    println!("  search(999): {:?}", registry.search(999));
    println!();

    println!("Leaderboard:");
    let mut board = Leaderboard::with_seed(42);
    for (id, score) in [(10, 100), (20, 100), (5, 100), (15, 100), (7, 250)] {
        board.add_score(id, score);
    }
    println!("  Top 3:       {:?}", board.top_n(3));
    board.remove_player(7);
    println!("  After removing 7: {:?}", board.top_n(10));
    println!("  Levels:      {}", board.level());
    println!();

    println!("Auction book:");
    let mut book = AuctionBook::new();
    for (id, price) in [(1, "100"), (2, "50"), (3, "150.75")] {
        match to_fixed(price) {
            Some(fixed) => book.insert_item(id, fixed),
            None => println!("  skipping item {}: bad price {:?}", id, price),
        }
    }
    for item in book.items_in_order() {
        println!("  item {:>3} @ {}", item.item_id, from_fixed_trimmed(item.price));
    }
    book.delete_item(2);
    match book.validate() {
        Ok(black_height) => println!("  Valid tree, black height {}", black_height),
        Err(e) => println!("  ERROR: {}", e),
    }
    println!("  Fingerprint: {}", to_hex(&book.fingerprint()));
}
