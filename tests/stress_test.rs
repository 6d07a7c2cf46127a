//! Stress tests for the arcade ledger containers.
//!
//! These tests verify:
//! 1. Random interleavings agree with std collection models
//! 2. Structural invariants hold after every mutation
//! 3. Seeded runs are reproducible
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use arcade_ledger::digest::to_hex;
use arcade_ledger::types::{AuctionItem, LeaderboardEntry};
use arcade_ledger::{AuctionBook, Leaderboard, PlayerRegistry};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Operations per randomized model run
const MODEL_OPS: usize = 20_000;

/// Id space; small enough that updates and deletes hit live keys often
const ID_SPACE: u64 = 2_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Run a seeded leaderboard workload and return its fingerprint.
fn run_leaderboard_sequence(seed: u64, ops: usize) -> [u8; 32] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Leaderboard::with_seed(seed);

    for _ in 0..ops {
        let id = rng.gen_range(0..ID_SPACE);
        if rng.gen_bool(0.7) {
            board.add_score(id, rng.gen_range(-1_000..=1_000));
        } else {
            board.remove_player(id);
        }
    }

    board.fingerprint()
}

// ============================================================================
// MODEL TESTS
// ============================================================================

/// Registry against a HashMap, including removals and growth.
#[test]
fn registry_matches_hashmap_model() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut registry = PlayerRegistry::new();
    let mut model: HashMap<u64, String> = HashMap::new();

    for step in 0..MODEL_OPS {
        let id = rng.gen_range(0..ID_SPACE * 10);
        match rng.gen_range(0..10) {
            0..=5 => {
                let name = format!("n{}-{}", id, step);
                registry.insert(id, name.clone()).unwrap();
                model.insert(id, name);
            }
            6..=7 => {
                assert_eq!(registry.remove(id), model.remove(&id));
            }
            _ => {
                assert_eq!(registry.search(id), model.get(&id).map(String::as_str));
            }
        }

        assert!(registry.load_factor() <= registry.config().max_load_factor);
    }

    assert_eq!(registry.len(), model.len());
    for (id, name) in &model {
        assert_eq!(registry.search(*id), Some(name.as_str()));
    }
}

/// Leaderboard against a sorted set of entries.
#[test]
fn leaderboard_matches_sorted_model() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut board = Leaderboard::with_seed(7);
    let mut scores: HashMap<u64, i64> = HashMap::new();
    let mut ranked: BTreeSet<LeaderboardEntry> = BTreeSet::new();

    for step in 0..MODEL_OPS {
        let id = rng.gen_range(0..ID_SPACE);
        if rng.gen_bool(0.6) {
            let score = rng.gen_range(0..200);
            if let Some(old) = scores.insert(id, score) {
                ranked.remove(&LeaderboardEntry::new(id, old));
            }
            ranked.insert(LeaderboardEntry::new(id, score));
            board.add_score(id, score);
        } else {
            let was_present = scores.remove(&id).map(|old| {
                ranked.remove(&LeaderboardEntry::new(id, old));
            });
            assert_eq!(board.remove_player(id), was_present.is_some());
        }

        if step % 500 == 0 {
            assert!(board.is_well_formed(), "malformed at step {}", step);
            let k = rng.gen_range(0..50);
            let expected: Vec<u64> = ranked.iter().take(k).map(|e| e.player_id).collect();
            assert_eq!(board.top_n(k), expected);
        }
    }

    let expected: Vec<u64> = ranked.iter().map(|e| e.player_id).collect();
    assert_eq!(board.top_n(usize::MAX), expected);
}

/// Auction book against a sorted set, auditing after every operation.
#[test]
fn auction_matches_sorted_model() {
    let mut rng = ChaCha8Rng::seed_from_u64(1337);
    let mut book = AuctionBook::new();
    let mut prices: HashMap<u64, u64> = HashMap::new();
    let mut ordered: BTreeSet<AuctionItem> = BTreeSet::new();

    for step in 0..MODEL_OPS {
        let id = rng.gen_range(0..ID_SPACE);
        if rng.gen_bool(0.55) {
            // Narrow price band forces many (price, id) ties on price.
            let price = rng.gen_range(0..64) * 1_000_000;
            if let Some(old) = prices.insert(id, price) {
                ordered.remove(&AuctionItem::new(id, old));
            }
            ordered.insert(AuctionItem::new(id, price));
            book.insert_item(id, price);
        } else {
            let was_present = prices.remove(&id).map(|old| {
                ordered.remove(&AuctionItem::new(id, old));
            });
            assert_eq!(book.delete_item(id), was_present.is_some());
        }

        if let Err(violation) = book.validate() {
            panic!("step {}: {}", step, violation);
        }
    }

    let expected: Vec<AuctionItem> = ordered.into_iter().collect();
    assert_eq!(book.items_in_order(), expected);
}

// ============================================================================
// DETERMINISM
// ============================================================================

/// Same seed, same operations: identical ranking and tower shape.
#[test]
fn verify_leaderboard_determinism() {
    const OPS: usize = 10_000;
    const SEED: u64 = 12345;

    let fp1 = run_leaderboard_sequence(SEED, OPS);
    let fp2 = run_leaderboard_sequence(SEED, OPS);
    println!("  Run 1 fingerprint: {}", to_hex(&fp1));
    println!("  Run 2 fingerprint: {}", to_hex(&fp2));
    assert_eq!(fp1, fp2, "fingerprints must match for the same seed");

    let fp3 = run_leaderboard_sequence(SEED + 1, OPS);
    assert_ne!(fp1, fp3, "different seeds should produce different boards");
}

// ============================================================================
// LOAD
// ============================================================================

/// 100k leaderboard inserts; reports throughput, asserts shape only.
#[test]
fn stress_leaderboard_inserts() {
    const COUNT: u64 = 100_000;
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut board = Leaderboard::with_seed(42);

    let start = Instant::now();
    for id in 0..COUNT {
        board.add_score(id, rng.gen_range(0..10_000));
    }
    let elapsed = start.elapsed();

    println!(
        "  Inserted {} players in {:.2?} ({} levels)",
        COUNT,
        elapsed,
        board.level()
    );
    assert_eq!(board.len(), COUNT as usize);
    assert!(board.level() <= 32);
    assert!(board.is_well_formed());
}

/// Repeated create/fill/drop cycles release everything cleanly.
#[test]
fn stress_repeated_lifecycles() {
    for cycle in 0..100u64 {
        let mut board = Leaderboard::with_seed(cycle);
        for j in 0..1_000u64 {
            board.add_score(j, (j * 10) as i64);
        }
        for j in 0..500u64 {
            board.remove_player(j);
        }
        assert_eq!(board.len(), 500);

        let mut book = AuctionBook::new();
        for j in 0..200u64 {
            book.insert_item(j, (j * 31) % 97);
        }
        for j in (0..200u64).step_by(2) {
            book.delete_item(j);
        }
        assert_eq!(book.len(), 100);
    }
}
