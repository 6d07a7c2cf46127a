//! Stateless solvers used alongside the containers.
//!
//! None of these touch the registry, leaderboard or auction book; each takes
//! plain slices and returns a single value.
//!
//! ## Components
//!
//! - [`inventory`]: loot split (subset sum), carry value (0/1 knapsack),
//!   chat decoding count
//! - [`navigator`]: reachability, dual-currency MST, all-pairs distance sum
//! - [`scheduler`]: cooldown-aware task intervals

pub mod inventory;
pub mod navigator;
pub mod scheduler;

pub use inventory::{count_string_possibilities, maximize_carry_value, optimize_loot_split};
pub use navigator::{min_bribe_cost, path_exists, sum_min_distances_binary, Road, WeightedRoad};
pub use scheduler::min_intervals;
