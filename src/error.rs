//! Error types for the arcade ledger.
//!
//! The containers keep their contracts total: a missing id is an `Option`
//! or a `false`, never an error. The enums here cover the few conditions
//! that a caller can actually provoke:
//!
//! - [`RegistryError`]: bad configuration, or a full table under
//!   [`GrowthPolicy::Fixed`](crate::registry::GrowthPolicy::Fixed)
//! - [`InvariantViolation`]: reported by the red-black audit
//! - [`ToolkitError`]: malformed input to the stateless solvers

use thiserror::Error;

/// Errors surfaced by [`PlayerRegistry`](crate::registry::PlayerRegistry).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// No free slot exists and the growth policy forbids resizing.
    #[error("player table is full (capacity {capacity})")]
    TableFull { capacity: usize },

    /// Load factor outside (0, 1].
    #[error("invalid max load factor {0}: must be in (0, 1]")]
    InvalidLoadFactor(f64),
}

/// A broken red-black or ordering invariant found by
/// [`AuctionBook::validate`](crate::auction::AuctionBook::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root item {item_id} is red")]
    RedRoot { item_id: u64 },

    #[error("sentinel is red")]
    RedSentinel,

    #[error("red item {item_id} has a red child")]
    RedRedEdge { item_id: u64 },

    #[error("black height differs under item {item_id}: left {left}, right {right}")]
    BlackHeightMismatch { item_id: u64, left: usize, right: usize },

    #[error("item {item_id} is out of order")]
    OutOfOrder { item_id: u64 },

    #[error("item {item_id} has a stale parent link")]
    BrokenParentLink { item_id: u64 },

    #[error("tree holds {found} items but the index holds {indexed}")]
    CountMismatch { found: usize, indexed: usize },
}

/// Errors from the stateless solvers in [`toolkit`](crate::toolkit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    #[error("vertex {vertex} out of range for graph of {n} vertices")]
    VertexOutOfRange { vertex: usize, n: usize },

    #[error("task {0:?} is not an ASCII letter")]
    InvalidTask(char),

    #[error("road cost overflows u64")]
    CostOverflow,

    /// A coin total or a carried value does not fit in u64.
    #[error("value total overflows u64")]
    ValueOverflow,

    /// The DP table implied by the input exceeds the solver's limit.
    #[error("DP table of {cells} cells exceeds limit of {limit}")]
    TableTooLarge { cells: u64, limit: usize },
}
