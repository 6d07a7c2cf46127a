//! Double-hashing player table.
//!
//! ## Probe Sequence
//!
//! For a table of prime capacity `m` and the largest prime `P < m`:
//!
//! ```text
//! h1(id) = id mod m
//! h2(id) = P - (id mod P)        (never 0)
//! slot_i = (h1(id) + i * h2(id)) mod m,   i = 0, 1, 2, ...
//! ```
//!
//! Because `m` is prime and `1 <= h2 < m`, the sequence visits every slot
//! exactly once before repeating.
//!
//! ## Growth
//!
//! Under [`GrowthPolicy::Grow`] the table doubles (to the next prime) before
//! an insert would push the load factor past the configured maximum. The
//! rebuild re-places every live record and drops tombstones.
//!
//! Tombstones count toward the threshold too. If live records alone would
//! still fit, the table is rebuilt at the same size instead, so heavy
//! remove/insert churn cannot leave a table with no `Empty` slot to end a
//! probe.
//!
//! ## Example
//!
//! ```
//! use arcade_ledger::registry::{PlayerRegistry, InsertOutcome};
//!
//! let mut registry = PlayerRegistry::new();
//! assert_eq!(registry.insert(1, "Alice").unwrap(), InsertOutcome::Inserted);
//! assert_eq!(registry.insert(1, "Bob").unwrap(), InsertOutcome::Updated);
//! assert_eq!(registry.search(1), Some("Bob"));
//! assert_eq!(registry.search(2), None);
//! ```

use crate::digest::Fingerprinter;
use crate::error::RegistryError;
use crate::registry::prime::{next_prime, prev_prime};
use crate::registry::Slot;
use crate::types::PlayerRecord;

/// Capacity used by [`PlayerRegistry::new`]
pub const DEFAULT_CAPACITY: usize = 101;

/// Load factor threshold used by [`PlayerRegistry::new`]
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7;

/// Smallest capacity for which a secondary stride prime exists
const MIN_CAPACITY: usize = 3;

/// What to do when the table runs out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Resize before the load factor is exceeded; inserts never fail.
    #[default]
    Grow,
    /// Never resize; fail with [`RegistryError::TableFull`] once no slot
    /// is left. The load factor is ignored.
    Fixed,
}

/// Construction options for [`PlayerRegistry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryConfig {
    /// Requested slot count, rounded up to a prime (minimum 3)
    pub initial_capacity: usize,

    /// Maximum occupied / capacity ratio, in (0, 1]
    pub max_load_factor: f64,

    pub growth: GrowthPolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth: GrowthPolicy::Grow,
        }
    }
}

impl RegistryConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_max_load_factor(mut self, load_factor: f64) -> Self {
        self.max_load_factor = load_factor;
        self
    }

    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let lf = self.max_load_factor;
        if lf.is_nan() || lf <= 0.0 || lf > 1.0 {
            return Err(RegistryError::InvalidLoadFactor(lf));
        }
        Ok(())
    }
}

/// Whether an insert created a record or overwrote an existing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Updated,
}

/// Open-addressing hash table of players keyed by id.
#[derive(Debug, Clone)]
pub struct PlayerRegistry {
    /// Slot array, length always prime
    slots: Vec<Slot>,

    /// Largest prime strictly below the capacity (h2 modulus)
    stride_prime: usize,

    /// Number of occupied slots
    len: usize,

    /// Number of tombstones
    tombstones: usize,

    config: RegistryConfig,
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRegistry {
    /// Create an empty registry with 101 slots, growing at load 0.7
    pub fn new() -> Self {
        Self::build(RegistryConfig::default())
    }

    /// Create an empty registry with at least `capacity` slots
    ///
    /// ```
    /// use arcade_ledger::registry::PlayerRegistry;
    ///
    /// let registry = PlayerRegistry::with_capacity(200);
    /// assert_eq!(registry.capacity(), 211);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::build(RegistryConfig::default().with_initial_capacity(capacity))
    }

    /// Create an empty registry from explicit options
    pub fn with_config(config: RegistryConfig) -> Result<Self, RegistryError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RegistryConfig) -> Self {
        let capacity = next_prime(config.initial_capacity.max(MIN_CAPACITY));
        Self {
            slots: vec![Slot::Empty; capacity],
            stride_prime: stride_prime_for(capacity),
            len: 0,
            tombstones: 0,
            config,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Occupied slots divided by capacity
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    #[inline]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ========================================================================
    // Hashing
    // ========================================================================

    #[inline]
    fn h1(&self, id: u64) -> usize {
        (id % self.capacity() as u64) as usize
    }

    #[inline]
    fn h2(&self, id: u64) -> usize {
        let p = self.stride_prime as u64;
        let stride = p - (id % p);
        stride.max(1) as usize
    }

    /// Slot indices in probe order, one full cycle
    fn probe(&self, id: u64) -> impl Iterator<Item = usize> {
        let capacity = self.capacity();
        let step = self.h2(id);
        (0..capacity).scan(self.h1(id), move |index, _| {
            let current = *index;
            *index = (*index + step) % capacity;
            Some(current)
        })
    }

    fn find_index(&self, id: u64) -> Option<usize> {
        for index in self.probe(id) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(record) if record.id == id => return Some(index),
                _ => {}
            }
        }
        None
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Name stored for `id`, or `None` if absent
    pub fn search(&self, id: u64) -> Option<&str> {
        self.get(id).map(|record| record.name.as_str())
    }

    pub fn get(&self, id: u64) -> Option<&PlayerRecord> {
        let index = self.find_index(id)?;
        self.slots[index].record_for(id)
    }

    #[inline]
    pub fn contains(&self, id: u64) -> bool {
        self.find_index(id).is_some()
    }

    /// Live records in slot order
    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(record) => Some(record),
            _ => None,
        })
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a player, or overwrite the name of an existing one
    ///
    /// Under [`GrowthPolicy::Grow`] this never fails.
    pub fn insert(
        &mut self,
        id: u64,
        name: impl Into<String>,
    ) -> Result<InsertOutcome, RegistryError> {
        let name = name.into();

        if let Some(index) = self.find_index(id) {
            if let Slot::Occupied(record) = &mut self.slots[index] {
                record.name = name;
            }
            return Ok(InsertOutcome::Updated);
        }

        self.make_room();

        let record = match self.place(PlayerRecord::new(id, name)) {
            Ok(()) => return Ok(InsertOutcome::Inserted),
            Err(record) => record,
        };

        match self.config.growth {
            GrowthPolicy::Grow => {
                // Probe cycle exhausted despite the load check: grow once and retry.
                self.grow();
                self.place(record)
                    .map(|()| InsertOutcome::Inserted)
                    .map_err(|_| RegistryError::TableFull {
                        capacity: self.capacity(),
                    })
            }
            GrowthPolicy::Fixed => Err(RegistryError::TableFull {
                capacity: self.capacity(),
            }),
        }
    }

    /// Remove a player, leaving a tombstone; returns the old name
    pub fn remove(&mut self, id: u64) -> Option<String> {
        let index = self.find_index(id)?;
        let record = self.slots[index].bury()?;
        self.len -= 1;
        self.tombstones += 1;
        Some(record.name)
    }

    /// Drop every record, keeping the current capacity
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.len = 0;
        self.tombstones = 0;
    }

    /// Put a record whose id is known to be absent into the first free
    /// slot of its probe sequence, preferring the earliest tombstone.
    ///
    /// Hands the record back if the whole cycle is occupied.
    fn place(&mut self, record: PlayerRecord) -> Result<(), PlayerRecord> {
        let mut first_tombstone = None;
        let mut empty = None;

        for index in self.probe(record.id) {
            match &self.slots[index] {
                Slot::Empty => {
                    empty = Some(index);
                    break;
                }
                Slot::Deleted if first_tombstone.is_none() => first_tombstone = Some(index),
                _ => {}
            }
        }

        let target = match (first_tombstone, empty) {
            (Some(index), _) => {
                log::debug!("player {} reuses tombstone at slot {}", record.id, index);
                self.tombstones -= 1;
                index
            }
            (None, Some(index)) => index,
            (None, None) => return Err(record),
        };

        self.slots[target] = Slot::Occupied(record);
        self.len += 1;
        Ok(())
    }

    /// Rebuild before an insert would push live records plus tombstones
    /// past the load threshold.
    ///
    /// Tombstones lengthen every miss, so they count toward the load. When
    /// live records alone still fit, the table is rebuilt at its current
    /// size to clear them; otherwise it grows.
    fn make_room(&mut self) {
        if !self.would_exceed_load(self.len + self.tombstones) {
            return;
        }
        match self.config.growth {
            GrowthPolicy::Grow => {
                if self.would_exceed_load(self.len) {
                    while self.would_exceed_load(self.len) {
                        self.grow();
                    }
                } else {
                    self.rehash(self.capacity());
                }
            }
            GrowthPolicy::Fixed if self.tombstones > 0 => self.rehash(self.capacity()),
            GrowthPolicy::Fixed => {}
        }
    }

    fn would_exceed_load(&self, used: usize) -> bool {
        (used + 1) as f64 > self.config.max_load_factor * self.capacity() as f64
    }

    fn grow(&mut self) {
        let capacity = next_prime(self.capacity() * 2);
        self.rehash(capacity);
    }

    fn rehash(&mut self, capacity: usize) {
        let old_capacity = self.capacity();
        let old = std::mem::replace(&mut self.slots, vec![Slot::Empty; capacity]);
        self.stride_prime = stride_prime_for(capacity);
        self.len = 0;
        self.tombstones = 0;

        for slot in old {
            if let Slot::Occupied(record) = slot {
                let placed = self.place(record);
                debug_assert!(placed.is_ok(), "rehash target has fewer slots than records");
            }
        }

        log::debug!(
            "player table rebuilt {} -> {} slots ({} records)",
            old_capacity,
            capacity,
            self.len
        );
    }

    // ========================================================================
    // Fingerprint
    // ========================================================================

    /// SHA-256 over live records sorted by id, independent of slot layout
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut records: Vec<&PlayerRecord> = self.iter().collect();
        records.sort_by_key(|record| record.id);

        let mut fp = Fingerprinter::new("player-registry");
        for record in records {
            fp.write_u64(record.id);
            fp.write_bytes(record.name.as_bytes());
        }
        fp.finish()
    }
}

fn stride_prime_for(capacity: usize) -> usize {
    prev_prime(capacity).unwrap_or(1)
}

// ============================================================================
// Unit Tests
// ============================================================================
