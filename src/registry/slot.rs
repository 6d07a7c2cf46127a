//! Slot states for the open-addressing table.

use crate::types::PlayerRecord;

/// One cell of the slot array.
///
/// `Deleted` is a tombstone: the cell is free for reuse, but lookups must
/// probe past it because other keys may have been placed beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(PlayerRecord),
    Deleted,
}

impl Slot {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Deleted)
    }

    /// The record if the slot is occupied by `id`
    #[inline]
    pub fn record_for(&self, id: u64) -> Option<&PlayerRecord> {
        match self {
            Slot::Occupied(record) if record.id == id => Some(record),
            _ => None,
        }
    }

    /// Take the record out, leaving a tombstone behind
    pub fn bury(&mut self) -> Option<PlayerRecord> {
        match std::mem::replace(self, Slot::Deleted) {
            Slot::Occupied(record) => Some(record),
            other => {
                *self = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_for_matches_id_only() {
        let slot = Slot::Occupied(PlayerRecord::new(3, "Ana"));
        assert_eq!(slot.record_for(3).map(|r| r.name.as_str()), Some("Ana"));
        assert!(slot.record_for(4).is_none());
        assert!(Slot::Deleted.record_for(3).is_none());
    }

    #[test]
    fn test_bury_leaves_tombstone() {
        let mut slot = Slot::Occupied(PlayerRecord::new(3, "Ana"));
        let record = slot.bury().unwrap();
        assert_eq!(record.id, 3);
        assert!(slot.is_tombstone());

        let mut empty = Slot::Empty;
        assert!(empty.bury().is_none());
        assert!(empty.is_empty());
    }
}
