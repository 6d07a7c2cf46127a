//! Player identity record held by the registry.

/// A player id and display name.
///
/// ```
/// use arcade_ledger::types::PlayerRecord;
///
/// let record = PlayerRecord::new(7, "Nova");
/// assert_eq!(record.id, 7);
/// assert_eq!(record.name, "Nova");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlayerRecord {
    /// Unique player identifier
    pub id: u64,

    /// Display name, overwritten on re-insert
    pub name: String,
}

impl PlayerRecord {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
