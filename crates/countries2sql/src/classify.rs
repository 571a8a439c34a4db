//! Insert-or-update decision per country.

use crate::reference::ReferenceTable;

/// What kind of statement a country gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Country is new: generate an INSERT
    Insert,
    /// Country already persisted under `id`: generate an UPDATE
    Update { id: String },
}

/// Classify a country by its alpha2 code against the reference table.
pub fn classify(alpha2: &str, reference: &ReferenceTable) -> Classification {
    match reference.get(alpha2) {
        Some(id) => Classification::Update { id: id.to_string() },
        None => Classification::Insert,
    }
}
