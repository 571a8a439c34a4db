//! Reference table of countries already persisted in the target database.
//!
//! The table is read from a CSV file with an `iso2` and an `id` column.
//! Countries found here get an UPDATE statement against the stored id
//! instead of a fresh INSERT.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::error::{GenerateError, Result};

/// Map from trimmed alpha2 code to the opaque database identifier.
///
/// The identifier is kept as text and substituted into SQL verbatim; it is
/// never parsed as a number.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    entries: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ReferenceRow {
    iso2: String,
    id: String,
}

impl ReferenceTable {
    /// Load the reference CSV. A missing file yields an empty table:
    /// without it every country is treated as new.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No reference file at {:?}, all countries are new", path);
            return Ok(Self::default());
        }

        let file = File::open(path).map_err(|e| GenerateError::io(path, e))?;
        let mut reader = csv::Reader::from_reader(file);
        let mut entries = HashMap::new();
        for row in reader.deserialize::<ReferenceRow>() {
            let row = row.map_err(|e| GenerateError::reference_csv(path, e))?;
            // Codes are trimmed; ids are taken as-is. Last write wins.
            entries.insert(row.iso2.trim().to_string(), row.id);
        }

        Ok(Self { entries })
    }

    /// Identifier stored for an alpha2 code, if any.
    pub fn get(&self, alpha2: &str) -> Option<&str> {
        self.entries.get(alpha2).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
