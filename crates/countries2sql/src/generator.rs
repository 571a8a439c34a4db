//! Generation orchestration.
//!
//! Wires loading, reference lookup, transformation, classification,
//! rendering and output into one run.

use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::classify::{classify, Classification};
use crate::error::Result;
use crate::loader::load_countries;
use crate::reference::ReferenceTable;
use crate::render::{render_insert, render_update, StatementSet};
use crate::sink::write_output;
use crate::transform::derive_fields;

/// Rendering of `created_at`/`updated_at`, seconds precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builder for one generation run.
pub struct Generator {
    input: PathBuf,
    reference_path: PathBuf,
    output: Option<PathBuf>,
}

/// Counts reported by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Countries read from the input document
    pub countries: usize,
    /// INSERT statements generated
    pub inserts: usize,
    /// UPDATE statements generated
    pub updates: usize,
}

impl Generator {
    /// Create a generator reading countries from `input` and the table of
    /// already persisted countries from `reference_path`.
    pub fn new(input: impl Into<PathBuf>, reference_path: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            reference_path: reference_path.into(),
            output: None,
        }
    }

    /// Write the generated SQL to a file instead of standard output.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Run the full pipeline and report statement counts.
    pub fn run(&self) -> Result<GenerationSummary> {
        let countries = load_countries(&self.input)?;
        info!("Loaded {} countries from {:?}", countries.len(), self.input);

        let reference = ReferenceTable::load(&self.reference_path)?;
        if !reference.is_empty() {
            info!(
                "Loaded {} existing countries from {:?}",
                reference.len(),
                self.reference_path
            );
        }

        // One timestamp per run, shared by every statement.
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let mut statements = StatementSet::default();
        for (alpha2, record) in &countries {
            // Derived fields are computed for every record, update or not,
            // so required-field failures do not depend on the reference
            // table contents.
            let derived = derive_fields(alpha2, record)?;
            match classify(alpha2, &reference) {
                Classification::Update { id } => {
                    debug!("{}: update (id={})", alpha2, id);
                    statements.push_update(render_update(record, &now, &id));
                }
                Classification::Insert => {
                    debug!("{}: insert", alpha2);
                    statements.push_insert(render_insert(record, &derived, &now));
                }
            }
        }

        write_output(&statements.to_sql(), self.output.as_deref())?;

        let summary = GenerationSummary {
            countries: countries.len(),
            inserts: statements.insert_count(),
            updates: statements.update_count(),
        };
        info!(
            "Generated {} statements ({} inserts, {} updates)",
            summary.inserts + summary.updates,
            summary.inserts,
            summary.updates
        );
        Ok(summary)
    }
}
