//! # countries2sql
//!
//! Generate SQL INSERT and UPDATE statements for a `country` table from a
//! countries YAML document.
//!
//! Countries already persisted in the target database (listed in a
//! reference CSV of `iso2,id` rows) get an UPDATE against their stored id;
//! every other country gets a fresh INSERT. Statements come out in document
//! order, all inserts before all updates.
//!
//! This is a meta-programming tool for trusted data files. Values are
//! substituted into the statement templates as quoted literals without any
//! escaping, so the generated SQL is not safe against adversarial input.
//! SQL injection is possible.
//!
//! ## Example
//!
//! ```rust,no_run
//! use countries2sql::Generator;
//!
//! # fn main() -> countries2sql::Result<()> {
//! let summary = Generator::new("countries.yaml", "existing_countries.csv")
//!     .with_output("countries.sql")
//!     .run()?;
//! println!("{} inserts, {} updates", summary.inserts, summary.updates);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod error;
pub mod generator;
pub mod loader;
pub mod reference;
pub mod render;
pub mod sink;
pub mod transform;

pub use classify::{classify, Classification};
pub use error::{GenerateError, Result};
pub use generator::{GenerationSummary, Generator};
pub use loader::{load_countries, CountryRecord};
pub use reference::ReferenceTable;
pub use render::{render_insert, render_update, sql_literal, StatementSet};
pub use sink::write_output;
pub use transform::{derive_fields, labelize, DerivedFields};
