//! Output writing.

use std::path::Path;
use tracing::info;

use crate::error::{GenerateError, Result};

/// Write the joined SQL to a file, or print it to standard output.
///
/// File output carries the text exactly as joined, without a trailing
/// newline; standard output gains the terminal newline `println!` adds.
pub fn write_output(sql: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, sql).map_err(|e| GenerateError::io(path, e))?;
            info!("Wrote SQL to {:?}", path);
        }
        None => println!("{sql}"),
    }
    Ok(())
}
