use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for SQL generation operations
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Input document is not valid YAML or not a mapping of country records
    #[error("Failed to parse {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A country record lacks a field the generator needs
    #[error("Country '{country}' is missing required field '{field}'")]
    MissingField { country: String, field: String },

    /// The reference CSV exists but could not be read as iso2/id rows
    #[error("Invalid reference file {path:?}: {source}")]
    ReferenceCsv { path: PathBuf, source: csv::Error },

    /// Localized name payload could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file could not be read or written
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Create a YAML error tied to the document it came from
    pub fn yaml(path: impl AsRef<Path>, source: serde_yaml::Error) -> Self {
        GenerateError::Yaml {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a missing-field error for a country record
    pub fn missing_field(country: impl Into<String>, field: impl Into<String>) -> Self {
        GenerateError::MissingField {
            country: country.into(),
            field: field.into(),
        }
    }

    /// Create a reference CSV error tied to the file it came from
    pub fn reference_csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        GenerateError::ReferenceCsv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an IO error tied to the file it came from
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit code for this error class
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::Yaml { .. } | GenerateError::Json(_) => 1,
            GenerateError::MissingField { .. } => 2,
            GenerateError::ReferenceCsv { .. } => 3,
            GenerateError::Io { .. } => 7,
        }
    }

    /// Format error with full source chain for display
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}", self);
        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = std::error::Error::source(err);
            depth += 1;
        }
        output
    }
}

/// Result type alias for SQL generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;
