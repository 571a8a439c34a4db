use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for report conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input XML is malformed
    #[error("XML parse error in {path:?} at byte {position}: {message}")]
    Xml {
        path: PathBuf,
        position: u64,
        message: String,
    },

    /// CSV output could not be produced
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A file could not be read or created
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Create an XML error at a byte position in the input
    pub fn xml(path: impl AsRef<Path>, position: u64, message: impl Into<String>) -> Self {
        ConvertError::Xml {
            path: path.as_ref().to_path_buf(),
            position,
            message: message.into(),
        }
    }

    /// Create an IO error tied to the file it came from
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit code for this error class
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::Xml { .. } => 1,
            ConvertError::Csv(_) => 3,
            ConvertError::Io { .. } => 7,
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

/// Result type alias for report conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
