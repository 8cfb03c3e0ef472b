//! Table Source Port - Loading table text from storage.
//!
//! The file-loading collaborator lives outside the core: the orchestrator only
//! ever sees text. Adapters (like `LocalFileSource`) decide where that text
//! comes from.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for loading raw table text.
///
/// # Contract
///
/// Implementations must:
/// - Return the text unmodified (BOM and line endings are the parser's job)
/// - Report every location they tried when nothing was found
pub trait TableSource: Send + Sync {
    /// Load the text stored at `location`.
    ///
    /// # Errors
    ///
    /// - `SourceError::NotFound` if no candidate location exists
    /// - `SourceError::Io` if a candidate exists but cannot be read
    fn load(&self, location: &str) -> Result<String, SourceError>;
}

/// Errors from table sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No candidate path exists.
    #[error("Table source not found: {location} (tried {})", display_paths(.tried))]
    NotFound {
        location: String,
        tried: Vec<PathBuf>,
    },

    /// A candidate exists but could not be read. The wrapped error names the path.
    #[error("Failed to read table text: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<SourceError> for DomainError {
    fn from(err: SourceError) -> Self {
        let (code, key, value) = match &err {
            SourceError::NotFound { location, .. } => {
                (ErrorCode::SourceNotFound, "location", location.clone())
            }
            SourceError::Io { path, .. } => (
                ErrorCode::SourceUnreadable,
                "path",
                path.display().to_string(),
            ),
        };
        DomainError::new(code, err.to_string()).with_detail(key, value)
    }
}
