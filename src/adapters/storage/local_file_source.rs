//! Local Filesystem Source Adapter - Implementation of TableSource.
//!
//! Resolves a table location against the working directory first and then
//! against a list of fallback base directories.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::{SourceError, TableSource};

/// Local filesystem source for table text.
///
/// # Resolution Order
///
/// ```text
/// 1. {location}                 (as given, relative to the working directory)
/// 2. {fallback_dirs[0]}/{location}
/// 3. {fallback_dirs[1]}/{location}
/// ...
/// ```
///
/// Absolute locations are only tried as given.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSource {
    fallback_dirs: Vec<PathBuf>,
}

impl LocalFileSource {
    /// Creates a source that only resolves locations as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source with fallback base directories, tried in order.
    pub fn with_fallback_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            fallback_dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds the directory holding the running executable, and its parent,
    /// as the last fallbacks.
    pub fn with_executable_dirs(mut self) -> Self {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                self.fallback_dirs.push(dir.to_path_buf());
                if let Some(parent) = dir.parent() {
                    self.fallback_dirs.push(parent.to_path_buf());
                }
            }
        }
        self
    }

    pub fn fallback_dirs(&self) -> &[PathBuf] {
        &self.fallback_dirs
    }

    /// Every path `location` may resolve to, in lookup order, without duplicates.
    pub fn candidates(&self, location: &str) -> Vec<PathBuf> {
        let given = Path::new(location);
        let mut candidates = vec![given.to_path_buf()];

        if given.is_relative() {
            for dir in &self.fallback_dirs {
                let candidate = dir.join(given);
                if !candidates.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }

        candidates
    }
}

impl TableSource for LocalFileSource {
    fn load(&self, location: &str) -> Result<String, SourceError> {
        let candidates = self.candidates(location);

        let found = candidates.iter().position(|p| p.is_file());
        let Some(index) = found else {
            return Err(SourceError::NotFound {
                location: location.to_string(),
                tried: candidates,
            });
        };
        let path = &candidates[index];

        debug!(path = %path.display(), "Loading table text");

        fs_err::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })
    }
}
