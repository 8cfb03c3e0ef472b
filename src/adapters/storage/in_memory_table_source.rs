//! In-Memory Table Source Adapter
//!
//! Serves table text from memory.
//! Useful for testing and for embedding known tables.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{SourceError, TableSource};

/// In-memory table text keyed by location.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableSource {
    tables: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTableSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Store text under a location, replacing any previous entry
    pub fn insert(&self, location: impl Into<String>, text: impl Into<String>) {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.insert(location.into(), text.into());
    }

    /// Get the number of stored tables
    pub fn len(&self) -> usize {
        self.tables.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TableSource for InMemoryTableSource {
    fn load(&self, location: &str) -> Result<String, SourceError> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
        tables
            .get(location)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                location: location.to_string(),
                tried: vec![location.into()],
            })
    }
}
