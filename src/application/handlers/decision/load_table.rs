//! LoadTableHandler - Query handler for fetching raw table text.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::ports::TableSource;

/// Query for the text stored at a location.
#[derive(Debug, Clone)]
pub struct LoadTableQuery {
    pub location: String,
}

/// Handler for loading table text from a source.
pub struct LoadTableHandler {
    source: Arc<dyn TableSource>,
}

impl LoadTableHandler {
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self { source }
    }

    pub fn handle(&self, query: LoadTableQuery) -> Result<String, DomainError> {
        let text = self.source.load(&query.location)?;
        debug!(location = %query.location, bytes = text.len(), "Loaded table text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTableSource;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn returns_stored_text() {
        let source = InMemoryTableSource::new();
        source.insert("demo.csv", ",A\n1\n2\n");
        let handler = LoadTableHandler::new(Arc::new(source));

        let text = handler
            .handle(LoadTableQuery {
                location: "demo.csv".to_string(),
            })
            .unwrap();
        assert_eq!(text, ",A\n1\n2\n");
    }

    #[test]
    fn missing_location_maps_to_source_not_found() {
        let handler = LoadTableHandler::new(Arc::new(InMemoryTableSource::new()));

        let err = handler
            .handle(LoadTableQuery {
                location: "missing.csv".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SourceNotFound);
        assert!(err.message.contains("missing.csv"));
    }
}
