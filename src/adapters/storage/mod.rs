//! Storage Adapters
//!
//! Implementations of the TableSource port for loading table text.
//!
//! ## Available Adapters
//!
//! - **LocalFileSource** - Reads files, trying fallback base directories
//! - **InMemoryTableSource** - Serves text from memory (testing/embedding)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryTableSource, LocalFileSource};
//!
//! // Files relative to the working directory, then ./data
//! let source = LocalFileSource::with_fallback_dirs(["data"]);
//!
//! // Testing: in-memory source
//! let source = InMemoryTableSource::new();
//! ```

mod in_memory_table_source;
mod local_file_source;

pub use in_memory_table_source::InMemoryTableSource;
pub use local_file_source::LocalFileSource;
