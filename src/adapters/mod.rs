//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `csv` - Lenient table parsing and canonical writing
//! - `report` - Text and JSON report rendering
//! - `storage` - Loading table text from files or memory

pub mod csv;
pub mod report;
pub mod storage;

pub use csv::{CanonicalCsvWriter, LenientCsvParser};
pub use report::{JsonReportRenderer, TextReportRenderer};
pub use storage::{InMemoryTableSource, LocalFileSource};
