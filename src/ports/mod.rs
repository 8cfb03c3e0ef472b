//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Table Ports
//!
//! - `PayoffTableParser` - Raw text to payoff table
//! - `PayoffTableWriter` - Payoff table back to canonical text
//! - `TableSource` - Loads table text from storage
//!
//! ## Presentation Ports
//!
//! - `ReportRenderer` - Turns a decision report into displayable text

mod payoff_table_parser;
mod report_renderer;
mod table_source;

pub use payoff_table_parser::{PayoffTableParser, PayoffTableWriter};
pub use report_renderer::ReportRenderer;
pub use table_source::{SourceError, TableSource};
