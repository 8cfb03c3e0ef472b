//! Payoff Table Parser Port - Text to table interface.
//!
//! This port defines the contract for turning pasted or loaded text into a
//! `PayoffTable`. The application depends on this trait, while adapters
//! (like `LenientCsvParser`) provide the implementation.

use crate::domain::analysis::PayoffTable;

/// Port for parsing raw text into a payoff table.
///
/// # Contract
///
/// Implementations must:
/// - Never fail: malformed input degrades to an empty or partially
///   populated table
/// - Keep alternatives in header column order
/// - Default any outcome they cannot read to 0
///
/// # Usage
///
/// ```rust,ignore
/// let parser: &dyn PayoffTableParser = get_parser();
/// let table = parser.parse(",A,B\n10,20\n5,25");
/// assert_eq!(table.len(), 2);
/// ```
pub trait PayoffTableParser: Send + Sync {
    /// Parse text into a payoff table.
    fn parse(&self, text: &str) -> PayoffTable;
}

/// Port for writing a payoff table back to text.
///
/// # Contract
///
/// For any table `t` produced by the paired parser,
/// `parser.parse(&writer.write(&t)) == t`.
pub trait PayoffTableWriter: Send + Sync {
    /// Serialize a table.
    fn write(&self, table: &PayoffTable) -> String;
}
