//! CSV adapters - Reading and writing payoff tables as delimited text.
//!
//! - `LenientCsvParser` - Tolerant parser for hand-written tables
//! - `CanonicalCsvWriter` - Writes the normalized layout

mod canonical_writer;
mod lenient_parser;

pub use canonical_writer::CanonicalCsvWriter;
pub use lenient_parser::{parse_number, LenientCsvParser};
