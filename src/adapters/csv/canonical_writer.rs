//! Canonical CSV writer adapter.
//!
//! Produces the normalized form of a payoff table: an empty corner cell,
//! labelled outcome rows, and comma delimiters.
//!
//! ```text
//! ,StatusQuo,Expansion
//! first,10,20
//! second,5,25
//! ```

use crate::domain::analysis::{PayoffTable, State};
use crate::ports::PayoffTableWriter;

/// Row labels, in outcome order.
const ROW_LABELS: [(&str, State); 2] = [("first", State::First), ("second", State::Second)];

/// Writes tables in the canonical layout the lenient parser reads back.
#[derive(Debug, Clone, Default)]
pub struct CanonicalCsvWriter;

impl CanonicalCsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Replaces characters the parser treats as delimiters.
    fn sanitize_name(name: &str) -> String {
        name.chars()
            .map(|c| match c {
                ',' | ';' | '\\' => '_',
                other => other,
            })
            .collect()
    }
}

impl PayoffTableWriter for CanonicalCsvWriter {
    fn write(&self, table: &PayoffTable) -> String {
        if table.is_empty() {
            return String::new();
        }

        let mut csv = String::new();

        for alt in table {
            csv.push(',');
            csv.push_str(&Self::sanitize_name(alt.name()));
        }
        csv.push('\n');

        for (label, state) in ROW_LABELS {
            csv.push_str(label);
            for alt in table {
                let value = match state {
                    State::First => alt.outcome_a(),
                    State::Second => alt.outcome_b(),
                };
                csv.push_str(&format!(",{}", value));
            }
            csv.push('\n');
        }

        csv
    }
}
