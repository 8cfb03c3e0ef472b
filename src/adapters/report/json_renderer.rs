//! JSON report renderer adapter.

use tracing::error;

use crate::domain::analysis::DecisionReport;
use crate::ports::ReportRenderer;

/// Renders the report as JSON via serde.
#[derive(Debug, Clone)]
pub struct JsonReportRenderer {
    pretty: bool,
}

impl JsonReportRenderer {
    /// Creates a renderer producing indented JSON.
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, one report per line.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &DecisionReport) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };

        rendered.unwrap_or_else(|e| {
            error!(error = %e, "Failed to serialize decision report");
            String::from("null")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{DecisionRule, HurwitzSweep, PayoffTable, RuleResult};
    use serde_json::Value;

    fn report() -> DecisionReport {
        let table = PayoffTable::builder()
            .alternative("A", 10.0, 5.0)
            .alternative("B", 20.0, 25.0)
            .build();
        DecisionReport {
            results: vec![
                RuleResult::evaluate(&DecisionRule::Pessimistic, &table),
                RuleResult::evaluate(&DecisionRule::Laplace, &table),
            ],
            sweep: HurwitzSweep::compute(&table),
            table,
            regrets: None,
        }
    }

    #[test]
    fn pretty_output_is_valid_json() {
        let json = JsonReportRenderer::new().render(&report());
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(json.contains('\n'));
        assert_eq!(value["table"][0]["name"], "A");
        assert_eq!(value["table"][1]["outcome_b"], 25.0);
        assert_eq!(value["results"][0]["rule_name"], "pessimistic");
        assert_eq!(value["results"][1]["chosen"], "B");
        assert_eq!(value["results"][1]["score"], 22.5);
        assert_eq!(value["sweep"]["headers"][1], "B");
        assert_eq!(value["sweep"]["rows"][10]["degree"], 1.0);
    }

    #[test]
    fn compact_output_is_single_line() {
        let json = JsonReportRenderer::compact().render(&report());
        assert!(!json.contains('\n'));
    }

    #[test]
    fn output_deserializes_back_into_report() {
        let original = report();
        let json = JsonReportRenderer::new().render(&original);
        let parsed: DecisionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
