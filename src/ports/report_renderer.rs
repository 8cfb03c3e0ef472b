//! Report Renderer Port - Presentation of evaluation results.
//!
//! The presentation layer receives a `DecisionReport` and turns it into text.
//! Adapters provide plain-text tables and JSON.

use crate::domain::analysis::DecisionReport;

/// Port for rendering a decision report.
pub trait ReportRenderer: Send + Sync {
    /// Render the full report.
    fn render(&self, report: &DecisionReport) -> String;
}
