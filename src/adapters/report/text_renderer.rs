//! Plain-text report renderer adapter.
//!
//! Renders a decision report as markdown-style tables. Every number is shown
//! with one decimal place.

use std::str::FromStr;

use crate::domain::analysis::{
    DecisionReport, DecisionRule, HurwitzSweep, PayoffTable, RegretMatrix, RuleResult,
};
use crate::ports::ReportRenderer;

/// Text implementation of ReportRenderer.
///
/// Sections, in order: payoff table, results, Hurwitz sweep, and the regret
/// matrix when the report carries one.
#[derive(Debug, Clone, Default)]
pub struct TextReportRenderer {
    /// Omit the payoff table section.
    hide_table: bool,
}

impl TextReportRenderer {
    /// Creates a renderer that prints every section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips echoing the parsed payoff table.
    pub fn without_table(mut self) -> Self {
        self.hide_table = true;
        self
    }

    fn render_table(&self, table: &PayoffTable) -> String {
        let mut section = String::from("## Payoff Table\n\n");

        if table.is_empty() {
            section.push_str("*No alternatives found*\n\n");
            return section;
        }

        section.push_str("| Alternative | First | Second |\n");
        section.push_str("|-------------|-------|--------|\n");
        for alt in table {
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                alt.name(),
                format_number(alt.outcome_a()),
                format_number(alt.outcome_b())
            ));
        }
        section.push('\n');

        section
    }

    fn render_results(&self, results: &[RuleResult]) -> String {
        let mut section = String::from("## Results\n\n");
        section.push_str("| Rule | Chosen | Score |\n");
        section.push_str("|------|--------|-------|\n");

        for result in results {
            let chosen = if result.chosen.is_empty() {
                "-"
            } else {
                result.chosen.as_str()
            };
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                rule_label(&result.rule_name),
                chosen,
                format_number(result.score)
            ));
        }
        section.push('\n');

        section
    }

    fn render_sweep(&self, sweep: &HurwitzSweep) -> String {
        let mut section = String::from("## Hurwitz Sweep\n\n");

        if sweep.headers.is_empty() {
            section.push_str("*No alternatives to compare*\n\n");
            return section;
        }

        section.push_str("| h |");
        for name in &sweep.headers {
            section.push_str(&format!(" {} |", name));
        }
        section.push('\n');

        section.push_str("|---|");
        for _ in &sweep.headers {
            section.push_str("---|");
        }
        section.push('\n');

        for row in &sweep.rows {
            section.push_str(&format!("| {} |", row.degree));
            for score in &row.scores {
                section.push_str(&format!(" {} |", format_number(*score)));
            }
            section.push('\n');
        }
        section.push('\n');

        let switches = sweep.switch_points();
        if switches.len() > 1 {
            section.push_str("Leader changes:\n");
            for (degree, name) in &switches {
                section.push_str(&format!("- h = {}: {}\n", degree, name));
            }
            section.push('\n');
        }

        section
    }

    fn render_regrets(&self, regrets: &RegretMatrix) -> String {
        let mut section = String::from("## Regret Matrix\n\n");
        section.push_str(&format!(
            "Best outcomes: first = {}, second = {}\n\n",
            format_number(regrets.best_a),
            format_number(regrets.best_b)
        ));

        section.push_str("| Alternative | First | Second | Max |\n");
        section.push_str("|-------------|-------|--------|-----|\n");
        for row in &regrets.rows {
            section.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                row.alternative,
                format_number(row.regret_a),
                format_number(row.regret_b),
                format_number(row.max_regret())
            ));
        }
        section.push('\n');

        section
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, report: &DecisionReport) -> String {
        let mut out = String::new();

        if !self.hide_table {
            out.push_str(&self.render_table(&report.table));
        }
        out.push_str(&self.render_results(&report.results));
        out.push_str(&self.render_sweep(&report.sweep));
        if let Some(regrets) = &report.regrets {
            out.push_str(&self.render_regrets(regrets));
        }

        out
    }
}

/// One decimal place, with negative zero shown as "0.0".
pub fn format_number(value: f64) -> String {
    let text = format!("{:.1}", value);
    if text == "-0.0" {
        "0.0".to_string()
    } else {
        text
    }
}

fn rule_label(rule_name: &str) -> String {
    DecisionRule::from_str(rule_name)
        .map(|rule| rule.label().to_string())
        .unwrap_or_else(|_| rule_name.to_string())
}
