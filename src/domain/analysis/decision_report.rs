//! Decision report - Everything one evaluation produces.

use serde::{Deserialize, Serialize};

use super::{DecisionRule, HurwitzSweep, PayoffTable, RegretMatrix, RuleOutcome};

/// Outcome of one rule, tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Selector string of the rule (e.g. "laplace").
    pub rule_name: String,
    /// Chosen alternative; empty when the table was empty.
    pub chosen: String,
    pub score: f64,
}

impl RuleResult {
    /// Runs a rule and tags its outcome.
    pub fn evaluate(rule: &DecisionRule, table: &PayoffTable) -> Self {
        Self::from_outcome(rule, rule.execute(table))
    }

    pub fn from_outcome(rule: &DecisionRule, outcome: RuleOutcome) -> Self {
        Self {
            rule_name: rule.name().to_string(),
            chosen: outcome.chosen,
            score: outcome.score,
        }
    }
}

/// Results of one evaluation request.
///
/// The sweep travels with the results so the presentation layer never has to
/// look anywhere else for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    /// The table the rules ran against.
    pub table: PayoffTable,
    /// One entry per rule, in evaluation order.
    pub results: Vec<RuleResult>,
    pub sweep: HurwitzSweep,
    /// Present only when the Savage rule was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regrets: Option<RegretMatrix>,
}

impl DecisionReport {
    /// Looks up the result of a rule by selector string.
    pub fn result(&self, rule_name: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule_name == rule_name)
    }

    /// Returns true if the parsed table had no alternatives.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
