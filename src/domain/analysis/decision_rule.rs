//! Decision Rules - Wald, Maximax, Laplace, Hurwitz and Savage selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Alternative, PayoffTable, RegretMatrix};
use crate::domain::foundation::{OptimismDegree, ValidationError};

/// The chosen alternative and the score it was chosen with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub chosen: String,
    pub score: f64,
}

impl RuleOutcome {
    pub fn new(chosen: impl Into<String>, score: f64) -> Self {
        Self {
            chosen: chosen.into(),
            score,
        }
    }

    /// The outcome every rule returns for an empty table: `("", 0)`.
    pub fn none() -> Self {
        Self::new("", 0.0)
    }

    /// Returns true if no alternative was chosen.
    pub fn is_none(&self) -> bool {
        self.chosen.is_empty()
    }
}

/// A classical selection rule under uncertainty.
///
/// Every rule scans the table in order and keeps the first alternative that
/// strictly beats the running best, so ties go to the earliest column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DecisionRule {
    /// Wald: maximise the first-state payoff.
    Pessimistic,
    /// Maximax: maximise the second-state payoff.
    Optimistic,
    /// Maximise the mean of both payoffs.
    Laplace,
    /// Maximise `h * second + (1 - h) * first`.
    Hurwitz { degree: OptimismDegree },
    /// Minimax regret.
    Savage,
}

impl DecisionRule {
    /// Hurwitz rule at the given optimism degree.
    pub fn hurwitz(degree: OptimismDegree) -> Self {
        DecisionRule::Hurwitz { degree }
    }

    /// All five rules in canonical order.
    pub fn all(degree: OptimismDegree) -> [DecisionRule; 5] {
        [
            DecisionRule::Pessimistic,
            DecisionRule::Optimistic,
            DecisionRule::Laplace,
            DecisionRule::Hurwitz { degree },
            DecisionRule::Savage,
        ]
    }

    /// Stable selector string.
    pub fn name(&self) -> &'static str {
        match self {
            DecisionRule::Pessimistic => "pessimistic",
            DecisionRule::Optimistic => "optimistic",
            DecisionRule::Laplace => "laplace",
            DecisionRule::Hurwitz { .. } => "hurwitz",
            DecisionRule::Savage => "savage",
        }
    }

    /// Returns the display label for this rule.
    pub fn label(&self) -> &'static str {
        match self {
            DecisionRule::Pessimistic => "Pessimistic (Wald)",
            DecisionRule::Optimistic => "Optimistic (Maximax)",
            DecisionRule::Laplace => "Laplace",
            DecisionRule::Hurwitz { .. } => "Hurwitz",
            DecisionRule::Savage => "Savage (Minimax Regret)",
        }
    }

    /// Applies the rule to a table. An empty table yields [`RuleOutcome::none`].
    pub fn execute(&self, table: &PayoffTable) -> RuleOutcome {
        match self {
            DecisionRule::Pessimistic => select_max(table, Alternative::outcome_a),
            DecisionRule::Optimistic => select_max(table, Alternative::outcome_b),
            DecisionRule::Laplace => select_max(table, Alternative::mean),
            DecisionRule::Hurwitz { degree } => {
                select_max(table, |alt| degree.blend(alt.outcome_a(), alt.outcome_b()))
            }
            DecisionRule::Savage => RegretMatrix::compute(table).minimax(),
        }
    }
}

/// First alternative with the strictly greatest score.
fn select_max(table: &PayoffTable, score: impl Fn(&Alternative) -> f64) -> RuleOutcome {
    let mut best: Option<(&Alternative, f64)> = None;
    let mut best_score = f64::NEG_INFINITY;

    for alt in table {
        let value = score(alt);
        if value > best_score {
            best = Some((alt, value));
            best_score = value;
        }
    }

    match best {
        Some((alt, value)) => RuleOutcome::new(alt.name(), value),
        // Empty table, or every score was NaN/-inf: first column wins.
        None => table
            .iter()
            .next()
            .map(|alt| RuleOutcome::new(alt.name(), best_score))
            .unwrap_or_else(RuleOutcome::none),
    }
}

impl fmt::Display for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionRule::Hurwitz { degree } => write!(f, "{} (h={})", self.label(), degree),
            _ => write!(f, "{}", self.label()),
        }
    }
}

impl FromStr for DecisionRule {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pessimistic" | "wald" => Ok(DecisionRule::Pessimistic),
            "optimistic" | "maximax" => Ok(DecisionRule::Optimistic),
            "laplace" => Ok(DecisionRule::Laplace),
            "hurwitz" => Ok(DecisionRule::Hurwitz {
                degree: OptimismDegree::default(),
            }),
            "savage" | "minimax-regret" => Ok(DecisionRule::Savage),
            other => Err(ValidationError::invalid_format(
                "rule",
                format!("unknown decision rule '{}'", other),
            )),
        }
    }
}
