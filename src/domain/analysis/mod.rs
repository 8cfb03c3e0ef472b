//! Analysis Module - Pure domain services for decisions under uncertainty.
//!
//! This module contains stateless functions over a two-state payoff table.
//!
//! # Components
//!
//! - `PayoffTable` - Alternatives with one payoff per state of nature
//! - `DecisionRule` - Wald, Maximax, Laplace, Hurwitz and Savage selection
//! - `RegretMatrix` - Opportunity loss behind the Savage rule
//! - `HurwitzSweep` - Hurwitz scores for h = 0.0 ... 1.0
//! - `DecisionReport` - Rule results plus the sweep of one evaluation
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and never fail. An empty table
//! is a valid input and produces the null outcome `("", 0)`.

mod decision_report;
mod decision_rule;
mod hurwitz_sweep;
mod payoff_table;
mod regret_matrix;

// Re-export all public types
pub use decision_report::{DecisionReport, RuleResult};
pub use decision_rule::{DecisionRule, RuleOutcome};
pub use hurwitz_sweep::{HurwitzSweep, SweepRow, SWEEP_STEPS};
pub use payoff_table::{Alternative, PayoffTable, PayoffTableBuilder, State};
pub use regret_matrix::{RegretMatrix, RegretRow};
