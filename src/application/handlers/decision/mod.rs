//! Decision handlers - Evaluating, normalizing, and loading payoff tables.

mod evaluate_decision;
mod load_table;
mod normalize_table;

pub use evaluate_decision::{EvaluateDecisionCommand, EvaluateDecisionHandler};
pub use load_table::{LoadTableHandler, LoadTableQuery};
pub use normalize_table::{NormalizeTableCommand, NormalizeTableHandler};
