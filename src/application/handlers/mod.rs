//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod decision;

pub use decision::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, LoadTableHandler, LoadTableQuery,
    NormalizeTableCommand, NormalizeTableHandler,
};
