//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are synchronous and hold their ports as shared trait objects.

pub mod handlers;

pub use handlers::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, LoadTableHandler, LoadTableQuery,
    NormalizeTableCommand, NormalizeTableHandler,
};
