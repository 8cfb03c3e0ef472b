//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the decision rules domain.

mod errors;
mod optimism_degree;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use optimism_degree::OptimismDegree;
