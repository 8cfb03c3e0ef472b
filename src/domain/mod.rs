//! Domain layer containing decision logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `analysis` - Payoff tables and the decision rules applied to them

pub mod analysis;
pub mod foundation;
