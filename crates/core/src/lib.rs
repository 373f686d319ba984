//! WG Planner Core - budget plan models and goal chart derivation.
//!
//! This crate holds the pure presentation arithmetic of the WG planner:
//! aggregating a budget plan into dual-ring chart data, deriving both view
//! modes from it, and formatting values for display. Fetching plans is left
//! to implementations of [`budgets::BudgetPlanProviderTrait`].

pub mod budgets;
pub mod constants;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
