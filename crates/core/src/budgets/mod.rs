//! Budget plans - domain models, goal chart aggregation, view derivation and services.
//!
//! The chart pipeline is pure: [`aggregate_budget_goal`] turns a plan into ring
//! data once, and [`derive_ring_series`] reselects that data for either view
//! mode. [`BudgetChartService`] memoizes the aggregation per plan.

mod budgets_model;
mod budgets_service;
mod budgets_traits;
mod chart_format;
mod chart_view;
mod cost_list;
mod goal_chart_calculator;

pub use budgets_model::*;
pub use budgets_service::BudgetChartService;
pub use budgets_traits::{BudgetChartServiceTrait, BudgetPlanProviderTrait};
pub use chart_format::{
    format_amount, format_cost_progress, format_slice_value, format_whole_amount,
    percentage_base, percentage_of,
};
pub use chart_view::{
    arc_label, build_chart_view, chart_placeholder, derive_ring_series, legend_entries,
};
pub use cost_list::{cost_list_entries, sort_costs_for_display};
pub use goal_chart_calculator::{
    aggregate_budget_goal, color_pair, ContributionLedger, MemberContribution,
};

#[cfg(test)]
mod budgets_model_tests;
