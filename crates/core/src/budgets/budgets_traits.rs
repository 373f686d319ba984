use std::sync::Arc;

use crate::budgets::budgets_model::{
    BudgetChartView, BudgetGoalChartData, BudgetPlan, ChartViewMode, CostListEntry, EntityId,
};
use crate::errors::Result;
use async_trait::async_trait;

/// Source of budget plans, i.e. the WG planner REST API.
#[async_trait]
pub trait BudgetPlanProviderTrait: Send + Sync {
    /// Fetches a budget plan with its costs. The caller's bearer token, if
    /// any, is forwarded as is.
    async fn get_budget_plan(
        &self,
        plan_id: &EntityId,
        bearer_token: Option<&str>,
    ) -> Result<BudgetPlan>;
}

/// Trait for budget chart service operations
#[async_trait]
pub trait BudgetChartServiceTrait: Send + Sync {
    /// Aggregated ring data for a plan, reused while the plan is unchanged.
    fn chart_data(&self, plan: &BudgetPlan) -> Arc<BudgetGoalChartData>;
    fn build_chart_view(
        &self,
        plan: Option<&BudgetPlan>,
        view: ChartViewMode,
    ) -> BudgetChartView;
    async fn get_budget_chart(
        &self,
        plan_id: &EntityId,
        bearer_token: Option<&str>,
        view: ChartViewMode,
    ) -> Result<BudgetChartView>;
    async fn get_cost_list(
        &self,
        plan_id: &EntityId,
        bearer_token: Option<&str>,
    ) -> Result<Vec<CostListEntry>>;
}
