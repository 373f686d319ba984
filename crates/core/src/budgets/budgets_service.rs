use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;

use crate::constants::DEFAULT_CHART_CACHE_CAPACITY;
use crate::errors::{Result, ValidationError};

use super::budgets_model::{
    BudgetChartView, BudgetGoalChartData, BudgetPlan, ChartViewMode, CostListEntry, EntityId,
};
use super::budgets_traits::{BudgetChartServiceTrait, BudgetPlanProviderTrait};
use super::chart_view::build_chart_view;
use super::cost_list::cost_list_entries;
use super::goal_chart_calculator::aggregate_budget_goal;

struct CachedChart {
    plan: BudgetPlan,
    data: Arc<BudgetGoalChartData>,
    last_used: AtomicU64,
}

/// Serves budget goal charts, aggregating each plan once per content change.
///
/// At most `capacity` plans are kept; past that the least recently used
/// plan is dropped.
pub struct BudgetChartService {
    provider: Arc<dyn BudgetPlanProviderTrait>,
    cache: DashMap<EntityId, CachedChart>,
    capacity: usize,
    clock: AtomicU64,
}

impl BudgetChartService {
    pub fn new(provider: Arc<dyn BudgetPlanProviderTrait>) -> Self {
        Self::with_capacity(provider, DEFAULT_CHART_CACHE_CAPACITY)
    }

    /// A capacity of zero disables caching.
    pub fn with_capacity(provider: Arc<dyn BudgetPlanProviderTrait>, capacity: usize) -> Self {
        BudgetChartService {
            provider,
            cache: DashMap::new(),
            capacity,
            clock: AtomicU64::new(0),
        }
    }

    /// Drops the cached aggregation of a plan.
    pub fn evict(&self, plan_id: &EntityId) {
        self.cache.remove(plan_id);
    }

    pub fn cached_plan_count(&self) -> usize {
        self.cache.len()
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    fn evict_least_recently_used(&self) {
        while self.cache.len() > self.capacity {
            let oldest = self
                .cache
                .iter()
                .min_by_key(|entry| entry.value().last_used.load(Ordering::Relaxed))
                .map(|entry| entry.key().clone());
            let Some(plan_id) = oldest else {
                break;
            };
            debug!("Dropping cached chart data for budget plan '{}'", plan_id);
            self.cache.remove(&plan_id);
        }
    }

    async fn fetch_plan(
        &self,
        plan_id: &EntityId,
        bearer_token: Option<&str>,
    ) -> Result<BudgetPlan> {
        if plan_id.is_empty() {
            return Err(ValidationError::InvalidInput(
                "Budget plan id must not be empty".to_string(),
            )
            .into());
        }
        self.provider.get_budget_plan(plan_id, bearer_token).await
    }
}

#[async_trait]
impl BudgetChartServiceTrait for BudgetChartService {
    fn chart_data(&self, plan: &BudgetPlan) -> Arc<BudgetGoalChartData> {
        if let Some(cached) = self.cache.get(&plan.id) {
            if cached.plan == *plan {
                debug!("Reusing chart data for budget plan '{}'", plan.id);
                cached.last_used.store(self.tick(), Ordering::Relaxed);
                return Arc::clone(&cached.data);
            }
        }

        let data = Arc::new(aggregate_budget_goal(Some(plan)));
        if self.capacity == 0 {
            return data;
        }
        self.cache.insert(
            plan.id.clone(),
            CachedChart {
                plan: plan.clone(),
                data: Arc::clone(&data),
                last_used: AtomicU64::new(self.tick()),
            },
        );
        self.evict_least_recently_used();
        data
    }

    fn build_chart_view(
        &self,
        plan: Option<&BudgetPlan>,
        view: ChartViewMode,
    ) -> BudgetChartView {
        match plan {
            Some(plan) => {
                let data = self.chart_data(plan);
                build_chart_view(Some(plan), &data, view)
            }
            None => build_chart_view(None, &BudgetGoalChartData::empty(), view),
        }
    }

    async fn get_budget_chart(
        &self,
        plan_id: &EntityId,
        bearer_token: Option<&str>,
        view: ChartViewMode,
    ) -> Result<BudgetChartView> {
        let plan = self.fetch_plan(plan_id, bearer_token).await?;
        Ok(self.build_chart_view(Some(&plan), view))
    }

    async fn get_cost_list(
        &self,
        plan_id: &EntityId,
        bearer_token: Option<&str>,
    ) -> Result<Vec<CostListEntry>> {
        let plan = self.fetch_plan(plan_id, bearer_token).await?;
        Ok(cost_list_entries(plan.costs.as_deref().unwrap_or_default()))
    }
}
