//! Aggregates a budget plan into the inner and outer ring data of the goal chart.

use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::constants::{
    PAID_COLORS, PAID_SLICE_SUFFIX, REMAINING_GOAL_ID, REMAINING_GOAL_INNER_COLOR,
    REMAINING_GOAL_NAME, REMAINING_GOAL_OUTER_COLOR, UNPAID_COLORS, UNPAID_SLICE_SUFFIX,
};

use super::budgets_model::{
    BudgetGoalChartData, BudgetPlan, ChartSlice, Cost, CostAssignee, EntityId,
};

/// Paid and goal share accumulated for one member across all costs.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberContribution {
    pub id: EntityId,
    pub name: String,
    pub paid: Decimal,
    pub goal: Decimal,
}

/// Running totals of a budget plan, with members kept in first-seen order.
#[derive(Debug, Default)]
pub struct ContributionLedger {
    members: Vec<MemberContribution>,
    index_by_id: HashMap<EntityId, usize>,
    total_paid: Decimal,
    total_cost_goal: Decimal,
}

impl ContributionLedger {
    pub fn from_costs(costs: &[Cost]) -> Self {
        let mut ledger = Self::default();
        for cost in costs {
            ledger.record_cost(cost);
        }
        ledger
    }

    /// Adds a cost to the totals and splits it evenly across its assignees.
    /// A cost without assignees goes to the unassigned bucket.
    pub fn record_cost(&mut self, cost: &Cost) {
        let paid = cost.paid_amount();
        let goal = cost.goal_amount();

        self.total_paid = self.total_paid.saturating_add(paid);
        self.total_cost_goal = self.total_cost_goal.saturating_add(goal);

        let unassigned;
        let assignees: &[CostAssignee] = if cost.users.is_empty() {
            unassigned = [CostAssignee::unassigned()];
            &unassigned
        } else {
            &cost.users
        };

        let share_count = Decimal::from(assignees.len());
        let paid_share = paid / share_count;
        let goal_share = goal / share_count;

        for assignee in assignees {
            self.record_share(assignee, paid_share, goal_share);
        }
    }

    fn record_share(&mut self, assignee: &CostAssignee, paid: Decimal, goal: Decimal) {
        let index = match self.index_by_id.get(&assignee.id) {
            Some(&index) => index,
            None => {
                self.members.push(MemberContribution {
                    id: assignee.id.clone(),
                    name: assignee.name.clone(),
                    paid: Decimal::ZERO,
                    goal: Decimal::ZERO,
                });
                self.index_by_id
                    .insert(assignee.id.clone(), self.members.len() - 1);
                self.members.len() - 1
            }
        };

        let member = &mut self.members[index];
        member.paid = member.paid.saturating_add(paid);
        member.goal = member.goal.saturating_add(goal);
        // Last writer wins if the same id shows up under different names
        member.name.clone_from(&assignee.name);
    }

    pub fn members(&self) -> &[MemberContribution] {
        &self.members
    }

    pub fn member(&self, id: &EntityId) -> Option<&MemberContribution> {
        self.index_by_id.get(id).map(|&index| &self.members[index])
    }

    pub fn total_paid(&self) -> Decimal {
        self.total_paid
    }

    pub fn total_cost_goal(&self) -> Decimal {
        self.total_cost_goal
    }
}

/// Paid and unpaid colors for the member at `index`, cycling through the palettes.
pub fn color_pair(index: usize) -> (&'static str, &'static str) {
    (
        PAID_COLORS[index % PAID_COLORS.len()],
        UNPAID_COLORS[index % UNPAID_COLORS.len()],
    )
}

/// Builds the ring data of the budget goal chart.
///
/// Returns the empty result when the plan, its goal or its cost list is
/// absent. A `null` goal counts as absent rather than as zero. Never fails:
/// absent and negative cost amounts count as zero.
pub fn aggregate_budget_goal(plan: Option<&BudgetPlan>) -> BudgetGoalChartData {
    let Some(plan) = plan else {
        return BudgetGoalChartData::empty();
    };
    let (Some(plan_goal), Some(costs)) = (plan.goal, plan.costs.as_deref()) else {
        debug!(
            "Budget plan '{}' has no goal or no cost list, returning empty chart data",
            plan.id
        );
        return BudgetGoalChartData::empty();
    };

    let mut ledger = ContributionLedger::default();
    for cost in costs {
        if cost.has_negative_amount() {
            warn!(
                "Cost '{}' of budget plan '{}' has a negative amount, counting it as zero",
                cost.id, plan.id
            );
        }
        ledger.record_cost(cost);
    }

    let total_paid = ledger.total_paid();
    let effective_goal = plan_goal.max(ledger.total_cost_goal()).max(total_paid);

    let mut inner_chart_data = Vec::new();
    let mut outer_chart_data = Vec::new();

    for (color_index, member) in ledger.members().iter().enumerate() {
        let (paid_color, unpaid_color) = color_pair(color_index);

        if member.paid > Decimal::ZERO {
            outer_chart_data.push(ChartSlice {
                id: format!("{}{}", member.id, PAID_SLICE_SUFFIX),
                label: format!("{} (Paid)", member.name),
                value: member.paid,
                color: paid_color.to_string(),
            });
        }

        let unpaid = (member.goal - member.paid).max(Decimal::ZERO);
        if unpaid > Decimal::ZERO {
            outer_chart_data.push(ChartSlice {
                id: format!("{}{}", member.id, UNPAID_SLICE_SUFFIX),
                label: format!("{} (Unpaid)", member.name),
                value: unpaid,
                color: unpaid_color.to_string(),
            });
        }

        if member.goal > Decimal::ZERO {
            inner_chart_data.push(ChartSlice {
                id: member.id.to_string(),
                label: format!("{} Goal", member.name),
                value: member.goal,
                // Shares the paid color so both rings read as one member
                color: paid_color.to_string(),
            });
        }
    }

    let total_remaining = (effective_goal - total_paid).max(Decimal::ZERO);
    if total_remaining > Decimal::ZERO {
        inner_chart_data.push(ChartSlice {
            id: REMAINING_GOAL_ID.to_string(),
            label: REMAINING_GOAL_NAME.to_string(),
            value: total_remaining,
            color: REMAINING_GOAL_INNER_COLOR.to_string(),
        });
        outer_chart_data.push(ChartSlice {
            id: REMAINING_GOAL_ID.to_string(),
            label: REMAINING_GOAL_NAME.to_string(),
            value: total_remaining,
            color: REMAINING_GOAL_OUTER_COLOR.to_string(),
        });
    }

    debug!(
        "Aggregated budget plan '{}': {} members, effective goal {}, paid {}, remaining {}",
        plan.id,
        ledger.members().len(),
        effective_goal,
        total_paid,
        total_remaining
    );

    BudgetGoalChartData {
        total_goal: effective_goal,
        total_paid,
        inner_chart_data,
        outer_chart_data,
    }
}
