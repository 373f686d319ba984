//! Cost list ordering and display entries for a budget plan.

use super::budgets_model::{Cost, CostListEntry};
use super::chart_format::format_cost_progress;

/// Orders costs for display: open costs first, fully paid ones last.
/// The order within each group is preserved.
pub fn sort_costs_for_display(costs: &[Cost]) -> Vec<&Cost> {
    let mut sorted: Vec<&Cost> = costs.iter().collect();
    sorted.sort_by_key(|cost| cost.is_fully_paid());
    sorted
}

impl From<&Cost> for CostListEntry {
    fn from(cost: &Cost) -> Self {
        let paid = cost.paid_amount();
        let goal = cost.goal_amount();
        let assignee_names = cost
            .users
            .iter()
            .map(|user| user.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        CostListEntry {
            id: cost.id.clone(),
            title: cost.title.clone(),
            description: cost.description.clone().filter(|d| !d.is_empty()),
            assignee_names,
            paid,
            goal,
            amount_label: format_cost_progress(paid, goal),
            is_fully_paid: cost.is_fully_paid(),
            toggled_paid_amount: cost.toggled_paid_amount(),
        }
    }
}

/// Builds the display entries of a plan's cost list in display order.
pub fn cost_list_entries(costs: &[Cost]) -> Vec<CostListEntry> {
    sort_costs_for_display(costs)
        .into_iter()
        .map(CostListEntry::from)
        .collect()
}
