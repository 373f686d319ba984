//! Ring series, legend and placeholder derivation for the budget goal chart.
//!
//! Everything here works on an already aggregated [`BudgetGoalChartData`], so
//! switching the view mode only reselects slices and never re-aggregates.

use rust_decimal::Decimal;

use crate::constants::{PAID_SLICE_SUFFIX, REMAINING_GOAL_ARC_LABEL, REMAINING_GOAL_ID};

use super::budgets_model::{
    BudgetChartView, BudgetGoalChartData, BudgetPlan, ChartPlaceholder, ChartSlice,
    ChartViewMode, DualRingSeries, LegendEntry, RingSeries, SeriesItem,
};
use super::chart_format::{format_slice_value, percentage_base, percentage_of};

fn non_zero(slices: &[ChartSlice]) -> impl Iterator<Item = &ChartSlice> {
    slices.iter().filter(|slice| slice.value > Decimal::ZERO)
}

/// Label drawn on an arc: the first word of the slice label (usually the
/// member's name), or "Remaining" for the remaining goal.
pub fn arc_label(slice: &ChartSlice) -> String {
    if slice.id == REMAINING_GOAL_ID {
        return REMAINING_GOAL_ARC_LABEL.to_string();
    }
    slice
        .label
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn paid_contribution_label(label: &str) -> String {
    format!("{} Paid", label.replacen(" (Paid)", "", 1))
}

fn series_item(slice: &ChartSlice, base: Decimal, with_arc_label: bool) -> SeriesItem {
    SeriesItem {
        id: slice.id.clone(),
        label: slice.label.clone(),
        arc_label: with_arc_label.then(|| arc_label(slice)),
        value: slice.value,
        color: slice.color.clone(),
        percentage: percentage_of(slice.value, base),
        formatted_value: format_slice_value(slice.value, base),
    }
}

fn ring(base: Decimal, data: Vec<SeriesItem>) -> RingSeries {
    RingSeries {
        percentage_base: base,
        data,
    }
}

/// Derives the inner and outer ring for `view`.
///
/// Goal progress shows each member's goal inside and the paid/unpaid split
/// outside, both as shares of the effective goal. Paid contribution shows
/// what each member paid inside (as shares of the total paid) and each
/// member's goal outside, without the remaining goal padding.
pub fn derive_ring_series(data: &BudgetGoalChartData, view: ChartViewMode) -> DualRingSeries {
    let goal_base = percentage_base(data.total_goal);

    let (inner, outer) = match view {
        ChartViewMode::GoalProgress => {
            let inner = non_zero(&data.inner_chart_data)
                .map(|slice| series_item(slice, goal_base, true))
                .collect();
            let outer = non_zero(&data.outer_chart_data)
                .map(|slice| series_item(slice, goal_base, false))
                .collect();
            (ring(goal_base, inner), ring(goal_base, outer))
        }
        ChartViewMode::PaidContribution => {
            let paid_base = percentage_base(data.total_paid);
            let inner = non_zero(&data.outer_chart_data)
                .filter(|slice| slice.id.ends_with(PAID_SLICE_SUFFIX))
                .map(|slice| {
                    let relabeled = ChartSlice {
                        label: paid_contribution_label(&slice.label),
                        ..slice.clone()
                    };
                    series_item(&relabeled, paid_base, true)
                })
                .collect();
            let outer = non_zero(&data.inner_chart_data)
                .filter(|slice| slice.id != REMAINING_GOAL_ID)
                .map(|slice| series_item(slice, goal_base, false))
                .collect();
            (ring(paid_base, inner), ring(goal_base, outer))
        }
    };

    DualRingSeries { view, inner, outer }
}

/// Legend entries: every non-zero outer slice, in ring order.
pub fn legend_entries(data: &BudgetGoalChartData) -> Vec<LegendEntry> {
    non_zero(&data.outer_chart_data)
        .map(|slice| LegendEntry {
            id: slice.id.clone(),
            label: slice.label.clone(),
            color: slice.color.clone(),
        })
        .collect()
}

/// Picks the placeholder to show instead of the chart, if any.
pub fn chart_placeholder(
    plan: Option<&BudgetPlan>,
    data: &BudgetGoalChartData,
) -> Option<ChartPlaceholder> {
    if !plan.is_some_and(BudgetPlan::has_goal) {
        return Some(ChartPlaceholder::NoGoal);
    }
    if non_zero(&data.inner_chart_data).next().is_none() {
        return Some(ChartPlaceholder::Loading);
    }
    None
}

/// Assembles the full render contract for one view mode.
pub fn build_chart_view(
    plan: Option<&BudgetPlan>,
    data: &BudgetGoalChartData,
    view: ChartViewMode,
) -> BudgetChartView {
    let placeholder = chart_placeholder(plan, data);
    let ready = placeholder.is_none();

    BudgetChartView {
        plan_id: plan.map(|p| p.id.clone()).filter(|id| !id.is_empty()),
        view,
        total_goal: data.total_goal,
        total_paid: data.total_paid,
        placeholder,
        message: placeholder.map(|p| p.message().to_string()),
        series: ready.then(|| derive_ring_series(data, view)),
        legend: if ready {
            legend_entries(data)
        } else {
            Vec::new()
        },
    }
}
