//! Budget plan domain models and chart output models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::constants::{LOADING_MESSAGE, NO_GOAL_MESSAGE, UNASSIGNED_ID, UNASSIGNED_NAME};

/// Opaque identifier of a member, cost or budget plan.
///
/// The backend emits integer ids while other clients send strings. Both `1`
/// and `"1"` deserialize to the same id, which always serializes as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntityId {
    Integer(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawEntityId::deserialize(deserializer)? {
            RawEntityId::Integer(id) => EntityId::from(id),
            RawEntityId::Text(id) => EntityId(id),
        })
    }
}

/// A WG member assigned to a cost.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAssignee {
    pub id: EntityId,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
}

impl CostAssignee {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Synthetic member that collects costs nobody is assigned to.
    pub fn unassigned() -> Self {
        Self::new(UNASSIGNED_ID, UNASSIGNED_NAME)
    }
}

/// A line item of a budget plan.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub id: EntityId,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub goal: Option<Decimal>,
    #[serde(default)]
    pub paid: Option<Decimal>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub users: Vec<CostAssignee>,
}

impl Cost {
    /// Goal of this cost. Absent and negative amounts count as zero.
    pub fn goal_amount(&self) -> Decimal {
        non_negative(self.goal)
    }

    /// Amount paid so far. Absent and negative amounts count as zero.
    pub fn paid_amount(&self) -> Decimal {
        non_negative(self.paid)
    }

    pub fn is_fully_paid(&self) -> bool {
        self.paid_amount() >= self.goal_amount()
    }

    /// Paid amount to submit when the cost's check box is toggled: a fully
    /// paid cost is reset to zero, anything else is marked paid in full.
    pub fn toggled_paid_amount(&self) -> Decimal {
        if self.is_fully_paid() {
            Decimal::ZERO
        } else {
            self.goal_amount()
        }
    }

    /// True when the raw input carried a negative goal or paid amount.
    pub(crate) fn has_negative_amount(&self) -> bool {
        self.goal.is_some_and(|v| v < Decimal::ZERO) || self.paid.is_some_and(|v| v < Decimal::ZERO)
    }
}

fn non_negative(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

/// A savings/spending goal of a WG, itemized into costs.
///
/// Only `goal` and `costs` drive the chart; the remaining fields are carried
/// through from the REST payload.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub id: EntityId,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Overall target. A missing key and an explicit `null` both read as
    /// `None`, and a plan without a goal aggregates to the empty chart.
    #[serde(default)]
    pub goal: Option<Decimal>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default, alias = "wg_id")]
    pub wg_id: Option<EntityId>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub users: Vec<CostAssignee>,
    #[serde(default)]
    pub costs: Option<Vec<Cost>>,
}

impl BudgetPlan {
    /// True when the plan carries a positive overall goal.
    pub fn has_goal(&self) -> bool {
        self.goal.is_some_and(|goal| goal > Decimal::ZERO)
    }
}

/// One segment of a ring chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    pub id: String,
    pub label: String,
    pub value: Decimal,
    /// Color for visualization (hex code)
    pub color: String,
}

/// Aggregated ring data for a budget plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGoalChartData {
    /// Effective goal: the plan goal raised to at least the cost goals and payments
    pub total_goal: Decimal,
    pub total_paid: Decimal,
    /// Goal share per member plus the remaining goal
    pub inner_chart_data: Vec<ChartSlice>,
    /// Paid and unpaid share per member plus the remaining goal
    pub outer_chart_data: Vec<ChartSlice>,
}

impl BudgetGoalChartData {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner_chart_data.is_empty() && self.outer_chart_data.is_empty()
    }
}

/// The two mutually exclusive ways of reading the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartViewMode {
    /// Inner ring: goal per member, outer ring: paid/unpaid split
    #[default]
    #[serde(rename = "goal")]
    GoalProgress,
    /// Inner ring: paid per member, outer ring: goal per member
    #[serde(rename = "paid")]
    PaidContribution,
}

/// A slice prepared for rendering in one ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesItem {
    pub id: String,
    pub label: String,
    /// Short label drawn on the arc, only set for inner rings
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub arc_label: Option<String>,
    pub value: Decimal,
    pub color: String,
    /// Share of the ring's percentage base (0-100, whole numbers)
    pub percentage: Decimal,
    /// e.g. `$100 (50%)`
    pub formatted_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSeries {
    /// Denominator the percentages were computed against
    pub percentage_base: Decimal,
    pub data: Vec<SeriesItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualRingSeries {
    pub view: ChartViewMode,
    pub inner: RingSeries,
    pub outer: RingSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub id: String,
    pub label: String,
    pub color: String,
}

/// Message shown instead of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartPlaceholder {
    NoGoal,
    Loading,
}

impl ChartPlaceholder {
    pub fn message(&self) -> &'static str {
        match self {
            ChartPlaceholder::NoGoal => NO_GOAL_MESSAGE,
            ChartPlaceholder::Loading => LOADING_MESSAGE,
        }
    }
}

/// Everything a client needs to draw the budget goal chart for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetChartView {
    pub plan_id: Option<EntityId>,
    pub view: ChartViewMode,
    pub total_goal: Decimal,
    pub total_paid: Decimal,
    pub placeholder: Option<ChartPlaceholder>,
    pub message: Option<String>,
    /// Absent whenever a placeholder applies
    pub series: Option<DualRingSeries>,
    pub legend: Vec<LegendEntry>,
}

/// A cost as shown in the plan's cost list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostListEntry {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    /// Assignee names joined with ", "; empty when nobody is assigned
    pub assignee_names: String,
    pub paid: Decimal,
    pub goal: Decimal,
    /// e.g. `Paid: $50.00 / Goal: $100.00`
    pub amount_label: String,
    pub is_fully_paid: bool,
    pub toggled_paid_amount: Decimal,
}
