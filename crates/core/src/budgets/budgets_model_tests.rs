//! Tests for budget plan deserialization and chart model serialization.

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ==================== EntityId ====================

#[test]
fn test_entity_id_accepts_integers_and_strings() {
    let from_int: EntityId = serde_json::from_str("7").unwrap();
    let from_str: EntityId = serde_json::from_str("\"7\"").unwrap();

    assert_eq!(from_int, from_str);
    assert_eq!(from_int.as_str(), "7");
    assert_eq!(serde_json::to_string(&from_int).unwrap(), "\"7\"");
}

#[test]
fn test_entity_id_rejects_other_shapes() {
    assert!(serde_json::from_str::<EntityId>("true").is_err());
    assert!(serde_json::from_str::<EntityId>("{}").is_err());
}

// ==================== BudgetPlan Deserialization ====================

#[test]
fn test_deserialize_backend_payload() {
    let payload = r#"{
        "id": 3,
        "title": "Summer party",
        "description": null,
        "goal": 250.5,
        "deadline": "Tue, 01 Jul 2025 00:00:00 GMT",
        "created_date": "Mon, 02 Jun 2025 10:00:00 GMT",
        "creator": {"id": 1},
        "wg_id": 9,
        "users": [{"id": 1, "name": "Alice"}],
        "costs": [
            {
                "id": 11,
                "title": "Drinks",
                "description": "",
                "goal": 120,
                "paid": 60.25,
                "users": [{"id": 1, "name": "Alice"}, {"id": "2", "name": "Bob"}]
            },
            {"id": 12, "title": "Snacks", "goal": 30, "paid": null, "users": null}
        ]
    }"#;

    let plan: BudgetPlan = serde_json::from_str(payload).unwrap();

    assert_eq!(plan.id, EntityId::from("3"));
    assert_eq!(plan.goal, Some(dec!(250.5)));
    assert_eq!(plan.wg_id, Some(EntityId::from("9")));
    assert_eq!(plan.description, None);
    assert!(plan.has_goal());

    let costs = plan.costs.expect("costs present");
    assert_eq!(costs.len(), 2);
    assert_eq!(costs[0].paid_amount(), dec!(60.25));
    assert_eq!(costs[0].users[1].id, EntityId::from("2"));
    assert_eq!(costs[1].paid, None);
    assert_eq!(costs[1].paid_amount(), Decimal::ZERO);
    assert!(costs[1].users.is_empty());
}

#[test]
fn test_deserialize_sparse_payload() {
    let plan: BudgetPlan = serde_json::from_str("{}").unwrap();

    assert_eq!(plan, BudgetPlan::default());
    assert_eq!(plan.goal, None);
    assert_eq!(plan.costs, None);
    assert!(!plan.has_goal());
}

#[test]
fn test_deserialize_null_cost_list_as_absent() {
    let plan: BudgetPlan = serde_json::from_str(r#"{"goal": 10, "costs": null}"#).unwrap();
    assert_eq!(plan.costs, None);
}

#[test]
fn test_null_goal_reads_as_no_goal() {
    let payload = r#"{
        "id": 4,
        "goal": null,
        "costs": [{"id": 1, "goal": 50, "paid": 20, "users": [{"id": 1, "name": "Alice"}]}]
    }"#;

    let plan: BudgetPlan = serde_json::from_str(payload).unwrap();
    let data = aggregate_budget_goal(Some(&plan));

    assert_eq!(plan.goal, None);
    assert_eq!(data, BudgetGoalChartData::empty());
    assert_eq!(
        chart_placeholder(Some(&plan), &data),
        Some(ChartPlaceholder::NoGoal)
    );
}

#[test]
fn test_camel_case_wg_id() {
    let plan: BudgetPlan = serde_json::from_str(r#"{"wgId": "w1"}"#).unwrap();
    assert_eq!(plan.wg_id, Some(EntityId::from("w1")));
}

// ==================== Chart Models ====================

#[test]
fn test_chart_view_mode_serialization() {
    assert_eq!(
        serde_json::to_string(&ChartViewMode::GoalProgress).unwrap(),
        "\"goal\""
    );
    assert_eq!(
        serde_json::from_str::<ChartViewMode>("\"paid\"").unwrap(),
        ChartViewMode::PaidContribution
    );
    assert_eq!(ChartViewMode::default(), ChartViewMode::GoalProgress);
}

#[test]
fn test_chart_data_serializes_camel_case() {
    let data = BudgetGoalChartData {
        total_goal: dec!(100),
        total_paid: dec!(40),
        inner_chart_data: vec![ChartSlice {
            id: "1".to_string(),
            label: "Alice Goal".to_string(),
            value: dec!(100),
            color: "#4ADE80".to_string(),
        }],
        outer_chart_data: vec![],
    };

    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["totalGoal"].as_f64(), Some(100.0));
    assert_eq!(json["totalPaid"].as_f64(), Some(40.0));
    assert_eq!(json["innerChartData"][0]["label"], "Alice Goal");
    assert!(json["outerChartData"].as_array().unwrap().is_empty());
}

#[test]
fn test_placeholder_messages() {
    assert_eq!(
        ChartPlaceholder::NoGoal.message(),
        "No goal set for this budget plan."
    );
    assert_eq!(ChartPlaceholder::Loading.message(), "Loading chart data...");
    assert_eq!(
        serde_json::to_string(&ChartPlaceholder::NoGoal).unwrap(),
        "\"noGoal\""
    );
}
