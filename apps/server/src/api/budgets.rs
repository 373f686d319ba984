use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use wgplanner_core::budgets::{
    BudgetChartView, BudgetGoalChartData, BudgetPlan, ChartViewMode, CostListEntry, EntityId,
};
use wgplanner_core::errors::Error as CoreError;

#[derive(Debug, Deserialize)]
struct ChartQuery {
    #[serde(default)]
    view: ChartViewMode,
}

/// Token of an `Authorization: Bearer ...` header, if present.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Reads `?view=goal|paid`, defaulting to the goal view.
fn chart_view_mode(
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> ApiResult<ChartViewMode> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(query.view)
}

/// An empty body is read as `null`.
fn parse_plan(body: &[u8]) -> ApiResult<Option<BudgetPlan>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::Core(CoreError::from(e)))
}

async fn derive_budget_chart(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ChartQuery>, QueryRejection>,
    body: Bytes,
) -> ApiResult<Json<BudgetChartView>> {
    let mode = chart_view_mode(query)?;
    let plan = parse_plan(&body)?;
    let view = state.chart_service.build_chart_view(plan.as_ref(), mode);
    Ok(Json(view))
}

async fn aggregate_budget_chart_data(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<BudgetGoalChartData>> {
    let data = match parse_plan(&body)? {
        Some(plan) => state.chart_service.chart_data(&plan).as_ref().clone(),
        None => BudgetGoalChartData::empty(),
    };
    Ok(Json(data))
}

async fn get_budget_plan_chart(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    query: Result<Query<ChartQuery>, QueryRejection>,
    headers: HeaderMap,
) -> ApiResult<Json<BudgetChartView>> {
    let mode = chart_view_mode(query)?;
    let view = state
        .chart_service
        .get_budget_chart(&EntityId::from(id), bearer_token(&headers), mode)
        .await?;
    Ok(Json(view))
}

async fn get_budget_plan_costs(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<CostListEntry>>> {
    let costs = state
        .chart_service
        .get_cost_list(&EntityId::from(id), bearer_token(&headers))
        .await?;
    Ok(Json(costs))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budget-charts", post(derive_budget_chart))
        .route("/budget-charts/data", post(aggregate_budget_chart_data))
        .route("/budget-plans/{id}/chart", get(get_budget_plan_chart))
        .route("/budget-plans/{id}/costs", get(get_budget_plan_costs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_parse_plan_accepts_empty_and_null_bodies() {
        assert!(parse_plan(b"").unwrap().is_none());
        assert!(parse_plan(b"  \n").unwrap().is_none());
        assert!(parse_plan(b"null").unwrap().is_none());
        assert!(parse_plan(br#"{"goal": 5}"#).unwrap().is_some());
    }

    #[test]
    fn test_parse_plan_rejects_malformed_json() {
        let err = parse_plan(b"{not json").unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::Validation(_))));
    }
}
