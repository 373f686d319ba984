//! REST client for the WG planner API that owns budget plans.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use urlencoding::encode;
use wgplanner_core::budgets::{BudgetPlan, BudgetPlanProviderTrait, EntityId};
use wgplanner_core::errors::{Error, Result, ValidationError};

pub struct RestBudgetPlanProvider {
    client: reqwest::Client,
    base_url: String,
}

impl RestBudgetPlanProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of a plan, with the id encoded as exactly one path segment.
    fn plan_url(&self, plan_id: &EntityId) -> Result<String> {
        // Dot segments survive percent-encoding and would be resolved away
        if matches!(plan_id.as_str(), "." | "..") {
            return Err(ValidationError::InvalidInput(format!(
                "Invalid budget plan id '{}'",
                plan_id
            ))
            .into());
        }
        Ok(format!(
            "{}/budgetplanning/{}",
            self.base_url,
            encode(plan_id.as_str())
        ))
    }
}

#[async_trait]
impl BudgetPlanProviderTrait for RestBudgetPlanProvider {
    async fn get_budget_plan(
        &self,
        plan_id: &EntityId,
        bearer_token: Option<&str>,
    ) -> Result<BudgetPlan> {
        let url = self.plan_url(plan_id)?;
        let mut request = self.client.get(&url);
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Provider(format!("GET {} failed: {}", url, e)))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(Error::Unauthorized(format!(
                    "budget plan {} was refused by the API",
                    plan_id
                )));
            }
            StatusCode::NOT_FOUND => return Err(Error::NotFound(plan_id.to_string())),
            status => {
                tracing::warn!("GET {} answered {}", url, status);
                return Err(Error::Provider(format!("GET {} answered {}", url, status)));
            }
        }

        response
            .json::<BudgetPlan>()
            .await
            .map_err(|e| Error::Provider(format!("Invalid budget plan payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> RestBudgetPlanProvider {
        RestBudgetPlanProvider::new("http://api.local/", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_plan_url_for_plain_id() {
        assert_eq!(
            provider().plan_url(&EntityId::from("42")).unwrap(),
            "http://api.local/budgetplanning/42"
        );
    }

    #[test]
    fn test_plan_url_keeps_id_in_one_segment() {
        let provider = provider();

        assert_eq!(
            provider.plan_url(&EntityId::from("../../users/me")).unwrap(),
            "http://api.local/budgetplanning/..%2F..%2Fusers%2Fme"
        );
        assert_eq!(
            provider.plan_url(&EntityId::from("1?admin=true")).unwrap(),
            "http://api.local/budgetplanning/1%3Fadmin%3Dtrue"
        );
        assert_eq!(
            provider.plan_url(&EntityId::from("a b#c")).unwrap(),
            "http://api.local/budgetplanning/a%20b%23c"
        );
    }

    #[test]
    fn test_plan_url_rejects_dot_segments() {
        for id in [".", ".."] {
            let err = provider().plan_url(&EntityId::from(id)).unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
    }
}
