use std::sync::Arc;

use crate::{config::Config, upstream::RestBudgetPlanProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wgplanner_core::budgets::{BudgetChartService, BudgetChartServiceTrait};

pub struct AppState {
    pub chart_service: Arc<dyn BudgetChartServiceTrait>,
}

/// Installs the global subscriber. `WG_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("WG_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(RestBudgetPlanProvider::new(
        &config.upstream_api_url,
        config.upstream_timeout,
    )?);
    tracing::info!("Budget plans are served by {}", config.upstream_api_url);

    let chart_service = Arc::new(BudgetChartService::with_capacity(
        provider,
        config.chart_cache_capacity,
    ));
    Ok(Arc::new(AppState { chart_service }))
}
