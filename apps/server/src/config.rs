use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use wgplanner_core::constants::DEFAULT_CHART_CACHE_CAPACITY;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Base URL of the WG Planner REST API that owns budget plans.
    pub upstream_api_url: String,
    /// Timeout of a single call to the upstream API.
    pub upstream_timeout: Duration,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Most budget plans whose chart data is kept in memory.
    pub chart_cache_capacity: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("WG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid WG_LISTEN_ADDR")?;
        let upstream_api_url = std::env::var("WG_UPSTREAM_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .trim_end_matches('/')
            .to_string();
        let cors_allow = std::env::var("WG_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("WG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let upstream_timeout_ms: u64 = std::env::var("WG_UPSTREAM_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .unwrap_or(10000);
        let chart_cache_capacity: usize = std::env::var("WG_CHART_CACHE_CAPACITY")
            .unwrap_or_else(|_| DEFAULT_CHART_CACHE_CAPACITY.to_string())
            .parse()
            .unwrap_or(DEFAULT_CHART_CACHE_CAPACITY);
        Ok(Self {
            listen_addr,
            upstream_api_url,
            upstream_timeout: Duration::from_millis(upstream_timeout_ms),
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            chart_cache_capacity,
        })
    }
}
