use std::time::Duration;

use axum::{body::Body, http::Request};
use tower::ServiceExt;
use wgplanner_server::{api::app_router, build_state, config::Config};

#[tokio::test]
async fn healthz_works() {
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        upstream_api_url: "http://127.0.0.1:9".to_string(),
        upstream_timeout: Duration::from_secs(5),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        chart_cache_capacity: 16,
    };
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));
}
