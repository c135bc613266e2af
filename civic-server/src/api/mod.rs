//! API 路由模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 |
//! | /api/v1/complaints/submit | POST | 市民提交投诉 |
//! | /api/v1/complaints/all | GET | 全部投诉 (最新在前) |
//! | /api/v1/org/login | POST | 组织登录 (mock) |
//! | /api/v1/org/complaints/{org_id} | GET | 组织可见投诉 (按优先级) |
//! | /api/v1/org/status/update | PUT | 更新投诉状态 |

pub mod complaints;
pub mod health;
pub mod org;

use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use http::{HeaderName, HeaderValue, Method, StatusCode, header};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::Config;
use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request body limit
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Request ID generator (uuid v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Routes under `/api/v1`, no middleware
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/complaints/submit", post(complaints::submit))
        .route("/complaints/all", get(complaints::list_all))
        .route("/org/login", post(org::login))
        .route("/org/complaints/{org_id}", get(org::list_complaints))
        .route("/org/status/update", put(org::update_status))
}

/// Full application: routes, middleware and state
pub fn router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    let routes = Router::new()
        .route("/health", get(health::health_check))
        .nest(API_PREFIX, api_routes());
    with_layers(routes, state, config)
}

/// Shared middleware stack: body limit (1MB -> 413), request timeout (408),
/// CORS, tracing and request id
fn with_layers(
    routes: Router<AppState>,
    state: AppState,
    config: &Config,
) -> anyhow::Result<Router> {
    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .with_context(|| format!("Invalid CORS_ORIGIN {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Ok(routes
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(config.request_timeout_ms),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ComplaintStore;
    use axum::body::Body;
    use tower::ServiceExt;

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_millis(500)).await;
        "done"
    }

    fn slow_app(request_timeout_ms: u64) -> Router {
        let config = Config {
            request_timeout_ms,
            ..Config::default()
        };
        let state = AppState::new(ComplaintStore::new(config.org_credentials.clone()));
        with_layers(Router::new().route("/slow", get(slow)), state, &config).unwrap()
    }

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let response = slow_app(20)
            .oneshot(http::Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_request_within_timeout_succeeds() {
        let response = slow_app(5_000)
            .oneshot(http::Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_cors_origin_is_rejected() {
        let config = Config {
            cors_origin: "bad\norigin".into(),
            ..Config::default()
        };
        let state = AppState::new(ComplaintStore::new(Vec::new()));
        assert!(router(state, &config).is_err());
    }
}
