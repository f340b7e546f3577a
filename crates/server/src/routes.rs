use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use once_cell::sync::Lazy;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::metrics;
use crate::state::AppState;

pub mod counter;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> impl IntoResponse {
    metrics::encode_metrics()
}

/// Build the full application router: page, JSON API, health and metrics
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // 注册指标，保证 /metrics 在首次操作前也能看到该序列
    Lazy::force(&metrics::COUNTER_OPERATIONS_TOTAL);

    // Page routes (server-rendered HTML)
    let page = Router::new()
        .route("/", get(counter::index))
        .route("/counter", get(counter::counter_page))
        .route("/counter/increment", post(counter::page_increment))
        .route("/counter/decrement", post(counter::page_decrement))
        .route("/counter/reset", post(counter::page_reset));

    // JSON API routes
    let api = Router::new()
        .route("/api/counters/:name", get(counter::api_get))
        .route("/api/counters/:name/increment", post(counter::api_increment))
        .route("/api/counters/:name/decrement", post(counter::api_decrement))
        .route("/api/counters/:name/reset", post(counter::api_reset));

    // Ops routes
    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler));

    // Compose
    page
        .merge(api)
        .merge(ops)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
