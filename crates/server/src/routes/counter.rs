use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use serde::Serialize;
use service::counter::CounterName;

use crate::errors::ApiError;
use crate::metrics;
use crate::page::{render_counter_page, CounterOp};
use crate::state::AppState;

#[derive(Serialize, Debug)]
pub struct CounterValue {
    pub name: String,
    pub value: i64,
}

#[derive(Serialize, Debug)]
pub struct CounterChanged {
    pub name: String,
    pub value: i64,
    pub message: String,
}

async fn apply(state: &AppState, name: &CounterName, op: CounterOp) -> Result<i64, ApiError> {
    let value = match op {
        CounterOp::Increment => state.counters.increment(name).await?,
        CounterOp::Decrement => state.counters.decrement(name).await?,
        CounterOp::Reset => state.counters.reset(name).await?,
    };
    metrics::record_operation(op.as_str());
    Ok(value)
}

/// Root redirects to the counter page
pub async fn index() -> Redirect {
    Redirect::to("/counter")
}

/// Counter page showing the default counter
pub async fn counter_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let value = state.counters.get_value(&CounterName::default()).await?;
    Ok(Html(render_counter_page(value, None)))
}

async fn page_apply(state: AppState, op: CounterOp) -> Result<Html<String>, ApiError> {
    let value = apply(&state, &CounterName::default(), op).await?;
    Ok(Html(render_counter_page(value, Some(op))))
}

pub async fn page_increment(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    page_apply(state, CounterOp::Increment).await
}

pub async fn page_decrement(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    page_apply(state, CounterOp::Decrement).await
}

pub async fn page_reset(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    page_apply(state, CounterOp::Reset).await
}

/// 读取计数器当前值（不存在时自动创建）
pub async fn api_get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CounterValue>, ApiError> {
    let name = CounterName::new(name)?;
    let value = state.counters.get_value(&name).await?;
    Ok(Json(CounterValue { name: name.into(), value }))
}

async fn api_apply(state: AppState, name: String, op: CounterOp) -> Result<Json<CounterChanged>, ApiError> {
    let name = CounterName::new(name)?;
    let value = apply(&state, &name, op).await?;
    Ok(Json(CounterChanged { name: name.into(), value, message: op.message(value) }))
}

pub async fn api_increment(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CounterChanged>, ApiError> {
    api_apply(state, name, CounterOp::Increment).await
}

pub async fn api_decrement(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CounterChanged>, ApiError> {
    api_apply(state, name, CounterOp::Decrement).await
}

pub async fn api_reset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CounterChanged>, ApiError> {
    api_apply(state, name, CounterOp::Reset).await
}
