//! REST endpoints for the workers collection.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::error::ApiError;

use super::model::{NewWorker, WorkerQuery};
use super::store::WorkerStore;

/// Shared state for worker routes.
#[derive(Clone)]
pub struct WorkerRouteState {
    pub store: Arc<WorkerStore>,
}

/// GET /workers
///
/// Returns the full collection in storage order.
async fn list_workers(
    State(state): State<WorkerRouteState>,
) -> Result<impl IntoResponse, ApiError> {
    let workers = state.store.list().await?;
    Ok(Json(workers))
}

/// POST /workers
///
/// Requires non-empty `name` and `category`; everything else defaults.
async fn create_worker(
    State(state): State<WorkerRouteState>,
    Json(input): Json<NewWorker>,
) -> Result<impl IntoResponse, ApiError> {
    if input.name.is_empty() || input.category.is_empty() {
        return Err(ApiError::MissingField("Name and category required"));
    }
    let worker = state.store.create(input).await?;
    info!(id = worker.id, category = %worker.category, "Worker created");
    Ok((StatusCode::CREATED, Json(worker)))
}

/// GET /workers/search?category=&location=
async fn search_workers(
    State(state): State<WorkerRouteState>,
    Query(query): Query<WorkerQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let results = state.store.search(&query).await?;
    Ok(Json(results))
}

/// Build the worker REST routes.
pub fn worker_routes(state: WorkerRouteState) -> Router {
    Router::new()
        .route("/workers", get(list_workers).post(create_worker))
        .route("/workers/search", get(search_workers))
        .with_state(state)
}
