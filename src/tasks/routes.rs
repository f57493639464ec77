//! REST endpoints for the tasks collection.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use tracing::info;

use crate::error::ApiError;

use super::model::{NewTask, TaskPatch};
use super::store::TaskStore;

/// Shared state for task routes.
#[derive(Clone)]
pub struct TaskRouteState {
    pub store: Arc<TaskStore>,
}

/// GET /tasks
///
/// Returns the full collection in storage order.
async fn list_tasks(State(state): State<TaskRouteState>) -> Result<impl IntoResponse, ApiError> {
    let tasks = state.store.list().await?;
    Ok(Json(tasks))
}

/// POST /tasks
///
/// Requires non-empty `title`, `type`, and `category`.
async fn create_task(
    State(state): State<TaskRouteState>,
    Json(input): Json<NewTask>,
) -> Result<impl IntoResponse, ApiError> {
    if input.title.is_empty() || input.task_type.is_empty() || input.category.is_empty() {
        return Err(ApiError::MissingField("Title, type, category required"));
    }
    let task = state.store.create(input).await?;
    info!(id = task.id, category = %task.category, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{id}
///
/// Merges the provided fields over the stored task.
async fn update_task(
    State(state): State<TaskRouteState>,
    Path(id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> Result<impl IntoResponse, ApiError> {
    match state.store.update(id, patch).await? {
        Some(task) => {
            info!(id, status = %task.status, "Task updated");
            Ok(Json(task))
        }
        None => Err(ApiError::NotFound("Task not found")),
    }
}

/// DELETE /tasks/{id}
///
/// Removes the task and echoes it back in the response payload.
async fn delete_task(
    State(state): State<TaskRouteState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    match state.store.delete(id).await? {
        Some(task) => {
            info!(id, "Task deleted");
            Ok(Json(serde_json::json!({
                "message": "Task deleted",
                "task": task,
            })))
        }
        None => Err(ApiError::NotFound("Task not found")),
    }
}

/// Build the task REST routes.
pub fn task_routes(state: TaskRouteState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .with_state(state)
}
