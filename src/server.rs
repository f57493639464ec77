//! Router assembly — REST routes, CORS, and the static SPA fallback.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::tasks::routes::{TaskRouteState, task_routes};
use crate::tasks::store::TaskStore;
use crate::workers::routes::{WorkerRouteState, worker_routes};
use crate::workers::store::WorkerStore;

/// Build the full application router.
///
/// Any path the API doesn't match is served from `public_dir`, with
/// `index.html` answering paths that match no file so client-side routing
/// keeps working.
pub fn app(workers: Arc<WorkerStore>, tasks: Arc<TaskStore>, public_dir: &Path) -> Router {
    let static_files =
        ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    Router::new()
        .merge(worker_routes(WorkerRouteState { store: workers }))
        .merge(task_routes(TaskRouteState { store: tasks }))
        .fallback_service(static_files)
        .layer(CorsLayer::permissive())
}
