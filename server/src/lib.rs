//! HTTP surface for the task service.
//!
//! # Design
//! The four store operations map onto `/api/tasks` routes. Handlers hold the
//! store behind a single `RwLock`: `list` takes a read guard, the mutating
//! operations take a write guard, so id assignment, append, in-place toggle,
//! and removal each run atomically with respect to every concurrent request.
//! Store errors are translated to status codes here and nowhere else.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};

pub mod store;

pub use store::{StoreError, Task, TaskStore};

/// Request payload for creating a task. The completion flag is not
/// client-settable; new tasks always start incomplete.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

pub type Db = Arc<RwLock<TaskStore>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TaskStore::new()));
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(toggle_task).delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    Json(db.read().await.list())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), StatusCode> {
    let task = db
        .write()
        .await
        .create(input.title, input.description)
        .map_err(error_status)?;
    tracing::debug!(id = task.id, "created task");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn toggle_task(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, StatusCode> {
    let task = db.write().await.toggle(id).map_err(error_status)?;
    tracing::debug!(id, is_completed = task.is_completed, "toggled task");
    Ok(Json(task))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    db.write().await.delete(id).map_err(error_status)?;
    tracing::debug!(id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}

fn error_status(err: StoreError) -> StatusCode {
    match err {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::EmptyTitle => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
