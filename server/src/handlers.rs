//! Route handlers. Each one makes exactly one store call.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use todo_core::{CreateTodo, Todo, TodoId};
use tracing::{debug, info};

use crate::error::{ApiError, MessageBody};
use crate::SharedStore;

pub async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store.list().await?;
    debug!(count = todos.len(), "listed todos");
    Ok(Json(todos))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let todo = store.insert(input.validate()?).await?;
    info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn complete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id: TodoId = id.parse()?;
    let matched = store.complete(id).await?;
    debug!(%id, matched, "todo completed");
    Ok(Json(MessageBody::new("Todo updated successfully")))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id: TodoId = id.parse()?;
    let deleted = store.delete(id).await?;
    debug!(%id, deleted, "todo deleted");
    Ok(Json(MessageBody::new("Todo deleted successfully")))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health(State(store): State<SharedStore>) -> Result<Json<HealthResponse>, ApiError> {
    store.ping().await?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
