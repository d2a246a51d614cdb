/**
 * Task API Handlers
 *
 * The mutation surface the board page drives from the browser. Every
 * route requires a resolvable session cookie; the handlers re-check the
 * guards the view applies client-side (non-empty text, supporter flag for
 * edits) because a server cannot rely on the browser for authorization.
 * Point mutations are additionally scoped to the caller: a task id that
 * is not in the caller's own list answers 404, the same as an id that
 * does not exist at all.
 *
 * # Routes
 *
 * - `GET /api/tasks` - list the caller's tasks
 * - `POST /api/tasks` - add a task, returning the created document
 * - `PATCH /api/tasks/{id}` - edit a task's text (supporters only)
 * - `DELETE /api/tasks/{id}` - delete a task
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::board::dates::format_created;
use crate::board::task::Task;
use crate::error::BoardError;
use crate::session::SessionUser;
use crate::store::{TaskFields, TaskPatch, TaskStore};

/// Body of `POST /api/tasks` and `PATCH /api/tasks/{id}`
#[derive(Debug, Deserialize)]
pub struct TaskTextRequest {
    /// Task text; must be non-empty
    pub task: String,
}

/// List the caller's tasks, formatted dates attached
pub async fn list_tasks(
    State(store): State<Arc<dyn TaskStore>>,
    SessionUser(session): SessionUser,
) -> Result<Json<Vec<Task>>, BoardError> {
    let mut tasks = store.list_for_owner(&session.user_id).await?;
    for task in &mut tasks {
        task.created_formatted = Some(format_created(&task.created));
    }
    Ok(Json(tasks))
}

/// Add a task owned by the caller
///
/// Returns the created document, including the store-assigned id, so the
/// page can append it to its local list.
pub async fn add_task(
    State(store): State<Arc<dyn TaskStore>>,
    SessionUser(session): SessionUser,
    Json(request): Json<TaskTextRequest>,
) -> Result<Json<Task>, BoardError> {
    if request.task.is_empty() {
        return Err(BoardError::EmptyInput);
    }

    let created = Utc::now();
    let id = store
        .insert(TaskFields {
            created,
            task: request.task.clone(),
            user_id: session.user_id.clone(),
            name: session.name.clone(),
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to add task for {}: {}", session.user_id, e);
            BoardError::from(e)
        })?;

    tracing::info!("Task {} added for {}", id, session.user_id);

    Ok(Json(Task {
        id,
        created,
        created_formatted: Some(format_created(&created)),
        task: request.task,
        user_id: session.user_id,
        name: session.name,
    }))
}

/// Verify that a task belongs to the caller before a point mutation
///
/// The store's update and delete are point operations with no owner
/// filter, so the ownership invariant is enforced here, through the same
/// owner-filtered query the page loads from. An id owned by someone else
/// is indistinguishable from a missing one.
async fn ensure_owned(
    store: &dyn TaskStore,
    user_id: &str,
    id: &str,
) -> Result<(), BoardError> {
    let owned = store.list_for_owner(user_id).await?;
    if owned.iter().any(|t| t.id == id) {
        Ok(())
    } else {
        tracing::warn!("User {} targeted task {} they do not own", user_id, id);
        Err(BoardError::UnknownTask { id: id.to_string() })
    }
}

/// Edit a task's text; supporters only, own tasks only
pub async fn update_task(
    State(store): State<Arc<dyn TaskStore>>,
    SessionUser(session): SessionUser,
    Path(id): Path<String>,
    Json(request): Json<TaskTextRequest>,
) -> Result<StatusCode, BoardError> {
    if !session.supporter {
        tracing::warn!("Non-supporter {} attempted an edit", session.user_id);
        return Err(BoardError::SupporterRequired);
    }
    if request.task.is_empty() {
        return Err(BoardError::EmptyInput);
    }

    ensure_owned(store.as_ref(), &session.user_id, &id).await?;

    store
        .update(&id, TaskPatch { task: request.task })
        .await
        .map_err(|e| {
            tracing::error!("Failed to update task {}: {}", id, e);
            BoardError::from(e)
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete one of the caller's tasks; irreversible, no soft delete
pub async fn delete_task(
    State(store): State<Arc<dyn TaskStore>>,
    SessionUser(session): SessionUser,
    Path(id): Path<String>,
) -> Result<StatusCode, BoardError> {
    ensure_owned(store.as_ref(), &session.user_id, &id).await?;

    store.delete(&id).await.map_err(|e| {
        tracing::error!("Failed to delete task {}: {}", id, e);
        BoardError::from(e)
    })?;

    tracing::info!("Task {} deleted by {}", id, session.user_id);
    Ok(StatusCode::NO_CONTENT)
}
