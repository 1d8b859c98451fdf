/// Task store endpoints
///
/// Ownership-scoped CRUD on tasks. Every route here sits behind the JWT
/// middleware layer, which injects an `AuthContext`; the authenticated
/// account id scopes every query, so one account can never see or touch
/// another account's tasks. A task that exists but belongs to someone else is
/// reported exactly like a task that does not exist.
///
/// # Endpoints
///
/// - `POST /api/tasks` - Create task
/// - `GET /api/tasks` - List caller's tasks (insertion order)
/// - `PUT /api/tasks/:id` - Partial update
/// - `DELETE /api/tasks/:id` - Delete

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use taskdeck_shared::{
    auth::middleware::AuthContext,
    models::task::{CreateTask, Task, TaskPriority, UpdateTask},
};
use uuid::Uuid;

/// Create task request
///
/// camelCase wire format; `priority` defaults to normal when omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title (must be non-empty)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Due date (required)
    pub due_date: Option<NaiveDate>,

    /// Priority (low/normal/high)
    #[serde(default)]
    pub priority: TaskPriority,
}

fn field_error(field: &str, message: &str) -> ApiError {
    ApiError::ValidationError(vec![ValidationErrorDetail {
        field: field.to_string(),
        message: message.to_string(),
    }])
}

/// Create a new task owned by the caller
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {
///   "title": "Buy milk",
///   "dueDate": "2024-01-01",
///   "priority": "low"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Empty title or missing due date
/// - `401 Unauthorized`: Missing/invalid token
/// - `500 Internal Server Error`: Server error
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    // Validate before any data access; a rejected request creates no record
    let Json(req) = payload?;

    let title = req.title.trim();
    if title.is_empty() {
        return Err(field_error("title", "Title must not be empty"));
    }
    let due_date = req
        .due_date
        .ok_or_else(|| field_error("dueDate", "Due date is required"))?;

    let task = Task::create(
        &state.db,
        CreateTask {
            owner_id: auth.user_id,
            title: title.to_string(),
            description: req.description,
            due_date,
            priority: req.priority,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// List all tasks owned by the caller
///
/// Returns tasks in insertion order. Never includes another account's tasks.
///
/// # Endpoint
///
/// ```text
/// GET /api/tasks
/// Authorization: Bearer <token>
/// ```
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_owner(&state.db, auth.user_id).await?;

    Ok(Json(tasks))
}

/// Partially update a task owned by the caller
///
/// Applies only the fields present in the body. Returns 404 when no task with
/// that id is owned by the caller, deliberately indistinguishable from "task
/// exists but belongs to someone else".
///
/// # Endpoint
///
/// ```text
/// PUT /api/tasks/:id
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// { "completed": true }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Unparseable body, empty patch, or present-but-empty title
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: No such task owned by the caller
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTask>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let Json(mut patch) = payload?;

    if patch.is_empty() {
        return Err(field_error("body", "Patch must contain at least one field"));
    }

    if let Some(ref title) = patch.title {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(field_error("title", "Title must not be empty"));
        }
        patch.title = Some(trimmed.to_string());
    }

    let task = Task::update(&state.db, id, auth.user_id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Delete a task owned by the caller
///
/// Same ownership check and 404 semantics as update.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/tasks/:id
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Missing/invalid token
/// - `404 Not Found`: No such task owned by the caller
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = Task::delete(&state.db, id, auth.user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
