use axum::{
    body::Bytes,
    extract::{Extension, State},
};

use crate::error::ApiError;
use crate::gatekeeper::guards::TODO_NOT_FOUND;
use crate::middleware::{ApiResponse, ApiResult, ResolvedToDo};
use crate::models::{NewToDo, ToDo, ToDoChanges};
use crate::state::AppState;

use super::decode_body;

/// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Vec<ToDo>> {
    Ok(ApiResponse::success(state.services.todos.get_all_todos()))
}

/// POST /todos
///
/// The owner id is stored as given; it is not required to reference an existing user.
pub async fn create_todo(State(state): State<AppState>, body: Bytes) -> ApiResult<ToDo> {
    let new_todo: NewToDo = decode_body(&body)?;
    let todo = state.services.todos.create_todo(new_todo);
    tracing::info!("To-do {} created for user {}", todo.id, todo.user_id);
    Ok(ApiResponse::created(todo))
}

/// GET /todos/:id
pub async fn show_todo(Extension(ResolvedToDo(todo)): Extension<ResolvedToDo>) -> ApiResult<ToDo> {
    Ok(ApiResponse::success(todo))
}

/// PUT /todos/:id
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(ResolvedToDo(todo)): Extension<ResolvedToDo>,
    body: Bytes,
) -> ApiResult<ToDo> {
    let changes: ToDoChanges = decode_body(&body)?;
    let updated = state
        .services
        .todos
        .update_todo(todo.id, changes)
        .ok_or_else(|| ApiError::not_found(TODO_NOT_FOUND))?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /todos/:id
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(ResolvedToDo(todo)): Extension<ResolvedToDo>,
) -> ApiResult<()> {
    state
        .services
        .todos
        .delete_todo(todo.id)
        .ok_or_else(|| ApiError::not_found(TODO_NOT_FOUND))?;
    tracing::info!("To-do {} deleted", todo.id);
    Ok(ApiResponse::no_content())
}
