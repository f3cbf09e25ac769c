use axum::{
    body::Bytes,
    extract::{Extension, State},
};

use crate::error::ApiError;
use crate::gatekeeper::guards::USER_NOT_FOUND;
use crate::middleware::{ApiResponse, ApiResult, ResolvedToDo, ResolvedUser};
use crate::models::{NewUser, ToDo, User, UserChanges};
use crate::state::AppState;

use super::decode_body;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    Ok(ApiResponse::success(state.services.users.get_all_users()))
}

/// POST /users
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> ApiResult<User> {
    let new_user: NewUser = decode_body(&body)?;
    let user = state.services.users.create_user(new_user);
    tracing::info!("User {} created", user.id);
    Ok(ApiResponse::created(user))
}

/// GET /users/:id
pub async fn show_user(Extension(ResolvedUser(user)): Extension<ResolvedUser>) -> ApiResult<User> {
    Ok(ApiResponse::success(user))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Extension(ResolvedUser(user)): Extension<ResolvedUser>,
    body: Bytes,
) -> ApiResult<User> {
    let changes: UserChanges = decode_body(&body)?;
    let updated = state
        .services
        .users
        .update_user(user.id, changes)
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(ResolvedUser(user)): Extension<ResolvedUser>,
) -> ApiResult<()> {
    state
        .services
        .users
        .delete_user(user.id)
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;
    tracing::info!("User {} deleted", user.id);
    Ok(ApiResponse::no_content())
}

/// GET /users/:id/todos
pub async fn list_user_todos(
    State(state): State<AppState>,
    Extension(ResolvedUser(user)): Extension<ResolvedUser>,
) -> ApiResult<Vec<ToDo>> {
    Ok(ApiResponse::success(state.services.todos.get_todos_by_user_id(user.id)))
}

/// GET /users/:id/todos/:toDoId
pub async fn show_user_todo(Extension(ResolvedToDo(todo)): Extension<ResolvedToDo>) -> ApiResult<ToDo> {
    Ok(ApiResponse::success(todo))
}
