// Guards that halt on missing entities, empty collections and disabled users.
//
// Existence guards store what they resolve on the context. Stages that depend on
// an earlier guard read it from there and report `PreconditionNotMet` when it is
// absent instead of assuming the lookup succeeded.

use crate::error::ApiError;
use crate::services::Services;

use super::context::GateContext;
use super::stage::{Halt, Stage, StageKind};

pub const USER_NOT_FOUND: &str = "User not found";
pub const TODO_NOT_FOUND: &str = "To-do not found";
pub const TODO_NOT_FOUND_FOR_USER: &str = "To-do item not found for this user";
pub const USER_DISABLED: &str = "This user is disabled";
pub const NO_USERS: &str = "There are no current users";
pub const NO_TODOS: &str = "There are no current toDos";
pub const NO_TODOS_FOR_USER: &str = "There are no current toDos of this user";

const VALIDATED_ID: &str = "a validated integer path parameter";

fn validated_id(ctx: &GateContext, stage: &'static str, param: &str) -> Result<i64, Halt> {
    ctx.id(param)
        .ok_or_else(|| ApiError::precondition_not_met(stage, VALIDATED_ID).into())
}

fn resolve_user(ctx: &mut GateContext, services: &Services, stage: &'static str, param: &str) -> Result<(), Halt> {
    let user_id = validated_id(ctx, stage, param)?;
    match services.users.get_user_by_id(user_id) {
        Some(user) => {
            ctx.user = Some(user);
            Ok(())
        }
        None => {
            tracing::warn!("User {} not found", user_id);
            Err(ApiError::not_found(USER_NOT_FOUND).into())
        }
    }
}

/// 404 `User not found` unless the user named by `param` exists
#[derive(Debug, Clone, Copy)]
pub struct UserExists {
    pub param: &'static str,
}

impl UserExists {
    pub const fn new(param: &'static str) -> Self {
        Self { param }
    }
}

impl Stage for UserExists {
    fn name(&self) -> &'static str {
        "user_exists"
    }

    fn kind(&self) -> StageKind {
        StageKind::Existence
    }

    fn check(&self, ctx: &mut GateContext, services: &Services) -> Result<(), Halt> {
        resolve_user(ctx, services, self.name(), self.param)
    }
}

/// 404 `To-do not found` unless the to-do named by `param` exists
#[derive(Debug, Clone, Copy)]
pub struct ToDoExists {
    pub param: &'static str,
}

impl ToDoExists {
    pub const fn new(param: &'static str) -> Self {
        Self { param }
    }
}

impl Stage for ToDoExists {
    fn name(&self) -> &'static str {
        "todo_exists"
    }

    fn kind(&self) -> StageKind {
        StageKind::Existence
    }

    fn check(&self, ctx: &mut GateContext, services: &Services) -> Result<(), Halt> {
        let todo_id = validated_id(ctx, self.name(), self.param)?;
        match services.todos.get_todo_by_id(todo_id) {
            Some(todo) => {
                ctx.todo = Some(todo);
                Ok(())
            }
            None => {
                tracing::warn!("To-do {} not found", todo_id);
                Err(ApiError::not_found(TODO_NOT_FOUND).into())
            }
        }
    }
}

/// Confirms the user first, then a to-do with the given id owned by that user.
///
/// A missing user always wins over a missing or foreign to-do.
#[derive(Debug, Clone, Copy)]
pub struct ToDoOwnedByUser {
    pub user_param: &'static str,
    pub todo_param: &'static str,
}

impl ToDoOwnedByUser {
    pub const fn new(user_param: &'static str, todo_param: &'static str) -> Self {
        Self { user_param, todo_param }
    }
}

impl Stage for ToDoOwnedByUser {
    fn name(&self) -> &'static str {
        "todo_owned_by_user"
    }

    fn kind(&self) -> StageKind {
        StageKind::Existence
    }

    fn check(&self, ctx: &mut GateContext, services: &Services) -> Result<(), Halt> {
        resolve_user(ctx, services, self.name(), self.user_param)?;

        let user_id = validated_id(ctx, self.name(), self.user_param)?;
        let todo_id = validated_id(ctx, self.name(), self.todo_param)?;
        match services.todos.get_todo_by_user_id_and_todo_id(user_id, todo_id) {
            Some(todo) => {
                ctx.todo = Some(todo);
                Ok(())
            }
            None => {
                tracing::warn!("To-do {} not found for user {}", todo_id, user_id);
                Err(ApiError::not_found(TODO_NOT_FOUND_FOR_USER).into())
            }
        }
    }
}

/// 200 `This user is disabled` when the resolved user is disabled.
///
/// Must follow a guard that resolved the user; otherwise it reports a
/// precondition failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserNotDisabled;

impl Stage for UserNotDisabled {
    fn name(&self) -> &'static str {
        "user_not_disabled"
    }

    fn kind(&self) -> StageKind {
        StageKind::State
    }

    fn check(&self, ctx: &mut GateContext, _services: &Services) -> Result<(), Halt> {
        let user = ctx
            .user
            .as_ref()
            .ok_or_else(|| Halt::from(ApiError::precondition_not_met(self.name(), "a resolved user")))?;

        if user.is_disabled {
            tracing::info!("User {} is disabled", user.id);
            return Err(Halt::Notice(USER_DISABLED));
        }
        Ok(())
    }
}

/// Collection an emptiness guard inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    ToDos,
    ToDosOfUser { param: &'static str },
}

impl Collection {
    fn notice(&self) -> &'static str {
        match self {
            Collection::Users => NO_USERS,
            Collection::ToDos => NO_TODOS,
            Collection::ToDosOfUser { .. } => NO_TODOS_FOR_USER,
        }
    }
}

/// Short-circuits list routes with an informational 200 when there is nothing to list
#[derive(Debug, Clone, Copy)]
pub struct NotEmpty {
    pub collection: Collection,
}

impl NotEmpty {
    pub const fn users() -> Self {
        Self { collection: Collection::Users }
    }

    pub const fn todos() -> Self {
        Self { collection: Collection::ToDos }
    }

    pub const fn todos_of_user(param: &'static str) -> Self {
        Self { collection: Collection::ToDosOfUser { param } }
    }
}

impl Stage for NotEmpty {
    fn name(&self) -> &'static str {
        match self.collection {
            Collection::Users => "users_not_empty",
            Collection::ToDos => "todos_not_empty",
            Collection::ToDosOfUser { .. } => "user_todos_not_empty",
        }
    }

    fn kind(&self) -> StageKind {
        StageKind::Emptiness
    }

    fn check(&self, ctx: &mut GateContext, services: &Services) -> Result<(), Halt> {
        let empty = match self.collection {
            Collection::Users => services.users.get_all_users().is_empty(),
            Collection::ToDos => services.todos.get_all_todos().is_empty(),
            Collection::ToDosOfUser { param } => {
                let user_id = validated_id(ctx, self.name(), param)?;
                services.todos.get_todos_by_user_id(user_id).is_empty()
            }
        };

        if empty {
            tracing::info!("{}: nothing to list", self.name());
            return Err(Halt::Notice(self.collection.notice()));
        }
        Ok(())
    }
}
