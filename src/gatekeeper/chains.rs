// Per-route pipelines.
//
// Routes on `/users/:id` and `/todos/:id` name their identifier `id`; the to-do of
// a user is `toDoId`.

use super::collector::CollectIssues;
use super::guards::{NotEmpty, ToDoExists, ToDoOwnedByUser, UserExists, UserNotDisabled};
use super::pipeline::Pipeline;
use super::rules::{FieldRules, IntegerParam};

pub const ID: &str = "id";
pub const TODO_ID: &str = "toDoId";

fn user_by_id(pipeline: Pipeline) -> Pipeline {
    pipeline
        .stage(IntegerParam::user_id(ID))
        .stage(CollectIssues)
        .stage(UserExists::new(ID))
}

fn todo_by_id(pipeline: Pipeline) -> Pipeline {
    pipeline
        .stage(IntegerParam::todo_id(ID))
        .stage(CollectIssues)
        .stage(ToDoExists::new(ID))
}

/// `GET /users`
pub fn users_list() -> Pipeline {
    Pipeline::new("users_list").stage(NotEmpty::users())
}

/// `POST /users`
pub fn user_create() -> Pipeline {
    Pipeline::new("user_create")
        .stage(FieldRules::user_create())
        .stage(CollectIssues)
}

/// `GET /users/:id`
pub fn user_show() -> Pipeline {
    user_by_id(Pipeline::new("user_show")).stage(UserNotDisabled)
}

/// `PUT /users/:id`
pub fn user_update() -> Pipeline {
    user_by_id(Pipeline::new("user_update"))
        .stage(FieldRules::user_update())
        .stage(CollectIssues)
}

/// `DELETE /users/:id`
pub fn user_delete() -> Pipeline {
    user_by_id(Pipeline::new("user_delete"))
}

/// `GET /users/:id/todos`
pub fn user_todos_list() -> Pipeline {
    user_by_id(Pipeline::new("user_todos_list"))
        .stage(UserNotDisabled)
        .stage(NotEmpty::todos_of_user(ID))
}

/// `GET /users/:id/todos/:toDoId`
pub fn user_todo_show() -> Pipeline {
    Pipeline::new("user_todo_show")
        .stage(IntegerParam::user_id(ID))
        .stage(IntegerParam::todo_id(TODO_ID))
        .stage(CollectIssues)
        .stage(ToDoOwnedByUser::new(ID, TODO_ID))
}

/// `GET /todos`
pub fn todos_list() -> Pipeline {
    Pipeline::new("todos_list").stage(NotEmpty::todos())
}

/// `POST /todos`
pub fn todo_create() -> Pipeline {
    Pipeline::new("todo_create")
        .stage(FieldRules::todo_create())
        .stage(CollectIssues)
}

/// `GET /todos/:id`
pub fn todo_show() -> Pipeline {
    todo_by_id(Pipeline::new("todo_show"))
}

/// `PUT /todos/:id`
pub fn todo_update() -> Pipeline {
    todo_by_id(Pipeline::new("todo_update"))
        .stage(FieldRules::todo_update())
        .stage(CollectIssues)
}

/// `DELETE /todos/:id`
pub fn todo_delete() -> Pipeline {
    todo_by_id(Pipeline::new("todo_delete"))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;
    use crate::error::ApiError;
    use crate::gatekeeper::{GateContext, Gatekeeper, Halt};
    use crate::models::{ToDo, User};
    use crate::services::Services;

    fn gatekeeper() -> Gatekeeper {
        let users = vec![
            User { id: 7, name: "Seven".into(), email: "seven@example.com".into(), password: "sevens".into(), is_disabled: false },
            User { id: 8, name: "Eight".into(), email: "eight@example.com".into(), password: "eights".into(), is_disabled: true },
            User { id: 9, name: "Nine".into(), email: "nine@example.com".into(), password: "nines9".into(), is_disabled: false },
        ];
        let todos = vec![ToDo { id: 3, title: "Three".into(), user_id: 9, is_completed: false }];
        Gatekeeper::new(Services::seeded(users, todos))
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn user_todo_owned_by_someone_else_is_not_found_for_user() {
        let mut ctx = GateContext::new().with_param(ID, "7").with_param(TODO_ID, "3");
        let halt = gatekeeper().run(&user_todo_show(), &mut ctx).unwrap_err();
        match halt {
            Halt::Reject(ApiError::NotFound(message)) => assert_eq!(message, "To-do item not found for this user"),
            other => panic!("unexpected halt {other:?}"),
        }
    }

    #[test]
    fn disabled_user_show_is_a_notice() {
        let mut ctx = GateContext::new().with_param(ID, "8");
        let halt = gatekeeper().run(&user_show(), &mut ctx).unwrap_err();
        assert!(matches!(halt, Halt::Notice("This user is disabled")));
    }

    #[test]
    fn user_update_checks_existence_before_body() {
        let mut ctx = GateContext::new()
            .with_param(ID, "99")
            .with_body(object(json!({ "email": "broken" })));
        let halt = gatekeeper().run(&user_update(), &mut ctx).unwrap_err();
        assert_eq!(halt.status_code(), 404);
    }

    #[test]
    fn empty_update_passes_and_resolves_entity() {
        let mut ctx = GateContext::new().with_param(ID, "3");
        gatekeeper().run(&todo_update(), &mut ctx).unwrap();
        assert_eq!(ctx.todo.map(|t| t.id), Some(3));
    }

    #[test]
    fn user_with_no_todos_gets_notice() {
        let mut ctx = GateContext::new().with_param(ID, "7");
        let halt = gatekeeper().run(&user_todos_list(), &mut ctx).unwrap_err();
        assert!(matches!(halt, Halt::Notice("There are no current toDos of this user")));
    }
}
