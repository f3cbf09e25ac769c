// Data services consumed by the gatekeeper and the route handlers.
//
// The gatekeeper only calls the read operations; mutations are used by handlers.

pub mod example_data;
pub mod memory;

use std::sync::Arc;

use crate::models::{NewToDo, NewUser, ToDo, ToDoChanges, User, UserChanges};

pub use memory::{MemoryToDoService, MemoryUserService};

/// Lookup, listing and mutation of users
pub trait UserService: Send + Sync {
    fn get_all_users(&self) -> Vec<User>;

    fn get_user_by_id(&self, id: i64) -> Option<User>;

    fn create_user(&self, new_user: NewUser) -> User;

    /// Returns the updated user, or `None` when no user has this id
    fn update_user(&self, id: i64, changes: UserChanges) -> Option<User>;

    fn delete_user(&self, id: i64) -> Option<User>;
}

/// Lookup, listing and mutation of to-dos
pub trait ToDoService: Send + Sync {
    fn get_all_todos(&self) -> Vec<ToDo>;

    fn get_todos_by_user_id(&self, user_id: i64) -> Vec<ToDo>;

    fn get_todo_by_id(&self, id: i64) -> Option<ToDo>;

    /// Returns the to-do only when it exists and is owned by `user_id`
    fn get_todo_by_user_id_and_todo_id(&self, user_id: i64, todo_id: i64) -> Option<ToDo>;

    fn create_todo(&self, new_todo: NewToDo) -> ToDo;

    fn update_todo(&self, id: i64, changes: ToDoChanges) -> Option<ToDo>;

    fn delete_todo(&self, id: i64) -> Option<ToDo>;
}

/// Shared handles to both data services, passed explicitly into the gatekeeper
/// and the router state so tests can substitute their own implementations.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserService>,
    pub todos: Arc<dyn ToDoService>,
}

impl Services {
    pub fn new(users: Arc<dyn UserService>, todos: Arc<dyn ToDoService>) -> Self {
        Self { users, todos }
    }

    /// Empty in-memory services
    pub fn in_memory() -> Self {
        Self::seeded(Vec::new(), Vec::new())
    }

    /// In-memory services pre-populated with the given records
    pub fn seeded(users: Vec<User>, todos: Vec<ToDo>) -> Self {
        Self::new(
            Arc::new(MemoryUserService::with_users(users)),
            Arc::new(MemoryToDoService::with_todos(todos)),
        )
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
