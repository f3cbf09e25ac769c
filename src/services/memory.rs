use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{NewToDo, NewUser, ToDo, ToDoChanges, User, UserChanges};

use super::{ToDoService, UserService};

/// Insertion-ordered in-memory record store with sequential ids.
///
/// A poisoned lock is recovered rather than propagated; records are plain data
/// and remain consistent after a panicking writer.
#[derive(Debug)]
struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Clone> Table<T> {
    fn new(rows: Vec<T>) -> Self {
        Self { rows: RwLock::new(rows) }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn all(&self) -> Vec<T> {
        self.read().clone()
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.read().iter().find(|row| predicate(*row)).cloned()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read().iter().filter(|row| predicate(*row)).cloned().collect()
    }

    fn modify(&self, predicate: impl Fn(&T) -> bool, change: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.write();
        let row = rows.iter_mut().find(|row| predicate(&**row))?;
        change(row);
        Some(row.clone())
    }

    fn remove(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let mut rows = self.write();
        let index = rows.iter().position(|row| predicate(row))?;
        Some(rows.remove(index))
    }
}

fn next_id<T>(rows: &[T], id: impl Fn(&T) -> i64) -> i64 {
    rows.iter().map(id).max().unwrap_or(0) + 1
}

#[derive(Debug)]
pub struct MemoryUserService {
    table: Table<User>,
}

impl MemoryUserService {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self { table: Table::new(users) }
    }
}

impl Default for MemoryUserService {
    fn default() -> Self {
        Self::new()
    }
}

impl UserService for MemoryUserService {
    fn get_all_users(&self) -> Vec<User> {
        self.table.all()
    }

    fn get_user_by_id(&self, id: i64) -> Option<User> {
        self.table.find(|user| user.id == id)
    }

    fn create_user(&self, new_user: NewUser) -> User {
        let mut rows = self.table.write();
        let user = User {
            id: next_id(rows.as_slice(), |user| user.id),
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
            is_disabled: false,
        };
        rows.push(user.clone());
        tracing::debug!("Created user {}", user.id);
        user
    }

    fn update_user(&self, id: i64, changes: UserChanges) -> Option<User> {
        self.table.modify(|user| user.id == id, |user| user.apply(changes))
    }

    fn delete_user(&self, id: i64) -> Option<User> {
        self.table.remove(|user| user.id == id)
    }
}

#[derive(Debug)]
pub struct MemoryToDoService {
    table: Table<ToDo>,
}

impl MemoryToDoService {
    pub fn new() -> Self {
        Self::with_todos(Vec::new())
    }

    pub fn with_todos(todos: Vec<ToDo>) -> Self {
        Self { table: Table::new(todos) }
    }
}

impl Default for MemoryToDoService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToDoService for MemoryToDoService {
    fn get_all_todos(&self) -> Vec<ToDo> {
        self.table.all()
    }

    fn get_todos_by_user_id(&self, user_id: i64) -> Vec<ToDo> {
        self.table.filter(|todo| todo.user_id == user_id)
    }

    fn get_todo_by_id(&self, id: i64) -> Option<ToDo> {
        self.table.find(|todo| todo.id == id)
    }

    fn get_todo_by_user_id_and_todo_id(&self, user_id: i64, todo_id: i64) -> Option<ToDo> {
        self.table.find(|todo| todo.id == todo_id && todo.user_id == user_id)
    }

    fn create_todo(&self, new_todo: NewToDo) -> ToDo {
        let mut rows = self.table.write();
        let todo = ToDo {
            id: next_id(rows.as_slice(), |todo| todo.id),
            title: new_todo.title,
            user_id: new_todo.user_id,
            is_completed: false,
        };
        rows.push(todo.clone());
        tracing::debug!("Created to-do {} for user {}", todo.id, todo.user_id);
        todo
    }

    fn update_todo(&self, id: i64, changes: ToDoChanges) -> Option<ToDo> {
        self.table.modify(|todo| todo.id == id, |todo| todo.apply(changes))
    }

    fn delete_todo(&self, id: i64) -> Option<ToDo> {
        self.table.remove(|todo| todo.id == id)
    }
}
