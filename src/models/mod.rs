pub mod todo;
pub mod user;

pub use todo::{NewToDo, ToDo, ToDoChanges};
pub use user::{NewUser, User, UserChanges};
