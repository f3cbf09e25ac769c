use serde::{Deserialize, Serialize};

/// A to-do record. `user_id` is not guaranteed to reference an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub id: i64,
    pub title: String,
    pub user_id: i64,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewToDo {
    pub title: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoChanges {
    pub title: Option<String>,
    pub is_completed: Option<bool>,
}

impl ToDo {
    pub fn apply(&mut self, changes: ToDoChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(is_completed) = changes.is_completed {
            self.is_completed = is_completed;
        }
    }
}
