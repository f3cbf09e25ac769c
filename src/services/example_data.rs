// Example records loaded at startup when seeding is enabled.

use crate::models::{ToDo, User};

use super::Services;

pub fn example_users() -> Vec<User> {
    vec![
        user(1, "Ada Lovelace", "ada@example.com", false),
        user(2, "Alan Turing", "alan@example.com", false),
        user(3, "Charles Babbage", "charles@example.com", true),
    ]
}

pub fn example_todos() -> Vec<ToDo> {
    vec![
        todo(1, "Annotate the engine notes", 1, true),
        todo(2, "Publish the Bernoulli program", 1, false),
        todo(3, "Draft the imitation game", 2, false),
        todo(4, "Order brass gears", 3, false),
    ]
}

pub fn example_services() -> Services {
    Services::seeded(example_users(), example_todos())
}

fn user(id: i64, name: &str, email: &str, is_disabled: bool) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: "changeme".to_string(),
        is_disabled,
    }
}

fn todo(id: i64, title: &str, user_id: i64, is_completed: bool) -> ToDo {
    ToDo { id, title: title.to_string(), user_id, is_completed }
}
