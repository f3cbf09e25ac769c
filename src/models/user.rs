use serde::{Deserialize, Serialize};

/// A user record as held by the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub is_disabled: bool,
}

/// Payload for `POST /users`, deserialized after the gate accepted the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload for `PUT /users/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_disabled: Option<bool>,
}

impl User {
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(password) = changes.password {
            self.password = password;
        }
        if let Some(is_disabled) = changes.is_disabled {
            self.is_disabled = is_disabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_serialized() {
        let user = User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret-pass".into(),
            is_disabled: false,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["isDisabled"], false);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut user = User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret-pass".into(),
            is_disabled: false,
        };
        user.apply(UserChanges {
            email: Some("ada@lovelace.dev".into()),
            is_disabled: Some(true),
            ..Default::default()
        });
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@lovelace.dev");
        assert!(user.is_disabled);
    }
}
