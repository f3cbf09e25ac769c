use serde::Serialize;

/// Rule a field or path parameter failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Integer,
    NonEmptyString,
    Email,
    MinLength,
    Boolean,
    JsonObject,
}

/// Where the offending value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Params,
    Body,
}

/// A single rule violation, reported back to the client as part of a 400 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub rule: Rule,
    pub location: Location,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, rule: Rule, location: Location, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            location,
            message: message.into(),
        }
    }
}
