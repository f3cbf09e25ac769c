// Declarative field rules for request bodies and integer rules for path parameters.
//
// Neither stage halts: violations are pushed onto the context so the collector can
// report all of them at once.

use serde_json::Value;
use validator::ValidateEmail;

use crate::services::Services;

use super::context::GateContext;
use super::issue::{Location, Rule, ValidationIssue};
use super::stage::{Halt, Stage, StageKind};

pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Shape check applied to a present field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    NonEmptyString,
    Email,
    MinLength(usize),
    Integer,
    Boolean,
}

impl Check {
    pub fn rule(&self) -> Rule {
        match self {
            Check::NonEmptyString => Rule::NonEmptyString,
            Check::Email => Rule::Email,
            Check::MinLength(_) => Rule::MinLength,
            Check::Integer => Rule::Integer,
            Check::Boolean => Rule::Boolean,
        }
    }

    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Check::NonEmptyString, Value::String(text)) => !text.is_empty(),
            (Check::Email, Value::String(text)) => is_email(text),
            (Check::MinLength(min), Value::String(text)) => text.chars().count() >= *min,
            (Check::Integer, Value::Number(number)) => number.is_i64(),
            (Check::Boolean, Value::Bool(_)) => true,
            _ => false,
        }
    }
}

/// Email syntax check that also requires a dotted domain, so `a@b` is rejected
fn is_email(text: &str) -> bool {
    text.validate_email() && text.rsplit_once('@').is_some_and(|(_, domain)| domain.contains('.'))
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn required(field: &'static str, check: Check, message: &'static str) -> Self {
        Self { field, required: true, check, message }
    }

    pub const fn optional(field: &'static str, check: Check, message: &'static str) -> Self {
        Self { field, required: false, check, message }
    }

    /// Evaluate against the body, producing at most one issue
    pub fn evaluate(&self, ctx: &GateContext) -> Option<ValidationIssue> {
        let rule = match ctx.field(self.field) {
            None if self.required => Rule::Required,
            None => return None,
            Some(value) if self.check.accepts(value) => return None,
            Some(_) => self.check.rule(),
        };
        Some(ValidationIssue::new(self.field, rule, Location::Body, self.message))
    }
}

/// Ordered rule set for one request body shape.
#[derive(Debug, Clone)]
pub struct FieldRules {
    name: &'static str,
    rules: Vec<FieldRule>,
}

impl FieldRules {
    pub fn new(name: &'static str, rules: Vec<FieldRule>) -> Self {
        Self { name, rules }
    }

    pub fn user_create() -> Self {
        Self::new(
            "user_create_rules",
            vec![
                FieldRule::required("name", Check::NonEmptyString, "Name is required and must be a string"),
                FieldRule::required("email", Check::Email, "Valid email is required"),
                FieldRule::required(
                    "password",
                    Check::MinLength(PASSWORD_MIN_LENGTH),
                    "Password must be at least 6 characters long",
                ),
            ],
        )
    }

    pub fn user_update() -> Self {
        Self::new(
            "user_update_rules",
            vec![
                FieldRule::optional("name", Check::NonEmptyString, "Name must be a non-empty string"),
                FieldRule::optional("email", Check::Email, "Valid email format required"),
                FieldRule::optional(
                    "password",
                    Check::MinLength(PASSWORD_MIN_LENGTH),
                    "Password must be at least 6 characters long",
                ),
                FieldRule::optional("isDisabled", Check::Boolean, "isDisabled must be a boolean"),
            ],
        )
    }

    pub fn todo_create() -> Self {
        Self::new(
            "todo_create_rules",
            vec![
                FieldRule::required("title", Check::NonEmptyString, "Title is required and must be a string"),
                FieldRule::required("userId", Check::Integer, "Valid userId is required"),
            ],
        )
    }

    pub fn todo_update() -> Self {
        Self::new(
            "todo_update_rules",
            vec![
                FieldRule::optional("title", Check::NonEmptyString, "Title must be a non-empty string"),
                FieldRule::optional("isCompleted", Check::Boolean, "isCompleted must be a boolean"),
            ],
        )
    }
}

impl Stage for FieldRules {
    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> StageKind {
        StageKind::FieldValidation
    }

    fn reads_body(&self) -> bool {
        true
    }

    fn check(&self, ctx: &mut GateContext, _services: &Services) -> Result<(), Halt> {
        for rule in &self.rules {
            if let Some(issue) = rule.evaluate(ctx) {
                tracing::debug!("Field '{}' failed {:?}", issue.field, issue.rule);
                ctx.push_issue(issue);
            }
        }
        Ok(())
    }
}

/// Requires a path parameter to be an integer and records the parsed value.
#[derive(Debug, Clone, Copy)]
pub struct IntegerParam {
    pub param: &'static str,
    pub message: &'static str,
}

impl IntegerParam {
    pub const fn new(param: &'static str, message: &'static str) -> Self {
        Self { param, message }
    }

    pub const fn user_id(param: &'static str) -> Self {
        Self::new(param, "User ID must be an integer")
    }

    pub const fn todo_id(param: &'static str) -> Self {
        Self::new(param, "To-do ID must be an integer")
    }
}

impl Stage for IntegerParam {
    fn name(&self) -> &'static str {
        "integer_param"
    }

    fn kind(&self) -> StageKind {
        StageKind::FieldValidation
    }

    fn check(&self, ctx: &mut GateContext, _services: &Services) -> Result<(), Halt> {
        let parsed = ctx.param(self.param).and_then(parse_integer);
        match parsed {
            Some(id) => ctx.record_id(self.param, id),
            None => ctx.push_issue(ValidationIssue::new(self.param, Rule::Integer, Location::Params, self.message)),
        }
        Ok(())
    }
}

/// Parse an integer path segment: optional sign, then ASCII digits. Leading zeros
/// are allowed, so `007` is 7.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
