use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::models::{ToDo, User};

use super::issue::ValidationIssue;

/// Per-request state shared by the stages of one pipeline run.
///
/// Holds the raw inputs (path parameters and JSON body fields), the issues pushed
/// by validators, identifiers parsed by parameter rules, and the entities resolved
/// by existence guards for later stages and the handler.
#[derive(Debug, Default)]
pub struct GateContext {
    params: HashMap<String, String>,
    body: Map<String, Value>,
    issues: Vec<ValidationIssue>,
    ids: HashMap<String, i64>,
    pub user: Option<User>,
    pub todo: Option<ToDo>,
}

impl GateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// Identifier parsed from the named path parameter by an earlier rule
    pub fn id(&self, param: &str) -> Option<i64> {
        self.ids.get(param).copied()
    }

    pub fn record_id(&mut self, param: &str, id: i64) {
        self.ids.insert(param.to_string(), id);
    }

    pub fn push_issue(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn take_issues(&mut self) -> Vec<ValidationIssue> {
        std::mem::take(&mut self.issues)
    }
}
