use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::error::ApiError;
use crate::services::Services;

use super::context::GateContext;

/// Phase a stage belongs to, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    FieldValidation,
    ErrorCollection,
    Existence,
    Emptiness,
    State,
}

/// Why a pipeline stopped before the handler.
#[derive(Debug)]
pub enum Halt {
    /// Not an error: respond 200 with an informational message
    Notice(&'static str),
    Reject(ApiError),
}

impl Halt {
    pub fn status_code(&self) -> u16 {
        match self {
            Halt::Notice(_) => 200,
            Halt::Reject(error) => error.status_code(),
        }
    }
}

impl From<ApiError> for Halt {
    fn from(error: ApiError) -> Self {
        Halt::Reject(error)
    }
}

impl IntoResponse for Halt {
    fn into_response(self) -> Response {
        match self {
            Halt::Notice(message) => (StatusCode::OK, Json(json!({ "message": message }))).into_response(),
            Halt::Reject(error) => error.into_response(),
        }
    }
}

/// One named check in a gate pipeline.
///
/// `Ok(())` lets the pipeline continue with the next stage; `Err(Halt)` ends the
/// run and becomes the response.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    fn kind(&self) -> StageKind;

    /// Whether the stage inspects the JSON body
    fn reads_body(&self) -> bool {
        false
    }

    fn check(&self, ctx: &mut GateContext, services: &Services) -> Result<(), Halt>;
}
