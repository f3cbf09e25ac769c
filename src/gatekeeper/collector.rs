use crate::error::ApiError;
use crate::services::Services;

use super::context::GateContext;
use super::stage::{Halt, Stage, StageKind};

/// Halts with 400 listing every accumulated issue, in the order they were found.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollectIssues;

impl Stage for CollectIssues {
    fn name(&self) -> &'static str {
        "collect_issues"
    }

    fn kind(&self) -> StageKind {
        StageKind::ErrorCollection
    }

    fn check(&self, ctx: &mut GateContext, _services: &Services) -> Result<(), Halt> {
        if ctx.issues().is_empty() {
            return Ok(());
        }
        Err(ApiError::validation(ctx.take_issues()).into())
    }
}
