use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{RawPathParams, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::gatekeeper::{GateContext, Gatekeeper, Location, Pipeline, Rule, ValidationIssue};
use crate::models::{ToDo, User};

/// User resolved by the gate, available to handlers as `Extension<ResolvedUser>`
#[derive(Clone, Debug)]
pub struct ResolvedUser(pub User);

/// To-do resolved by the gate, available to handlers as `Extension<ResolvedToDo>`
#[derive(Clone, Debug)]
pub struct ResolvedToDo(pub ToDo);

/// Middleware state: the pipeline guarding one route plus the gatekeeper that runs it
#[derive(Clone, Debug)]
pub struct RouteGate {
    gatekeeper: Gatekeeper,
    pipeline: Arc<Pipeline>,
    body_limit: usize,
}

impl RouteGate {
    pub fn new(gatekeeper: Gatekeeper, pipeline: Pipeline, body_limit: usize) -> Self {
        Self {
            gatekeeper,
            pipeline: Arc::new(pipeline),
            body_limit,
        }
    }
}

/// Middleware that runs the route's gate pipeline before the handler.
///
/// Path parameters and, when a stage needs it, the JSON body are copied into a
/// fresh `GateContext`. A halt becomes the response; otherwise the entities the
/// guards resolved are attached to the request and the handler runs with the
/// original body.
pub async fn gate_middleware(
    State(gate): State<RouteGate>,
    params: Option<RawPathParams>,
    request: Request,
    next: Next,
) -> Response {
    let mut ctx = GateContext::new();
    if let Some(params) = &params {
        for (name, value) in params.iter() {
            ctx = ctx.with_param(name, value);
        }
    }

    let mut request = if gate.pipeline.reads_body() {
        let (request, bytes) = match buffer_body(request, gate.body_limit).await {
            Ok(buffered) => buffered,
            Err(error) => return error.into_response(),
        };
        let body = body_fields(&bytes, &mut ctx);
        ctx = ctx.with_body(body);
        request
    } else {
        request
    };

    if let Err(halt) = gate.gatekeeper.run(&gate.pipeline, &mut ctx) {
        return halt.into_response();
    }

    if let Some(user) = ctx.user.take() {
        request.extensions_mut().insert(ResolvedUser(user));
    }
    if let Some(todo) = ctx.todo.take() {
        request.extensions_mut().insert(ResolvedToDo(todo));
    }

    next.run(request).await
}

/// Read the whole body and rebuild the request around the buffered bytes
async fn buffer_body(request: Request, limit: usize) -> Result<(Request, Bytes), ApiError> {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, limit).await.map_err(|e| {
        tracing::warn!("Failed to buffer request body for {}: {}", parts.uri, e);
        ApiError::payload_too_large(format!("Request body exceeds {} bytes", limit))
    })?;
    Ok((Request::from_parts(parts, Body::from(bytes.clone())), bytes))
}

/// JSON object fields of the body. An empty body counts as an empty object; any
/// other non-object body is reported as a validation issue.
fn body_fields(bytes: &[u8], ctx: &mut GateContext) -> Map<String, Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Map::new();
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            ctx.push_issue(ValidationIssue::new(
                "body",
                Rule::JsonObject,
                Location::Body,
                "Request body must be a JSON object",
            ));
            Map::new()
        }
    }
}
