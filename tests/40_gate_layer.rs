mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use axum::{middleware, routing::get, Router};
use reqwest::StatusCode;
use serde_json::{json, Value};

use todo_gatekeeper::gatekeeper::{chains, Gatekeeper, Pipeline};
use todo_gatekeeper::middleware::{gate_middleware, RouteGate};
use todo_gatekeeper::services::Services;

/// Router whose only handler counts its invocations
fn counting_router(services: Services, path: &str, pipeline: Pipeline, hits: Arc<AtomicUsize>) -> Router {
    let gate = RouteGate::new(Gatekeeper::new(services), pipeline, 64 * 1024);
    Router::new()
        .route(
            path,
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    "handled"
                }
            }),
        )
        .route("/health", get(|| async { "ok" }))
        .layer(middleware::from_fn_with_state(gate, gate_middleware))
}

#[tokio::test]
async fn halted_requests_never_reach_the_handler() -> Result<()> {
    let hits = Arc::new(AtomicUsize::new(0));
    let server = common::serve(counting_router(
        Services::in_memory(),
        "/things",
        chains::todos_list(),
        hits.clone(),
    ))
    .await?;

    let res = server.client.get(server.url("/things")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "There are no current toDos" }));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn passing_requests_reach_the_handler_once() -> Result<()> {
    let hits = Arc::new(AtomicUsize::new(0));
    let services = Services::seeded(vec![common::user(1, "Ada", false)], vec![]);
    let server = common::serve(counting_router(services, "/people", chains::users_list(), hits.clone())).await?;

    let res = server.client.get(server.url("/people")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "handled");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    Ok(())
}
