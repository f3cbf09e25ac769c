mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{spawn_app, todo, user};

#[tokio::test]
async fn empty_todo_list_is_an_informational_200() -> Result<()> {
    let server = spawn_app(vec![user(1, "Ada", false)], vec![]).await?;

    let res = server.client.get(server.url("/todos")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "There are no current toDos" }));
    Ok(())
}

#[tokio::test]
async fn missing_todo_is_404() -> Result<()> {
    let server = spawn_app(vec![], vec![todo(1, "Write docs", 1)]).await?;

    let res = server.client.get(server.url("/todos/2")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({ "error": "To-do not found" }));
    Ok(())
}

#[tokio::test]
async fn non_integer_todo_id_is_400() -> Result<()> {
    let server = spawn_app(vec![], vec![todo(1, "Write docs", 1)]).await?;

    let res = server.client.get(server.url("/todos/one")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["errors"][0]["message"], "To-do ID must be an integer");
    Ok(())
}

#[tokio::test]
async fn create_requires_title_and_integer_user_id() -> Result<()> {
    let server = spawn_app(vec![], vec![]).await?;

    let res = server
        .client
        .post(server.url("/todos"))
        .json(&json!({ "title": "", "userId": "seven" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    let messages: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e["message"].as_str())
        .collect();
    assert_eq!(messages, ["Title is required and must be a string", "Valid userId is required"]);
    Ok(())
}

#[tokio::test]
async fn create_accepts_owner_that_does_not_exist() -> Result<()> {
    let server = spawn_app(vec![], vec![]).await?;

    let res = server
        .client
        .post(server.url("/todos"))
        .json(&json!({ "title": "Orphaned task", "userId": 404 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["userId"], 404);
    assert_eq!(body["data"]["isCompleted"], false);
    Ok(())
}

#[tokio::test]
async fn update_checks_completion_flag_type() -> Result<()> {
    let server = spawn_app(vec![], vec![todo(1, "Write docs", 1)]).await?;

    let res = server
        .client
        .put(server.url("/todos/1"))
        .json(&json!({ "isCompleted": "done" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["errors"][0]["message"], "isCompleted must be a boolean");

    let res = server
        .client
        .put(server.url("/todos/1"))
        .json(&json!({ "isCompleted": true }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["data"]["isCompleted"], true);
    Ok(())
}

#[tokio::test]
async fn update_with_no_fields_passes_the_gate() -> Result<()> {
    let server = spawn_app(vec![], vec![todo(1, "Write docs", 1)]).await?;

    let res = server.client.put(server.url("/todos/1")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["data"]["title"], "Write docs");
    Ok(())
}

#[tokio::test]
async fn delete_then_lookup_is_404() -> Result<()> {
    let server = spawn_app(vec![], vec![todo(1, "Write docs", 1), todo(2, "Review", 1)]).await?;

    let res = server.client.delete(server.url("/todos/1")).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = server.client.delete(server.url("/todos/1")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
