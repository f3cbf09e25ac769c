mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{spawn_app, todo, user};

#[tokio::test]
async fn todo_owned_by_another_user_is_not_found_for_this_user() -> Result<()> {
    let server = spawn_app(
        vec![user(7, "Seven", false), user(9, "Nine", false)],
        vec![todo(3, "Belongs to nine", 9)],
    )
    .await?;

    let res = server.client.get(server.url("/users/7/todos/3")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({ "error": "To-do item not found for this user" }));
    Ok(())
}

#[tokio::test]
async fn missing_user_is_reported_even_when_todo_exists() -> Result<()> {
    let server = spawn_app(vec![user(9, "Nine", false)], vec![todo(3, "Belongs to nine", 9)]).await?;

    let res = server.client.get(server.url("/users/5/todos/3")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({ "error": "User not found" }));
    Ok(())
}

#[tokio::test]
async fn owned_todo_is_returned() -> Result<()> {
    let server = spawn_app(vec![user(9, "Nine", false)], vec![todo(3, "Belongs to nine", 9)]).await?;

    let res = server.client.get(server.url("/users/9/todos/3")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["data"]["title"], "Belongs to nine");
    Ok(())
}

#[tokio::test]
async fn both_invalid_params_are_reported_together() -> Result<()> {
    let server = spawn_app(vec![user(9, "Nine", false)], vec![]).await?;

    let res = server.client.get(server.url("/users/x/todos/y")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["errors"][1]["field"], "toDoId");
    Ok(())
}

#[tokio::test]
async fn user_without_todos_gets_notice() -> Result<()> {
    let server = spawn_app(vec![user(7, "Seven", false)], vec![todo(1, "Someone else's", 8)]).await?;

    let res = server.client.get(server.url("/users/7/todos")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "message": "There are no current toDos of this user" })
    );
    Ok(())
}

#[tokio::test]
async fn user_todo_list_only_contains_owned_todos() -> Result<()> {
    let server = spawn_app(
        vec![user(7, "Seven", false)],
        vec![todo(1, "Mine", 7), todo(2, "Not mine", 8), todo(3, "Also mine", 7)],
    )
    .await?;

    let body = server.client.get(server.url("/users/7/todos")).send().await?.json::<Value>().await?;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|t| t["id"].as_i64())
        .collect();
    assert_eq!(ids, [1, 3]);
    Ok(())
}

#[tokio::test]
async fn disabled_user_todos_are_withheld() -> Result<()> {
    let server = spawn_app(vec![user(3, "Charles", true)], vec![todo(1, "Gears", 3)]).await?;

    let res = server.client.get(server.url("/users/3/todos")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "This user is disabled" }));
    Ok(())
}
