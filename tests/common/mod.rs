#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::Router;
use reqwest::StatusCode;

use todo_gatekeeper::config::AppConfig;
use todo_gatekeeper::models::{ToDo, User};
use todo_gatekeeper::routes;
use todo_gatekeeper::services::Services;
use todo_gatekeeper::state::AppState;

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// Serve an arbitrary router on a free port
pub async fn serve(app: Router) -> Result<TestServer> {
    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let server = TestServer {
        port,
        base_url,
        client: reqwest::Client::new(),
    };
    server.wait_ready(Duration::from_secs(5)).await?;
    Ok(server)
}

/// Serve the full application backed by in-memory services holding `users` and `todos`
pub async fn spawn_app(users: Vec<User>, todos: Vec<ToDo>) -> Result<TestServer> {
    let state = AppState::new(Services::seeded(users, todos), &AppConfig::development());
    serve(routes::router(state)).await
}

pub fn user(id: i64, name: &str, is_disabled: bool) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "secret-password".to_string(),
        is_disabled,
    }
}

pub fn todo(id: i64, title: &str, user_id: i64) -> ToDo {
    ToDo {
        id,
        title: title.to_string(),
        user_id,
        is_completed: false,
    }
}
