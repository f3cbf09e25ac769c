use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_gatekeeper::config::{self, AppConfig};
use todo_gatekeeper::routes;
use todo_gatekeeper::services::{example_data, Services};
use todo_gatekeeper::state::AppState;

#[derive(Parser)]
#[command(name = "todo-gatekeeper")]
#[command(about = "Users and to-dos REST API with request validation gates")]
#[command(version)]
struct Args {
    #[arg(long, help = "Address to bind (overrides SERVER_HOST)")]
    host: Option<String>,

    #[arg(long, short, help = "Port to listen on (overrides SERVER_PORT/PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Start with example users and to-dos")]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SERVER_PORT, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let mut config: AppConfig = config::config().clone();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.seed {
        config.data.seed_example_data = true;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting to-do gatekeeper in {:?} mode", config.environment);

    let services = if config.data.seed_example_data {
        tracing::info!("Seeding example users and to-dos");
        example_data::example_services()
    } else {
        Services::in_memory()
    };

    let app = routes::app(AppState::new(services, &config), &config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
