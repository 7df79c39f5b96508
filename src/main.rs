// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use hello_world_api::config::state::AppState;
use hello_world_api::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Loads .env and the process environment once
    let state: AppState = AppState::from_env()?;
    let app: Router = server::create_app(state.clone());

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    tracing::info!(
        environment = %state.environment.environment,
        "Server is running on http://{}",
        listener.local_addr()?
    );

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
