//! tests/mod.rs
//! Runs the real router on a loopback socket for the integration tests.

use std::collections::HashMap;

use axum::{Router, serve};
use hello_world_api::config::{environment::EnvironmentVariables, state::AppState};
use hello_world_api::core::server::create_app;
use tokio::net::TcpListener;

/// Serves `create_app` on port 0 from a background task and returns its base URL.
pub fn spawn_app() -> String {
    // Defaults only; the process environment is not read.
    let env: EnvironmentVariables = EnvironmentVariables::from_vars(&HashMap::new())
        .expect("Default configuration must load");
    let app: Router = create_app(AppState::new(env));

    // Port 0: the OS picks a free port.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Loopback port 0 must be bindable");
    std_listener.set_nonblocking(true).unwrap();

    let listener: TcpListener = TcpListener::from_std(std_listener)
        .expect("Listener must register with the tokio runtime");
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener, app).await.expect("Test server stopped");
    });

    format!("http://{addr}")
}
