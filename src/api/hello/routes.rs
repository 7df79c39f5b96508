// Start of file: /src/api/hello/routes.rs

/*
    * Registers the single GET route at `/` that calls `hello_handler`.
*/

use axum::{routing::get, Router};

use crate::api::hello::handler::hello_handler;
use crate::config::state::AppState;

pub fn hello_routes() -> Router<AppState> {
    Router::new().route("/", get(hello_handler))
}

// End of file: /src/api/hello/routes.rs
