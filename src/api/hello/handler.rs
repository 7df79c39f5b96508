// Start of file: /src/api/hello/handler.rs

/*
    * Handler for the root endpoint. Builds the greeting fresh on every call;
    * the request itself is never inspected.
*/

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub const GREETING: &str = "hello world";

pub async fn hello_handler() -> (StatusCode, Json<Value>) {
    let body: Value = json!({ "message": GREETING });
    (StatusCode::OK, Json(body))
}


// End of file: /src/api/hello/handler.rs
