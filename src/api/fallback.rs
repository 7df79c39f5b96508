// Start of file: src/api/fallback.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::utils::response::MessageBody;

pub async fn fallback_handler() -> Response {
    (StatusCode::NOT_FOUND, MessageBody::new("not found")).into_response()
}

// End of file: src/api/fallback.rs
