// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

use crate::utils::response::MessageBody;

/// Maps errors raised by the tower layers to HTTP responses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    let (status, message): (StatusCode, &str) = classify(&*err);

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Unhandled internal error: {err}");
    } else {
        warn!("Request rejected with {status}: {err}");
    }

    (status, MessageBody::new(message))
}

fn classify(err: &(dyn Error + Send + Sync + 'static)) -> (StatusCode, &'static str) {
    // 408 if the request took too long
    if err.is::<Elapsed>() || find_cause::<Elapsed>(err).is_some() {
        return (StatusCode::REQUEST_TIMEOUT, "request timed out");
    }

    // Otherwise, 500
    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
