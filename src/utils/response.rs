// Start of file: /src/utils/response.rs

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

// * `{"message": "..."}`, the shape every JSON body of this service takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for MessageBody {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

// End of file: /src/utils/response.rs
