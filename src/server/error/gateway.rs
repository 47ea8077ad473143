use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures raised by the gateway while routing or forwarding a request.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No route in the table matched the request.
    #[error("No route matches {0}")]
    NoRoute(String),

    /// The route requires an identity token and none (or an invalid one) was supplied.
    #[error("Invalid or missing identity token: {0}")]
    Unauthorized(String),

    /// The inbound request could not be turned into an upstream request.
    #[error("{0}")]
    BadRequest(String),

    /// The request body is larger than the gateway buffers.
    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// The backend could not be reached or answered with a broken response.
    #[error("Upstream {backend} failed: {source}")]
    Upstream {
        backend: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend did not answer within the configured timeout.
    #[error("Upstream {0} timed out")]
    Timeout(String),
}

/// # Returns
/// - 404 Not Found - `NoRoute`
/// - 401 Unauthorized - `Unauthorized`
/// - 400 Bad Request - `BadRequest`
/// - 413 Payload Too Large - `PayloadTooLarge`
/// - 502 Bad Gateway - `Upstream`
/// - 504 Gateway Timeout - `Timeout`
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NoRoute(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Unauthorized(reason) => {
                tracing::debug!(reason = %reason, "Rejected identity token");
                (StatusCode::UNAUTHORIZED, "Authentication required".to_string())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            Self::Upstream { .. } => {
                tracing::error!("{}", self);
                (StatusCode::BAD_GATEWAY, "Bad gateway".to_string())
            }
            Self::Timeout(_) => {
                tracing::error!("{}", self);
                (StatusCode::GATEWAY_TIMEOUT, "Gateway timeout".to_string())
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message,
                field: None,
            }),
        )
            .into_response()
    }
}
