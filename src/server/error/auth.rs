use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request did not carry the shared gateway secret.
    ///
    /// Results in a 401 Unauthorized response before any handler runs.
    #[error("Request is missing the gateway secret header")]
    MissingGatewaySecret,

    /// The gateway secret header did not match the configured secret.
    ///
    /// Results in a 401 Unauthorized response before any handler runs.
    #[error("Request carried an invalid gateway secret")]
    InvalidGatewaySecret,

    /// The handler needs a caller but the gateway asserted no username.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing the authenticated username header")]
    MissingIdentity,

    /// The caller is authenticated but does not own the targeted resource.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed reason is logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - For trust header failures and missing identity
/// - 403 Forbidden - For ownership failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingGatewaySecret | Self::InvalidGatewaySecret => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::MissingIdentity => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You are not allowed to access this resource",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
                field: None,
            }),
        )
            .into_response()
    }
}
