use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::trust::USERNAME_HEADER,
};

/// Caller identity asserted by the gateway through `X-Auth-Username`.
///
/// Only trustworthy because `require_gateway_secret` runs before every handler.
/// Handlers that take this extractor reject anonymous requests with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

impl AuthenticatedUser {
    pub fn username(&self) -> &str {
        &self.0
    }

    /// Fails with 403 unless the caller is `owner`.
    ///
    /// # Arguments
    /// - `owner` - Username owning the targeted resource
    /// - `action` - Short description used in the server-side log
    pub fn require_owner(&self, owner: &str, action: &str) -> Result<(), AppError> {
        if self.0 == owner {
            Ok(())
        } else {
            Err(AuthError::AccessDenied(self.0.clone(), action.to_string()).into())
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(USERNAME_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::MissingIdentity)?;

        tracing::trace!(username = %username, "Caller extracted from header");

        Ok(Self(username.to_string()))
    }
}
