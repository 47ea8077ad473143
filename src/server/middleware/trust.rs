//! Shared-secret check between the gateway and the services.
//!
//! Services are only meant to be reachable through the gateway. Every relayed
//! request carries `X-Gateway-Secret`, which is compared in constant time against
//! the configured secret before any handler runs.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::server::{error::auth::AuthError, state::AppState};

/// Header carrying the shared secret.
pub const GATEWAY_SECRET_HEADER: &str = "x-gateway-secret";

/// Header carrying the username the gateway authenticated.
pub const USERNAME_HEADER: &str = "x-auth-username";

/// The secret shared by the gateway and every service.
#[derive(Clone)]
pub struct GatewaySecret(Arc<str>);

impl GatewaySecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Arc::from(secret.into()))
    }

    /// Compares a presented secret without short-circuiting on the first differing byte.
    pub fn matches(&self, presented: &[u8]) -> bool {
        bool::from(self.0.as_bytes().ct_eq(presented))
    }
}

impl std::fmt::Debug for GatewaySecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GatewaySecret(..)")
    }
}

/// Middleware rejecting any request without the correct gateway secret.
///
/// # Returns
/// - The inner handler's response when the secret matches
/// - `401 Unauthorized` - Secret header missing or wrong
pub async fn require_gateway_secret(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let result = match request.headers().get(GATEWAY_SECRET_HEADER) {
        None => Err(AuthError::MissingGatewaySecret),
        Some(value) if state.gateway_secret.matches(value.as_bytes()) => Ok(()),
        Some(_) => Err(AuthError::InvalidGatewaySecret),
    };

    match result {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::warn!(
                method = %request.method(),
                route = %request.uri().path(),
                "Rejected request: {}",
                err
            );
            err.into_response()
        }
    }
}
