//! Bearer token verification at the gateway.
//!
//! The gateway only verifies tokens; issuing them is the identity provider's job.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::gateway::GatewayError;

/// Claims the gateway reads from a token. `sub` is the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
}

/// Verifies HS256 bearer tokens against the shared JWT secret.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(jwt_secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Extracts the username from the request's `Authorization` header.
    ///
    /// # Returns
    /// - `Ok(Some(username))` - A valid bearer token was presented
    /// - `Ok(None)` - No `Authorization` header
    /// - `Err(GatewayError::Unauthorized)` - Malformed header, bad signature or expired token
    pub fn username(&self, headers: &HeaderMap) -> Result<Option<String>, GatewayError> {
        let Some(value) = headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| GatewayError::Unauthorized("malformed Authorization header".to_string()))?;

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| GatewayError::Unauthorized(e.to_string()))?;

        if data.claims.sub.trim().is_empty() {
            return Err(GatewayError::Unauthorized("empty subject".to_string()));
        }

        Ok(Some(data.claims.sub))
    }
}
