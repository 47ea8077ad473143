//! Environment-based configuration for both server roles.

use std::{net::SocketAddr, time::Duration};

use axum::http::HeaderValue;
use clap::ValueEnum;
use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_SERVICE_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_GATEWAY_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_GATEWAY_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// The backend services a `petguard service` process can run as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ServiceKind {
    Announcements,
    Applications,
    Chat,
    Favorites,
    Ratings,
    Users,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Users,
        ServiceKind::Announcements,
        ServiceKind::Applications,
        ServiceKind::Chat,
        ServiceKind::Favorites,
        ServiceKind::Ratings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Announcements => "announcements",
            Self::Applications => "applications",
            Self::Chat => "chat",
            Self::Favorites => "favorites",
            Self::Ratings => "ratings",
            Self::Users => "users",
        }
    }

    /// Path prefix owned by the service. The chat service is mounted under `discussions`.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Self::Announcements => "/api/announcements",
            Self::Applications => "/api/applications",
            Self::Chat => "/api/discussions",
            Self::Favorites => "/api/favorites",
            Self::Ratings => "/api/ratings",
            Self::Users => "/api/users",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::Users => 8081,
            Self::Announcements => 8082,
            Self::Applications => 8083,
            Self::Chat => 8084,
            Self::Favorites => 8085,
            Self::Ratings => 8086,
        }
    }

    /// Name of the variable holding this service's base URL on the gateway side.
    pub fn url_env_var(&self) -> String {
        format!("{}_SERVICE_URL", self.name().to_uppercase())
    }
}

/// Configuration of a single backend service process.
pub struct ServiceConfig {
    pub kind: ServiceKind,
    pub database_url: String,
    pub gateway_secret: String,
    pub bind_address: SocketAddr,
    pub cors_allowed_origins: Vec<HeaderValue>,
}

impl ServiceConfig {
    pub fn from_env(kind: ServiceKind) -> Result<Self, ConfigError> {
        let default_bind = format!("0.0.0.0:{}", kind.default_port());

        Ok(Self {
            kind,
            database_url: required_var("DATABASE_URL")?,
            gateway_secret: required_var("GATEWAY_SECRET")?,
            bind_address: parse_socket_addr(
                "BIND_ADDRESS",
                &optional_var("BIND_ADDRESS").unwrap_or(default_bind),
            )?,
            cors_allowed_origins: parse_origins(
                &optional_var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|| DEFAULT_SERVICE_CORS_ORIGIN.to_string()),
            )?,
        })
    }
}

/// Configuration of the gateway process.
///
/// The route table itself is loaded separately by `gateway::config` since it
/// needs the service URLs held here.
pub struct GatewayConfig {
    /// Shared secret, already validated as a header value and marked sensitive.
    pub gateway_secret: HeaderValue,
    pub jwt_secret: String,
    pub bind_address: SocketAddr,
    pub routes_file: Option<String>,
    pub service_urls: Vec<(ServiceKind, Url)>,
    pub upstream_timeout: Duration,
    pub cors_allowed_origins: Vec<HeaderValue>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut service_urls = Vec::with_capacity(ServiceKind::ALL.len());
        for kind in ServiceKind::ALL {
            let name = kind.url_env_var();
            let raw = optional_var(&name)
                .unwrap_or_else(|| format!("http://127.0.0.1:{}", kind.default_port()));
            service_urls.push((kind, parse_url(&name, &raw)?));
        }

        let upstream_timeout = match optional_var("GATEWAY_UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "GATEWAY_UPSTREAM_TIMEOUT_SECS".to_string(),
                    reason: format!("'{}' is not a whole number of seconds", raw),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        name: "GATEWAY_UPSTREAM_TIMEOUT_SECS".to_string(),
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            gateway_secret: parse_secret_header(
                "GATEWAY_SECRET",
                &required_var("GATEWAY_SECRET")?,
            )?,
            jwt_secret: required_var("JWT_SECRET")?,
            bind_address: parse_socket_addr(
                "GATEWAY_BIND_ADDRESS",
                &optional_var("GATEWAY_BIND_ADDRESS")
                    .unwrap_or_else(|| DEFAULT_GATEWAY_BIND_ADDRESS.to_string()),
            )?,
            routes_file: optional_var("GATEWAY_ROUTES_FILE"),
            service_urls,
            upstream_timeout,
            cors_allowed_origins: parse_origins(
                &optional_var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|| DEFAULT_GATEWAY_CORS_ORIGIN.to_string()),
            )?,
        })
    }

    pub fn service_url(&self, kind: ServiceKind) -> Option<&Url> {
        self.service_urls
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, url)| url)
    }
}

/// Reads a variable that must be present and non-empty.
fn required_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_socket_addr(name: &str, raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: format!("'{}' is not a socket address", raw),
    })
}

pub(crate) fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: format!("'{}' is not a valid URL: {}", raw, e),
    })
}

/// Parses a secret the gateway sends on every forwarded request.
///
/// The value is marked sensitive so it is never printed by header debug output.
pub fn parse_secret_header(name: &str, raw: &str) -> Result<HeaderValue, ConfigError> {
    let mut value = HeaderValue::from_str(raw).map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: "must only contain visible ASCII characters".to_string(),
    })?;
    value.set_sensitive(true);

    Ok(value)
}

/// Parses a comma separated origin list into header values for the CORS layer.
///
/// # Arguments
/// - `raw` - Comma separated origins, e.g. `http://a.test, http://b.test`
///
/// # Returns
/// - `Ok(Vec<HeaderValue>)` - One value per non-empty entry
/// - `Err(ConfigError::InvalidValue)` - An entry is not a valid header value or the list is empty
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("'{}' is not a valid origin", origin),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        return Err(ConfigError::InvalidValue {
            name: "CORS_ALLOWED_ORIGINS".to_string(),
            reason: "at least one origin is required".to_string(),
        });
    }

    Ok(origins)
}
