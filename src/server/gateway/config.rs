//! Route table loading.
//!
//! The table comes from the TOML file named by `GATEWAY_ROUTES_FILE` when set,
//! otherwise from a built-in table pointing every `/api/<service>` prefix at the
//! service URLs from the environment. Bad regexes, URLs, methods and header
//! names are rejected at load time.

use std::str::FromStr;

use axum::http::{HeaderName, HeaderValue, Method};
use clap::ValueEnum;
use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::server::{
    config::{parse_url, GatewayConfig, ServiceKind},
    error::config::ConfigError,
    gateway::{
        rewrite::RewriteRule,
        route::{Route, RoutePattern, RouteTable},
    },
};

/// Root of the route file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteFile {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One `[[routes]]` entry. Exactly one of `path_prefix` and `path_regex` must be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub name: String,
    #[serde(default)]
    pub path_prefix: Option<String>,
    #[serde(default)]
    pub path_regex: Option<String>,
    /// Empty means every method.
    #[serde(default)]
    pub methods: Vec<String>,
    /// A service name (`users`, `chat`, ...) or an absolute URL.
    pub backend: String,
    #[serde(default = "default_authenticated")]
    pub authenticated: bool,
    #[serde(default)]
    pub rewrites: Vec<RewriteEntry>,
}

fn default_authenticated() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum RewriteEntry {
    RewritePath { pattern: String, replacement: String },
    StripPrefix { segments: usize },
    SetRequestHeader { name: String, value: String },
    RemoveRequestHeader { name: String },
}

/// Loads the route table described by the gateway configuration.
pub fn load_route_table(config: &GatewayConfig) -> Result<RouteTable, ConfigError> {
    match &config.routes_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::RouteFileIo {
                path: path.clone(),
                source,
            })?;
            let file: RouteFile =
                toml::from_str(&raw).map_err(|source| ConfigError::RouteFileParse {
                    path: path.clone(),
                    source,
                })?;
            build_route_table(file, config)
        }
        None => default_route_table(config),
    }
}

/// Parses route file contents. Used for files and in tests.
pub fn parse_route_table(raw: &str, config: &GatewayConfig) -> Result<RouteTable, ConfigError> {
    let file: RouteFile = toml::from_str(raw).map_err(|source| ConfigError::RouteFileParse {
        path: "<inline>".to_string(),
        source,
    })?;
    build_route_table(file, config)
}

fn build_route_table(file: RouteFile, config: &GatewayConfig) -> Result<RouteTable, ConfigError> {
    if file.routes.is_empty() {
        return Err(invalid("routes", "the route file declares no routes"));
    }

    let routes = file
        .routes
        .into_iter()
        .map(|entry| build_route(entry, config))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RouteTable::new(routes))
}

fn build_route(entry: RouteEntry, config: &GatewayConfig) -> Result<Route, ConfigError> {
    let field = |name: &str| format!("routes.{}.{}", entry.name, name);

    let pattern = match (&entry.path_prefix, &entry.path_regex) {
        (Some(prefix), None) => {
            if !prefix.starts_with('/') {
                return Err(invalid(&field("path_prefix"), "must start with '/'"));
            }
            RoutePattern::Prefix(prefix.clone())
        }
        (None, Some(source)) => RoutePattern::regex(source)
            .map_err(|e| invalid(&field("path_regex"), &e.to_string()))?,
        _ => {
            return Err(invalid(
                &entry.name,
                "exactly one of path_prefix and path_regex must be set",
            ))
        }
    };

    let methods = if entry.methods.is_empty() {
        None
    } else {
        Some(
            entry
                .methods
                .iter()
                .map(|m| {
                    Method::from_str(&m.to_uppercase())
                        .map_err(|_| invalid(&field("methods"), &format!("unknown method '{}'", m)))
                })
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    let backend = resolve_backend(&entry.backend, config, &field("backend"))?;

    let rewrites = entry
        .rewrites
        .into_iter()
        .map(|rule| build_rewrite(rule, &field("rewrites")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route {
        name: entry.name,
        pattern,
        methods,
        rewrites,
        backend,
        authenticated: entry.authenticated,
    })
}

fn resolve_backend(raw: &str, config: &GatewayConfig, field: &str) -> Result<Url, ConfigError> {
    if let Ok(kind) = <ServiceKind as ValueEnum>::from_str(raw, true) {
        return config
            .service_url(kind)
            .cloned()
            .ok_or_else(|| invalid(field, &format!("no URL configured for service '{}'", raw)));
    }

    parse_url(field, raw)
}

fn build_rewrite(entry: RewriteEntry, field: &str) -> Result<RewriteRule, ConfigError> {
    let header_name = |name: &str| {
        HeaderName::from_str(name)
            .map_err(|_| invalid(field, &format!("invalid header name '{}'", name)))
    };

    Ok(match entry {
        RewriteEntry::RewritePath {
            pattern,
            replacement,
        } => RewriteRule::RewritePath {
            pattern: Regex::new(&pattern).map_err(|e| invalid(field, &e.to_string()))?,
            replacement,
        },
        RewriteEntry::StripPrefix { segments } => RewriteRule::StripPrefix { segments },
        RewriteEntry::SetRequestHeader { name, value } => RewriteRule::SetRequestHeader {
            name: header_name(&name)?,
            value: HeaderValue::from_str(&value)
                .map_err(|_| invalid(field, &format!("invalid value for header '{}'", name)))?,
        },
        RewriteEntry::RemoveRequestHeader { name } => RewriteRule::RemoveRequestHeader {
            name: header_name(&name)?,
        },
    })
}

/// Built-in table used when no route file is configured.
///
/// Public reads of announcements and ratings come first so that they are not
/// captured by the authenticated prefix routes declared after them.
pub fn default_route_table(config: &GatewayConfig) -> Result<RouteTable, ConfigError> {
    let url = |kind: ServiceKind| {
        config
            .service_url(kind)
            .cloned()
            .ok_or_else(|| invalid(&kind.url_env_var(), "missing service URL"))
    };
    let public_get = |name: &str, source: &str, kind: ServiceKind| -> Result<Route, ConfigError> {
        Ok(Route {
            name: name.to_string(),
            pattern: RoutePattern::regex(source).map_err(|e| invalid(name, &e.to_string()))?,
            methods: Some(vec![Method::GET]),
            rewrites: vec![],
            backend: url(kind)?,
            authenticated: false,
        })
    };

    let mut routes = vec![
        public_get(
            "announcements-public",
            "/api/announcements(/[0-9]+)?",
            ServiceKind::Announcements,
        )?,
        public_get(
            "ratings-public",
            "/api/ratings/user/[^/]+(/summary)?",
            ServiceKind::Ratings,
        )?,
    ];

    for kind in ServiceKind::ALL {
        routes.push(Route {
            name: kind.name().to_string(),
            pattern: RoutePattern::Prefix(kind.path_prefix().to_string()),
            methods: None,
            rewrites: vec![],
            backend: url(kind)?,
            authenticated: true,
        });
    }

    Ok(RouteTable::new(routes))
}

fn invalid(name: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
