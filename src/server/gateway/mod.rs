//! API gateway.
//!
//! A single public entry point that resolves each request against an ordered
//! route table, checks the caller's bearer token and relays the request to the
//! matching backend with the trust headers set.

pub mod config;
pub mod identity;
pub mod proxy;
pub mod rewrite;
pub mod route;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::server::{
    gateway::{identity::TokenVerifier, route::RouteTable},
    middleware::cors::cors_layer,
};

#[derive(Clone)]
pub struct GatewayState {
    pub routes: Arc<RouteTable>,
    pub client: reqwest::Client,
    /// Value of the trust header set on every forwarded request.
    pub secret: HeaderValue,
    pub verifier: Arc<TokenVerifier>,
    pub upstream_timeout: Duration,
}

impl GatewayState {
    pub fn new(
        routes: RouteTable,
        client: reqwest::Client,
        secret: HeaderValue,
        jwt_secret: &str,
        upstream_timeout: Duration,
    ) -> Self {
        Self {
            routes: Arc::new(routes),
            client,
            secret,
            verifier: Arc::new(TokenVerifier::new(jwt_secret)),
            upstream_timeout,
        }
    }
}

/// Builds the gateway application.
///
/// `/health` is answered locally; everything else goes through the route table.
pub fn router(state: GatewayState, cors_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(proxy::forward)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
