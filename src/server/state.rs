//! Application state shared across all request handlers of a service.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::middleware::trust::GatewaySecret;

/// Shared resources of a backend service.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `GatewaySecret` wraps an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Secret the gateway attaches to every relayed request.
    pub gateway_secret: GatewaySecret,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `gateway_secret` - Shared secret expected on every inbound request
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, gateway_secret: GatewaySecret) -> Self {
        Self { db, gateway_secret }
    }
}
