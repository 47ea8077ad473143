//! Process startup for both roles.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::{GatewayConfig, ServiceConfig, ServiceKind},
    error::AppError,
    gateway::{self, config::load_route_table, GatewayState},
    middleware::trust::GatewaySecret,
    router,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "petguard=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the given connection string, then runs all
/// pending SeaORM migrations so the schema is up-to-date. Every service runs the
/// same migrations; already-applied ones are skipped.
///
/// # Arguments
/// - `database_url` - SeaORM connection string (`sqlite://...` or `postgres://...`)
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client the gateway forwards requests with.
///
/// Redirects are not followed so that backend redirects reach the client unchanged.
pub fn setup_reqwest_client(config: &GatewayConfig) -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.upstream_timeout)
        .build()?;

    Ok(client)
}

/// Runs one backend service until a shutdown signal arrives.
pub async fn run_service(kind: ServiceKind) -> Result<(), AppError> {
    let config = ServiceConfig::from_env(kind)?;

    let db = connect_to_database(&config.database_url).await?;
    let state = AppState::new(db, GatewaySecret::new(config.gateway_secret));
    let app = router::build(kind, state, config.cors_allowed_origins);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!(
        service = kind.name(),
        address = %config.bind_address,
        "Starting service"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Runs the gateway until a shutdown signal arrives.
pub async fn run_gateway() -> Result<(), AppError> {
    let config = GatewayConfig::from_env()?;

    let routes = load_route_table(&config)?;
    let client = setup_reqwest_client(&config)?;
    tracing::info!(routes = routes.len(), "Loaded gateway route table");

    let state = GatewayState::new(
        routes,
        client,
        config.gateway_secret.clone(),
        &config.jwt_secret,
        config.upstream_timeout,
    );
    let app = gateway::router(state, config.cors_allowed_origins.clone());

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "Starting gateway");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
