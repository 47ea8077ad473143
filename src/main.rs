mod model;
mod server;

use clap::{Parser, Subcommand};

use crate::server::{config::ServiceKind, error::AppError, startup};

/// Pet-sitting marketplace backend: REST services and the gateway in front of them.
#[derive(Debug, Parser)]
#[command(name = "petguard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the API gateway
    Gateway,
    /// Run one backend service
    Service {
        #[arg(value_enum)]
        kind: ServiceKind,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Gateway => startup::run_gateway().await,
        Command::Service { kind } => startup::run_service(kind).await,
    };

    if let Err(e) = &result {
        tracing::error!("Fatal error: {}", e);
    }

    result
}
