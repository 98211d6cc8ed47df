use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nratakit::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nratakit=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Serve { host, port } => cli::commands::serve(host, port).await,
        Commands::Check { path, cookie } => cli::commands::check(&path, cookie).await,
        Commands::Routes { format } => cli::commands::routes(format).await,
    }
}
