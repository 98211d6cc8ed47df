//! CLI interface for nratakit

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "nratakit")]
#[command(version)]
#[command(about = "Session-aware route guard for the nratakit web app", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default nratakit.toml into the current directory
    Init,

    /// Start the HTTP host with the route guard in front of every page
    Serve {
        /// Host to bind to (defaults to server.host from the config)
        #[arg(long, env = "NRATAKIT_HOST")]
        host: Option<String>,

        /// Port to listen on (defaults to server.port from the config)
        #[arg(short, long, env = "NRATAKIT_PORT")]
        port: Option<u16>,
    },

    /// Show what the route guard would do with a request
    Check {
        /// Request path, e.g. /dashboard/settings
        path: String,

        /// Raw Cookie header sent with the request
        #[arg(short, long)]
        cookie: Option<String>,
    },

    /// Show the configured route sets
    Routes {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
