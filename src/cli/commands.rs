//! CLI command implementations

use anyhow::Result;
use axum::http::{header, HeaderValue, Request};

use crate::auth::{Decision, GuardState};
use crate::cli::{error, format_decision, info, print_routes_table, success, warn, OutputFormat};
use crate::config::{self, Config};
use crate::error::Error;

/// Initialize a new nratakit.toml configuration file
pub async fn init() -> Result<()> {
    let dir = std::env::current_dir()?;

    match config::init_config(&dir) {
        Ok(path) => {
            success(&format!("Created {}", path.display()));
            info("Edit the route sets if your pages differ, then run 'nratakit serve'");
            Ok(())
        }
        Err(Error::ConfigExists(path)) => {
            warn(&format!("{} already exists", path));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Start the HTTP host
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = load_config()?;
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    info(&format!("Starting server at http://{}:{}", host, port));

    if let Err(e) = crate::api::run_server(config, &host, port).await {
        error(&format!("Server stopped: {}", e));
        return Err(e.into());
    }
    Ok(())
}

/// What the guard does with one request; `None` when the path never reaches it
pub fn evaluate(config: &Config, path: &str, cookie: Option<&str>) -> Result<Option<Decision>> {
    let state = GuardState::from_config(config)?;
    if state.exclusions.is_excluded(path) {
        return Ok(None);
    }

    let mut request = Request::builder().uri(path);
    if let Some(raw) = cookie {
        // Raw bytes, so a header the guard cannot read still reaches it
        request = request.header(header::COOKIE, HeaderValue::from_bytes(raw.as_bytes())?);
    }
    let request = request.body(())?;

    Ok(Some(state.guard.check(&request)))
}

/// Print the guard decision for a path and optional Cookie header
pub async fn check(path: &str, cookie: Option<String>) -> Result<()> {
    let config = load_config()?;

    match evaluate(&config, path, cookie.as_deref()) {
        Ok(None) => info(&format!("{} is excluded, the guard never sees it", path)),
        Ok(Some(decision)) => println!("{} {}", path, format_decision(&decision)),
        Err(e) => {
            error(&format!("Cannot check {}: {}", path, e));
            return Err(e);
        }
    }

    Ok(())
}

/// Print the configured route sets
pub async fn routes(format: OutputFormat) -> Result<()> {
    let config = load_config()?;

    match format {
        OutputFormat::Table => print_routes_table(&config.routes),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config.routes)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&config.routes)?),
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    Ok(config::load_config()?)
}
