//! HTTP host

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::auth::{route_guard, GuardState};
use crate::config::Config;
use crate::error::{Error, Result};

use super::routes;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
}

pub type SharedState = Arc<AppState>;

/// Run the HTTP host
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    serve(config, listener).await
}

/// Serve on an already bound listener
pub async fn serve(config: Config, listener: TcpListener) -> Result<()> {
    let app = create_router(config)?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Paths mounted by the router besides the protected area
const MOUNTED_PATHS: [&str; 9] = [
    "/api/health",
    "/api/forms",
    "/",
    "/login",
    "/signup",
    "/reset-password",
    "/new-password",
    "/resend-verification",
    "/check-email",
];

/// Create the router with all routes, guarded by the route guard
pub fn create_router(config: Config) -> Result<Router> {
    let guard = GuardState::from_config(&config)?;
    let protected_root = config.routes.protected_root.clone();

    if let Some(path) = MOUNTED_PATHS
        .iter()
        .find(|path| path.starts_with(protected_root.as_str()))
    {
        return Err(Error::Config(format!(
            "protected_root '{}' overlaps the mounted route '{}'",
            protected_root, path
        )));
    }

    let state = Arc::new(AppState { config });

    let router = Router::new()
        // API routes, never guarded
        .route("/api/health", get(routes::health))
        .route("/api/forms/{form}", post(routes::validate_form))
        // Pages
        .route("/", get(crate::ui::home))
        .route("/login", get(crate::ui::login))
        .route("/signup", get(crate::ui::signup))
        .route("/reset-password", get(crate::ui::reset_password))
        .route("/new-password", get(crate::ui::new_password))
        .route("/resend-verification", get(crate::ui::resend_verification))
        .route("/check-email", get(crate::ui::check_email))
        .route(&protected_root, get(crate::ui::dashboard))
        .route(&format!("{}/{{*rest}}", protected_root), get(crate::ui::dashboard))
        .fallback(crate::ui::not_found)
        // Middleware
        .layer(middleware::from_fn_with_state(guard, route_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}
