//! Route guard middleware for axum

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::guard::{Decision, RouteGuard};
use super::matcher::ExclusionMatcher;
use crate::config::Config;
use crate::error::Result;

/// Guard plus the exclusion matcher that runs in front of it
#[derive(Clone)]
pub struct GuardState {
    pub guard: Arc<RouteGuard>,
    pub exclusions: Arc<ExclusionMatcher>,
}

impl GuardState {
    pub fn new(guard: RouteGuard, exclusions: ExclusionMatcher) -> Self {
        Self {
            guard: Arc::new(guard),
            exclusions: Arc::new(exclusions),
        }
    }

    /// Build from a config, rejecting route sets the guard cannot enforce
    pub fn from_config(config: &Config) -> Result<Self> {
        config.routes.validate()?;
        let exclusions = ExclusionMatcher::new(&config.routes.excluded)?;
        Ok(Self::new(RouteGuard::from_config(config), exclusions))
    }
}

/// Middleware that applies the route guard to every non-excluded request.
///
/// Redirects use `307 Temporary Redirect` with a relative `Location`.
pub async fn route_guard(State(state): State<GuardState>, req: Request, next: Next) -> Response {
    if state.exclusions.is_excluded(req.uri().path()) {
        return next.run(req).await;
    }

    match state.guard.check(&req) {
        Decision::Redirect(target) => {
            tracing::debug!(path = %req.uri().path(), %target, "route guard redirect");
            Redirect::temporary(&target).into_response()
        }
        Decision::Pass => next.run(req).await,
    }
}
