//! nratakit - session-aware route guard and auth-flow glue
//!
//! The library exposes the route guard, its axum middleware, the auth form
//! rules and the HTTP host that ties them together.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod ui;

pub use auth::{Decision, RouteGuard};
pub use config::Config;
pub use error::Error;
