//! Session-aware route guard
//!
//! Two rules, checked in this order, first match wins:
//!
//! 1. A visitor with a session cookie asking for an auth page (login, signup,
//!    password reset, ...) is redirected to the protected root.
//! 2. A visitor without a session cookie asking for anything under the
//!    protected root is redirected to the login page.
//!
//! Everything else passes through. Cookie presence is the only signal, the
//! token itself is never verified here.

use axum::http::Request;

use super::session::{CookieError, SessionCookie};
use crate::config::{Config, RouteConfig};

/// Minimal view of an inbound request the guard needs
pub trait GuardRequest {
    /// Normalized URL path, without host or query
    fn path(&self) -> &str;

    /// Whether a session cookie is present. `Err` means the cookies could not be read.
    fn has_session_cookie(&self, cookie: &SessionCookie) -> Result<bool, CookieError>;
}

impl<B> GuardRequest for Request<B> {
    fn path(&self) -> &str {
        self.uri().path()
    }

    fn has_session_cookie(&self, cookie: &SessionCookie) -> Result<bool, CookieError> {
        cookie.is_present(self.headers())
    }
}

/// What the guard wants done with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Send the visitor to this path instead
    Redirect(String),
    /// Continue normal routing
    Pass,
}

impl Decision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Decision::Redirect(_))
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Decision::Redirect(target) => Some(target),
            Decision::Pass => None,
        }
    }
}

/// How the guard sees a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    AuthPage,
    Protected,
    Other,
}

impl std::fmt::Display for RouteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteClass::AuthPage => write!(f, "auth-page"),
            RouteClass::Protected => write!(f, "protected"),
            RouteClass::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    auth_pages: Vec<String>,
    protected_root: String,
    login_path: String,
    cookie: SessionCookie,
}

impl RouteGuard {
    pub fn new(routes: &RouteConfig, cookie: SessionCookie) -> Self {
        Self {
            auth_pages: routes.auth_pages.clone(),
            protected_root: routes.protected_root.clone(),
            login_path: routes.login_path.clone(),
            cookie,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.routes, SessionCookie::from_config(&config.session))
    }

    pub fn cookie(&self) -> &SessionCookie {
        &self.cookie
    }

    pub fn is_auth_page(&self, path: &str) -> bool {
        self.auth_pages.iter().any(|p| p == path)
    }

    pub fn is_protected(&self, path: &str) -> bool {
        path.starts_with(&self.protected_root)
    }

    /// Classify a path. Auth pages win over the protected prefix.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.is_auth_page(path) {
            RouteClass::AuthPage
        } else if self.is_protected(path) {
            RouteClass::Protected
        } else {
            RouteClass::Other
        }
    }

    /// Decide from a path and an already resolved cookie presence
    pub fn decide(&self, path: &str, has_session: bool) -> Decision {
        if has_session && self.is_auth_page(path) {
            return Decision::Redirect(self.protected_root.clone());
        }

        if !has_session && self.is_protected(path) {
            return Decision::Redirect(self.login_path.clone());
        }

        Decision::Pass
    }

    /// Decide for a request.
    ///
    /// Unreadable cookies count as no session: protected pages stay locked
    /// and auth pages stay reachable.
    pub fn check<R: GuardRequest + ?Sized>(&self, req: &R) -> Decision {
        let has_session = req.has_session_cookie(&self.cookie).unwrap_or(false);
        self.decide(req.path(), has_session)
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
