//! Session-aware route guarding

pub mod guard;
pub mod matcher;
pub mod middleware;
pub mod session;

pub use guard::{Decision, GuardRequest, RouteClass, RouteGuard};
pub use matcher::ExclusionMatcher;
pub use middleware::{route_guard, GuardState};
pub use session::{CookieError, SessionCookie};
