//! Configuration schema definitions

use serde::{Deserialize, Serialize};

use crate::forms::flows::CHECK_EMAIL_PATH;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routes: RouteConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Server configuration for the HTTP host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Path sets consumed by the route guard and the exclusion matcher
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    /// Pages only meant for visitors without a session
    #[serde(default = "default_auth_pages")]
    pub auth_pages: Vec<String>,

    /// Every path starting with this prefix requires a session
    #[serde(default = "default_protected_root")]
    pub protected_root: String,

    /// Where visitors without a session are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Path prefixes (after the leading `/`) that never reach the guard
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

fn default_auth_pages() -> Vec<String> {
    [
        "/login",
        "/signup",
        "/reset-password",
        "/new-password",
        "/resend-verification",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_protected_root() -> String {
    "/dashboard".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_excluded() -> Vec<String> {
    [
        "api",
        "_next/static",
        "_next/image",
        "favicon.ico",
        "sitemap.xml",
        "robots.txt",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            auth_pages: default_auth_pages(),
            protected_root: default_protected_root(),
            login_path: default_login_path(),
            excluded: default_excluded(),
        }
    }
}

impl RouteConfig {
    /// Check the path sets for values the guard cannot work with
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::Error;

        for path in self
            .auth_pages
            .iter()
            .chain([&self.protected_root, &self.login_path])
        {
            if !path.starts_with('/') {
                return Err(Error::Config(format!(
                    "route path '{}' must start with '/'",
                    path
                )));
            }
        }

        let root = &self.protected_root;

        if root == "/" {
            return Err(Error::Config(
                "protected_root cannot be '/', every page would require a session".to_string(),
            ));
        }

        // The guard matches a plain prefix, so "/app/" would leave "/app" itself open
        if root.ends_with('/') {
            return Err(Error::Config(format!(
                "protected_root '{}' must not end with '/'",
                root
            )));
        }

        if root.contains(['{', '}', '*']) {
            return Err(Error::Config(format!(
                "protected_root '{}' must be a literal path",
                root
            )));
        }

        // A login page under the protected root would redirect to itself forever
        if self.login_path.starts_with(root.as_str()) {
            return Err(Error::Config(format!(
                "login_path '{}' lies under protected_root '{}'",
                self.login_path, root
            )));
        }

        if let Some(page) = self
            .auth_pages
            .iter()
            .map(String::as_str)
            .chain([CHECK_EMAIL_PATH])
            .find(|page| page.starts_with(root.as_str()))
        {
            return Err(Error::Config(format!(
                "protected_root '{}' covers the public page '{}'",
                root, page
            )));
        }

        Ok(())
    }
}

/// Session cookie and lifetime settings shared with the auth service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Cookie name prefix used by the auth service
    #[serde(default = "default_cookie_prefix")]
    pub cookie_prefix: String,

    /// Session lifetime in seconds
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,

    /// How old a session must be before it is refreshed, in seconds
    #[serde(default = "default_update_age")]
    pub update_age: u64,

    /// Lifetime of the signed session cache cookie, in seconds
    #[serde(default = "default_cookie_cache_max_age")]
    pub cookie_cache_max_age: u64,
}

fn default_cookie_prefix() -> String {
    "better-auth".to_string()
}

fn default_expires_in() -> u64 {
    60 * 60 * 24 * 7
}

fn default_update_age() -> u64 {
    60 * 60 * 24
}

fn default_cookie_cache_max_age() -> u64 {
    5 * 60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_prefix: default_cookie_prefix(),
            expires_in: default_expires_in(),
            update_age: default_update_age(),
            cookie_cache_max_age: default_cookie_cache_max_age(),
        }
    }
}

impl SessionConfig {
    /// Full name of the session token cookie
    pub fn cookie_name(&self) -> String {
        format!("{}.session_token", self.cookie_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        let routes = RouteConfig::default();
        assert_eq!(routes.auth_pages.len(), 5);
        assert_eq!(routes.protected_root, "/dashboard");
        assert_eq!(routes.login_path, "/login");
        assert!(routes.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[routes]\nprotected_root = \"/app\"\n").unwrap();
        assert_eq!(config.routes.protected_root, "/app");
        assert_eq!(config.routes.login_path, "/login");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_login_under_protected_root_rejected() {
        let routes = RouteConfig {
            login_path: "/dashboard/login".to_string(),
            ..RouteConfig::default()
        };
        assert!(routes.validate().is_err());
    }

    #[test]
    fn test_relative_path_rejected() {
        let routes = RouteConfig {
            auth_pages: vec!["login".to_string()],
            ..RouteConfig::default()
        };
        assert!(routes.validate().is_err());
    }

    #[test]
    fn test_trailing_slash_root_rejected() {
        let routes = RouteConfig {
            protected_root: "/app/".to_string(),
            ..RouteConfig::default()
        };
        assert!(routes.validate().is_err());
    }

    #[test]
    fn test_root_covering_public_page_rejected() {
        for root in ["/signup", "/log", "/check-email"] {
            let routes = RouteConfig {
                protected_root: root.to_string(),
                login_path: "/sign-in".to_string(),
                ..RouteConfig::default()
            };
            assert!(routes.validate().is_err(), "{}", root);
        }
    }

    #[test]
    fn test_root_with_route_syntax_rejected() {
        let routes = RouteConfig {
            protected_root: "/app/{id}".to_string(),
            ..RouteConfig::default()
        };
        assert!(routes.validate().is_err());
    }

    #[test]
    fn test_cookie_name() {
        assert_eq!(
            SessionConfig::default().cookie_name(),
            "better-auth.session_token"
        );
    }
}
