//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;

pub const CONFIG_FILENAME: &str = "nratakit.toml";

/// Load configuration from nratakit.toml, falling back to defaults when none exists
pub fn load_config() -> Result<Config> {
    match find_config_file() {
        Ok(path) => load_config_from_path(&path),
        Err(Error::ConfigNotFound) => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILENAME);
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    config.routes.validate()?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Write the default configuration into `dir`, refusing to overwrite
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        return Err(Error::ConfigExists(path.display().to_string()));
    }
    fs::write(&path, default_config_content())?;
    Ok(path)
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# nratakit configuration

[server]
host = "0.0.0.0"
port = 3000

[routes]
# Pages only meant for visitors without a session.
# A visitor with a session cookie is sent to protected_root instead.
auth_pages = [
    "/login",
    "/signup",
    "/reset-password",
    "/new-password",
    "/resend-verification",
]
protected_root = "/dashboard"
login_path = "/login"

# Paths starting with these (after the leading '/') skip the guard entirely
excluded = ["api", "_next/static", "_next/image", "favicon.ico", "sitemap.xml", "robots.txt"]

[session]
cookie_prefix = "better-auth"
expires_in = 604800          # 7 days
update_age = 86400           # 1 day
cookie_cache_max_age = 300   # 5 minutes
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_interpolation() {
        env::set_var("NRATAKIT_TEST_VAR", "hello");
        let content = "value = \"${NRATAKIT_TEST_VAR}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "value = \"hello\"");
        env::remove_var("NRATAKIT_TEST_VAR");
    }

    #[test]
    fn test_env_interpolation_with_default() {
        let content = "value = \"${NONEXISTENT_VAR:-default_value}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "value = \"default_value\"");
    }

    #[test]
    fn test_default_content_parses() {
        let content = interpolate_env_vars(default_config_content());
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.routes, crate::config::RouteConfig::default());
        assert_eq!(config.session, crate::config::SessionConfig::default());
    }
}
