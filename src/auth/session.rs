//! Session cookie lookup
//!
//! Only the presence of the auth service's session token cookie is checked
//! here. The token is never decoded or verified; that is the auth service's job.

use axum::http::{header, HeaderMap};
use thiserror::Error;

use crate::config::SessionConfig;

/// Prefix browsers require for cookies set with the `Secure` attribute over HTTPS
const SECURE_PREFIX: &str = "__Secure-";

/// Failure to read the `Cookie` header at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CookieError {
    #[error("Cookie header is not valid visible ASCII")]
    Malformed,
}

/// The recognized names of the session token cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    secure_name: String,
}

impl SessionCookie {
    /// Recognize `name` and its `__Secure-` variant
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let secure_name = format!("{}{}", SECURE_PREFIX, name);
        Self { name, secure_name }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.cookie_name())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn secure_name(&self) -> &str {
        &self.secure_name
    }

    fn matches(&self, name: &str) -> bool {
        name == self.name || name == self.secure_name
    }

    /// Find the session token value across all `Cookie` headers.
    ///
    /// Empty values are skipped, so `better-auth.session_token=` does not
    /// count as a session.
    pub fn find(&self, headers: &HeaderMap) -> Result<Option<String>, CookieError> {
        for value in headers.get_all(header::COOKIE) {
            let raw = value.to_str().map_err(|_| CookieError::Malformed)?;
            let found = cookie_pairs(raw)
                .find(|(name, value)| self.matches(name) && !value.is_empty())
                .map(|(_, value)| value.to_string());
            if found.is_some() {
                return Ok(found);
            }
        }
        Ok(None)
    }

    /// Whether a non-empty session token cookie is present
    pub fn is_present(&self, headers: &HeaderMap) -> Result<bool, CookieError> {
        self.find(headers).map(|token| token.is_some())
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

/// Split a `Cookie` header into `(name, value)` pairs, skipping pairs without `=`
pub fn cookie_pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(';').filter_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        Some((name.trim(), value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(values: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for v in values {
            map.append(header::COOKIE, HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn test_no_cookie_header() {
        let cookie = SessionCookie::default();
        assert_eq!(cookie.is_present(&HeaderMap::new()), Ok(false));
    }

    #[test]
    fn test_plain_session_cookie() {
        let cookie = SessionCookie::default();
        let map = headers(&["theme=dark; better-auth.session_token=abc.def"]);
        assert_eq!(cookie.find(&map), Ok(Some("abc.def".to_string())));
    }

    #[test]
    fn test_secure_session_cookie() {
        let cookie = SessionCookie::default();
        let map = headers(&["__Secure-better-auth.session_token=xyz"]);
        assert_eq!(cookie.is_present(&map), Ok(true));
    }

    #[test]
    fn test_empty_value_ignored() {
        let cookie = SessionCookie::default();
        let map = headers(&["better-auth.session_token="]);
        assert_eq!(cookie.is_present(&map), Ok(false));
    }

    #[test]
    fn test_similar_names_ignored() {
        let cookie = SessionCookie::default();
        let map = headers(&["better-auth.session_data=abc; session_token=abc"]);
        assert_eq!(cookie.is_present(&map), Ok(false));
    }

    #[test]
    fn test_second_cookie_header() {
        let cookie = SessionCookie::default();
        let map = headers(&["theme=dark", "better-auth.session_token=abc"]);
        assert_eq!(cookie.is_present(&map), Ok(true));
    }

    #[test]
    fn test_custom_prefix() {
        let config = SessionConfig {
            cookie_prefix: "nratakit".to_string(),
            ..SessionConfig::default()
        };
        let cookie = SessionCookie::from_config(&config);
        assert_eq!(cookie.secure_name(), "__Secure-nratakit.session_token");
        let map = headers(&["nratakit.session_token=abc"]);
        assert_eq!(cookie.is_present(&map), Ok(true));
    }

    #[test]
    fn test_non_ascii_header_is_malformed() {
        let cookie = SessionCookie::default();
        let mut map = HeaderMap::new();
        map.insert(
            header::COOKIE,
            HeaderValue::from_bytes(b"better-auth.session_token=\xff").unwrap(),
        );
        assert_eq!(cookie.is_present(&map), Err(CookieError::Malformed));
    }

    #[test]
    fn test_cookie_pairs_skips_garbage() {
        let pairs: Vec<_> = cookie_pairs("a=1; junk; b = \"2\" ;;").collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }
}
