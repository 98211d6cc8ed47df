//! Exclusion matcher deciding which paths never reach the route guard

use regex::Regex;

use crate::error::Result;

/// Path prefixes matched right after the leading `/`.
///
/// Each prefix is a regex fragment, as in a `/((?!api|favicon.ico).*)` route
/// matcher: `api` excludes `/api`, `/api/health` and also `/apiary`, and the
/// unescaped `.` in `favicon.ico` matches any character.
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    pattern: Option<Regex>,
}

impl ExclusionMatcher {
    pub fn new<S: AsRef<str>>(prefixes: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = prefixes
            .iter()
            .map(|p| p.as_ref().trim_start_matches('/'))
            .filter(|p| !p.is_empty())
            .map(|p| format!("(?:{})", p))
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&format!("^/(?:{})", alternatives.join("|")))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Matcher that lets every path through to the guard
    pub fn none() -> Self {
        Self { pattern: None }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.pattern
            .as_ref()
            .map(|re| re.is_match(path))
            .unwrap_or(false)
    }
}
