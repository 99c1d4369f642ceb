// File: src/route.rs
// Purpose: Route names and the `route_is` matching capability

use crate::error::{LayoutError, Result};
use regex::Regex;
use std::fmt;

/// Name of the currently matched route, e.g. `backend.users.index`
///
/// Route names are assigned by the host router. Fleuron never parses them,
/// it only asks whether they match a pattern. Unnamed routes use the empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteName(String);

impl RouteName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RouteName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The host router's "is the current route one of these?" capability
///
/// Selection only ever goes through this trait, so any router can drive it.
/// Plain closures work too:
///
/// ```
/// use fleuron::RouteMatcher;
///
/// let always_backend = |_pattern: &str| true;
/// assert!(always_backend.route_is("backend.*"));
/// ```
pub trait RouteMatcher {
    /// Whether the current route matches `pattern`
    fn route_is(&self, pattern: &str) -> bool;

    /// Whether the current route matches an already compiled pattern
    fn route_matches(&self, pattern: &RoutePattern) -> bool {
        self.route_is(pattern.as_str())
    }

    /// Whether the current route matches any of `patterns`
    fn route_is_any(&self, patterns: &[RoutePattern]) -> bool {
        patterns.iter().any(|pattern| self.route_matches(pattern))
    }
}

impl<F> RouteMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn route_is(&self, pattern: &str) -> bool {
        self(pattern)
    }
}

impl RouteMatcher for RouteName {
    /// Compiles `pattern` on every call; selection goes through `route_matches`.
    /// An invalid pattern matches nothing.
    fn route_is(&self, pattern: &str) -> bool {
        RoutePattern::new(pattern)
            .map(|compiled| compiled.matches(self.as_str()))
            .unwrap_or(false)
    }

    fn route_matches(&self, pattern: &RoutePattern) -> bool {
        pattern.matches(self.as_str())
    }
}

/// A compiled named-route pattern
///
/// The whole route name must match. `*` matches any run of characters
/// (including none) and everything else is literal, so `backend.*` matches
/// `backend.users.index` and `backend.` but not `backend` or `backendish.home`.
/// Empty patterns and patterns containing whitespace are rejected, route names
/// never contain either.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    regex: Regex,
}

impl RoutePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let invalid = |reason: &str| LayoutError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if pattern.is_empty() {
            return Err(invalid("pattern is empty"));
        }
        if pattern.chars().any(char::is_whitespace) {
            return Err(invalid("pattern contains whitespace"));
        }

        let body = regex::escape(pattern).replace(r"\*", ".*");
        let regex = Regex::new(&format!("(?s)^{}$", body)).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Compile every pattern, failing on the first invalid one
    pub fn compile_all<I, P>(patterns: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|pattern| Self::new(pattern.as_ref()))
            .collect()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}
