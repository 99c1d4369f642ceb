// File: src/selector.rs
// Purpose: Explicit-branch layout selection

use crate::error::Result;
use crate::layout::{LayoutName, LayoutRequest};
use crate::layouts::LayoutSet;
use crate::route::{RouteMatcher, RoutePattern};
use maud::Markup;
use tracing::debug;

/// Routes under this namespace get the backend shell
pub const DEFAULT_BACKEND_PATTERN: &str = "backend.*";

/// Chooses between the backend and frontend shell for the current route
///
/// ```
/// use fleuron::{LayoutName, LayoutRequest, LayoutSelector, LayoutSet, RouteName};
///
/// let selector = LayoutSelector::new(LayoutSet::standard("Acme"))?;
/// let route = RouteName::from("backend.users.index");
///
/// assert_eq!(selector.select(&route), LayoutName::Backend);
/// let page = selector.select_and_render(&route, &LayoutRequest::from_html("<p>list</p>"));
/// assert!(page.into_string().contains("<p>list</p>"));
/// # Ok::<(), fleuron::LayoutError>(())
/// ```
#[derive(Clone)]
pub struct LayoutSelector {
    backend_patterns: Vec<RoutePattern>,
    layouts: LayoutSet,
}

impl LayoutSelector {
    /// Selector with the default `backend.*` namespace
    pub fn new(layouts: LayoutSet) -> Result<Self> {
        Ok(Self {
            backend_patterns: RoutePattern::compile_all([DEFAULT_BACKEND_PATTERN])?,
            layouts,
        })
    }

    /// Replace the patterns that mark a route as backend
    pub fn with_backend_patterns<I, P>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Ok(self.with_compiled_patterns(RoutePattern::compile_all(patterns)?))
    }

    pub fn with_compiled_patterns(mut self, patterns: Vec<RoutePattern>) -> Self {
        self.backend_patterns = patterns;
        self
    }

    pub fn backend_patterns(&self) -> &[RoutePattern] {
        &self.backend_patterns
    }

    pub fn layouts(&self) -> &LayoutSet {
        &self.layouts
    }

    pub fn select<R>(&self, route: &R) -> LayoutName
    where
        R: RouteMatcher + ?Sized,
    {
        LayoutName::for_route(route, &self.backend_patterns)
    }

    /// Render `request` inside the shell chosen for `route`.
    ///
    /// Title and content reach the shell untouched.
    pub fn select_and_render<R>(&self, route: &R, request: &LayoutRequest) -> Markup
    where
        R: RouteMatcher + ?Sized,
    {
        let name = self.select(route);
        debug!(layout = %name, "selected layout");

        match name {
            LayoutName::Backend => self.layouts.backend.render(request),
            LayoutName::Frontend => self.layouts.frontend.render(request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::route::RouteName;
    use maud::html;

    fn marker_selector() -> LayoutSelector {
        let backend = |request: &LayoutRequest| html! { "backend:" (request.content()) };
        let frontend = |request: &LayoutRequest| html! { "frontend:" (request.content()) };
        LayoutSelector::new(LayoutSet::new(backend, frontend)).unwrap()
    }

    #[test]
    fn test_branch_dispatch() {
        let selector = marker_selector();
        let request = LayoutRequest::from_html("<p>x</p>");

        let backend = selector.select_and_render(&RouteName::from("backend.home"), &request);
        assert_eq!(backend.into_string(), "backend:<p>x</p>");

        let frontend = selector.select_and_render(&RouteName::from("home"), &request);
        assert_eq!(frontend.into_string(), "frontend:<p>x</p>");
    }

    #[test]
    fn test_custom_backend_patterns() {
        let selector = marker_selector()
            .with_backend_patterns(["admin.*", "dashboard"])
            .unwrap();

        assert_eq!(selector.select(&RouteName::from("admin.users")), LayoutName::Backend);
        assert_eq!(selector.select(&RouteName::from("dashboard")), LayoutName::Backend);
        assert_eq!(selector.select(&RouteName::from("backend.users")), LayoutName::Frontend);
    }

    #[test]
    fn test_injected_matcher() {
        let selector = marker_selector();
        let everything_is_backend = |_: &str| true;
        assert_eq!(selector.select(&everything_is_backend), LayoutName::Backend);
    }

    #[test]
    fn test_bad_backend_pattern_is_rejected() {
        let err = marker_selector()
            .with_backend_patterns(["backend.*", "admin *"])
            .err()
            .unwrap();
        assert_eq!(
            err,
            LayoutError::InvalidPattern {
                pattern: "admin *".to_string(),
                reason: "pattern contains whitespace".to_string(),
            }
        );
    }
}
