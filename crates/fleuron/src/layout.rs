// File: src/layout.rs
// Purpose: Layout names, the request forwarded to a layout, and the Layout trait

use crate::route::{RouteMatcher, RoutePattern};
use maud::{Markup, PreEscaped};
use std::fmt;

/// Prefix shared by layout component names (`layouts.app.backend`, ...)
pub const COMPONENT_PREFIX: &str = "layouts.app.";

/// The two page shells a route can be rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutName {
    Backend,
    Frontend,
}

impl LayoutName {
    pub const ALL: [LayoutName; 2] = [LayoutName::Backend, LayoutName::Frontend];

    /// Resolve the layout for a route.
    ///
    /// Total: any route that matches none of `backend_patterns` is a frontend route.
    pub fn for_route<R>(route: &R, backend_patterns: &[RoutePattern]) -> Self
    where
        R: RouteMatcher + ?Sized,
    {
        if route.route_is_any(backend_patterns) {
            LayoutName::Backend
        } else {
            LayoutName::Frontend
        }
    }

    /// Suffix token used when building the component name
    pub fn token(self) -> &'static str {
        match self {
            LayoutName::Backend => "backend",
            LayoutName::Frontend => "frontend",
        }
    }

    pub fn component_name(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.token())
    }
}

impl fmt::Display for LayoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Title and content handed to a layout
///
/// Built by the page, passed to the layout as-is.
#[derive(Clone)]
pub struct LayoutRequest {
    title: Option<String>,
    content: Markup,
}

impl fmt::Debug for LayoutRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRequest")
            .field("title", &self.title)
            .field("content", &self.content.0)
            .finish()
    }
}

impl LayoutRequest {
    /// Request with content and no title
    pub fn new(content: Markup) -> Self {
        Self {
            title: None,
            content,
        }
    }

    /// Request from an already-rendered HTML fragment
    pub fn from_html(content: impl Into<String>) -> Self {
        Self::new(PreEscaped(content.into()))
    }

    /// Builder method to set the page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method for titles that may be absent
    pub fn maybe_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// The title exactly as the page passed it
    pub fn raw_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The title a shell should display; an empty title counts as no title
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    pub fn content(&self) -> &Markup {
        &self.content
    }

    pub fn into_parts(self) -> (Option<String>, Markup) {
        (self.title, self.content)
    }
}

/// A page shell that wraps content
pub trait Layout: Send + Sync {
    fn render(&self, request: &LayoutRequest) -> Markup;
}

impl<F> Layout for F
where
    F: Fn(&LayoutRequest) -> Markup + Send + Sync,
{
    fn render(&self, request: &LayoutRequest) -> Markup {
        self(request)
    }
}
