// File: src/renderer.rs
// Purpose: Renders pages through the configured dispatch strategy

use crate::config::{Dispatch, FleuronConfig};
use crate::dynamic::DynamicLayout;
use crate::error::Result;
use crate::extract::CurrentRoute;
use crate::layout::{LayoutName, LayoutRequest, COMPONENT_PREFIX};
use crate::layouts::LayoutSet;
use crate::response::PageResponse;
use crate::route::{RouteMatcher, RoutePattern};
use crate::selector::LayoutSelector;
use maud::{html, Markup};

/// Page renderer shared by all handlers
///
/// Holds both dispatch strategies over the same pair of shells, so switching
/// `dispatch` never changes the output for a route that resolves.
#[derive(Clone)]
pub struct Renderer {
    selector: LayoutSelector,
    dynamic: DynamicLayout,
    dispatch: Dispatch,
}

impl Renderer {
    /// Explicit-branch renderer with the default backend pattern and prefix
    pub fn new(layouts: LayoutSet) -> Result<Self> {
        Ok(Self {
            dynamic: DynamicLayout::from_layouts(COMPONENT_PREFIX, &layouts)?,
            selector: LayoutSelector::new(layouts)?,
            dispatch: Dispatch::Branch,
        })
    }

    /// Renderer for the built-in shells, configured from `config`
    pub fn from_config(config: &FleuronConfig) -> Result<Self> {
        Self::with_layouts(config, LayoutSet::standard(&config.project.name))
    }

    /// Renderer for custom shells, configured from `config`.
    ///
    /// Backend patterns are compiled here, once, and shared by both strategies.
    pub fn with_layouts(config: &FleuronConfig, layouts: LayoutSet) -> Result<Self> {
        let patterns = RoutePattern::compile_all(&config.layout.backend_patterns)?;

        Ok(Self {
            dynamic: DynamicLayout::from_layouts(config.layout.component_prefix.as_str(), &layouts)?
                .with_compiled_patterns(patterns.clone()),
            selector: LayoutSelector::new(layouts)?.with_compiled_patterns(patterns),
            dispatch: config.layout.dispatch,
        })
    }

    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Replace the table used by [`Dispatch::Dynamic`]
    pub fn with_dynamic(mut self, dynamic: DynamicLayout) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    pub fn select<R>(&self, route: &R) -> LayoutName
    where
        R: RouteMatcher + ?Sized,
    {
        self.selector.select(route)
    }

    pub fn render<R>(&self, route: &R, request: &LayoutRequest) -> Result<Markup>
    where
        R: RouteMatcher + ?Sized,
    {
        match self.dispatch {
            Dispatch::Branch => Ok(self.selector.select_and_render(route, request)),
            Dispatch::Dynamic => self.dynamic.render(route, request),
        }
    }

    /// Response for a page handler.
    ///
    /// Normal requests get the full shell; backend pages are marked `no-store`.
    /// HTMX requests get the content without a shell, preceded by a `<title>`
    /// element when the page has a title so htmx can update `document.title`.
    pub fn page(&self, route: &CurrentRoute, request: LayoutRequest) -> Result<PageResponse> {
        if route.is_htmx {
            let fragment = html! {
                @if let Some(title) = request.display_title() {
                    title { (title) }
                }
                (request.content())
            };
            return Ok(PageResponse::fragment(fragment));
        }

        let layout = self.select(route);
        let markup = self.render(route, &request)?;
        let page = PageResponse::new(markup, layout);

        Ok(match layout {
            LayoutName::Backend => page.no_cache(),
            LayoutName::Frontend => page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::route::RouteName;

    fn htmx_route(name: &str) -> CurrentRoute {
        CurrentRoute {
            name: RouteName::from(name),
            path: None,
            is_htmx: true,
        }
    }

    #[test]
    fn test_from_config_uses_project_name() {
        let mut config = FleuronConfig::default();
        config.project.name = "Acme".to_string();

        let renderer = Renderer::from_config(&config).unwrap();
        let page = renderer
            .render(&RouteName::from("frontend.home"), &LayoutRequest::from_html("x"))
            .unwrap();
        assert!(page.into_string().contains("<title>Acme</title>"));
    }

    #[test]
    fn test_config_patterns_reach_both_strategies() {
        let mut config = FleuronConfig::default();
        config.layout.backend_patterns = vec!["admin.*".to_string()];
        let route = RouteName::from("admin.users");

        for dispatch in [Dispatch::Branch, Dispatch::Dynamic] {
            let renderer = Renderer::from_config(&config).unwrap().with_dispatch(dispatch);
            let page = renderer.render(&route, &LayoutRequest::from_html("x")).unwrap();
            assert!(page.into_string().contains(r#"data-layout="backend""#));
        }
    }

    #[test]
    fn test_bad_config_pattern_is_reported() {
        let mut config = FleuronConfig::default();
        config.layout.backend_patterns = vec!["backend.*".to_string(), "".to_string()];

        let err = Renderer::from_config(&config).err().unwrap();
        assert_eq!(
            err,
            LayoutError::InvalidPattern {
                pattern: String::new(),
                reason: "pattern is empty".to_string(),
            }
        );
    }

    #[test]
    fn test_dynamic_with_empty_table_fails() {
        let renderer = Renderer::new(LayoutSet::standard("Acme"))
            .unwrap()
            .with_dispatch(Dispatch::Dynamic)
            .with_dynamic(DynamicLayout::standard().unwrap());

        let result = renderer.render(&RouteName::from("frontend.home"), &LayoutRequest::from_html("x"));
        assert!(result.is_err());
    }

    #[test]
    fn test_htmx_page_is_fragment_with_title() {
        let renderer = Renderer::new(LayoutSet::standard("Acme")).unwrap();

        let page = renderer
            .page(
                &htmx_route("backend.users.index"),
                LayoutRequest::from_html("<p>list</p>").title("Users"),
            )
            .unwrap();
        assert_eq!(page.layout(), None);
        assert_eq!(page.body(), "<title>Users</title><p>list</p>");
    }

    #[test]
    fn test_untitled_htmx_page_is_bare_content() {
        let renderer = Renderer::new(LayoutSet::standard("Acme")).unwrap();

        for request in [
            LayoutRequest::from_html("<p>welcome</p>"),
            LayoutRequest::from_html("<p>welcome</p>").title(""),
        ] {
            let page = renderer.page(&htmx_route("frontend.home"), request).unwrap();
            assert_eq!(page.body(), "<p>welcome</p>");
        }
    }

    #[test]
    fn test_backend_pages_are_not_cached() {
        let renderer = Renderer::new(LayoutSet::standard("Acme")).unwrap();
        let route = |name: &str| CurrentRoute {
            name: RouteName::from(name),
            ..CurrentRoute::default()
        };

        let backend = renderer
            .page(&route("backend.users.index"), LayoutRequest::from_html("x"))
            .unwrap();
        assert!(backend.is_no_cache());

        let frontend = renderer
            .page(&route("frontend.home"), LayoutRequest::from_html("x"))
            .unwrap();
        assert!(!frontend.is_no_cache());
    }
}
