// File: src/dynamic.rs
// Purpose: Name-based layout dispatch through a lookup table

use crate::error::{LayoutError, Result};
use crate::layout::{Layout, LayoutName, LayoutRequest, COMPONENT_PREFIX};
use crate::layouts::LayoutSet;
use crate::route::{RouteMatcher, RoutePattern};
use crate::selector::DEFAULT_BACKEND_PATTERN;
use maud::Markup;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Resolves the layout by component name instead of an explicit branch
///
/// The component name is `prefix + token`, e.g. `layouts.app.backend`.
/// Only layouts registered through [`DynamicLayout::register`] can be found;
/// a computed name with no entry fails with [`LayoutError::TemplateNotFound`].
#[derive(Clone)]
pub struct DynamicLayout {
    prefix: String,
    backend_patterns: Vec<RoutePattern>,
    table: HashMap<String, Arc<dyn Layout>>,
}

impl DynamicLayout {
    /// Empty table using `prefix` for component names
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        Ok(Self {
            prefix: prefix.into(),
            backend_patterns: RoutePattern::compile_all([DEFAULT_BACKEND_PATTERN])?,
            table: HashMap::new(),
        })
    }

    /// Empty table with the `layouts.app.` prefix
    pub fn standard() -> Result<Self> {
        Self::new(COMPONENT_PREFIX)
    }

    /// Table with both shells of `layouts` registered
    pub fn from_layouts(prefix: impl Into<String>, layouts: &LayoutSet) -> Result<Self> {
        let table = LayoutName::ALL
            .into_iter()
            .fold(Self::new(prefix)?, |table, name| {
                table.register(name, layouts.get(name).clone())
            });
        Ok(table)
    }

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

    pub fn register(mut self, name: LayoutName, layout: Arc<dyn Layout>) -> Self {
        self.table.insert(name.component_name(&self.prefix), layout);
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_registered(&self, component: &str) -> bool {
        self.table.contains_key(component)
    }

    /// Component name for `route`
    pub fn component_name<R>(&self, route: &R) -> String
    where
        R: RouteMatcher + ?Sized,
    {
        LayoutName::for_route(route, &self.backend_patterns).component_name(&self.prefix)
    }

    pub fn render<R>(&self, route: &R, request: &LayoutRequest) -> Result<Markup>
    where
        R: RouteMatcher + ?Sized,
    {
        let component = self.component_name(route);

        let layout = self.table.get(&component).ok_or_else(|| {
            error!(component = %component, "layout component is not registered");
            LayoutError::template_not_found(component.as_str())
        })?;

        debug!(component = %component, "resolved layout component");
        Ok(layout.render(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteName;
    use maud::html;

    fn backend_only() -> DynamicLayout {
        let backend: Arc<dyn Layout> =
            Arc::new(|request: &LayoutRequest| html! { "backend:" (request.content()) });
        DynamicLayout::standard().unwrap().register(LayoutName::Backend, backend)
    }

    #[test]
    fn test_component_name() {
        let table = DynamicLayout::standard().unwrap();
        assert_eq!(
            table.component_name(&RouteName::from("backend.users.index")),
            "layouts.app.backend"
        );
        assert_eq!(
            table.component_name(&RouteName::from("backendish.other")),
            "layouts.app.frontend"
        );
    }

    #[test]
    fn test_registered_component_renders() {
        let table = backend_only();
        let page = table
            .render(&RouteName::from("backend.home"), &LayoutRequest::from_html("<p>x</p>"))
            .unwrap();
        assert_eq!(page.into_string(), "backend:<p>x</p>");
    }

    #[test]
    fn test_missing_component_is_template_not_found() {
        let table = backend_only();
        let err = table
            .render(&RouteName::from("frontend.home"), &LayoutRequest::from_html("x"))
            .unwrap_err();
        assert_eq!(err, LayoutError::template_not_found("layouts.app.frontend"));
    }

    #[test]
    fn test_custom_prefix() {
        let table = DynamicLayout::from_layouts("themes.", &LayoutSet::standard("Acme")).unwrap();
        assert!(table.is_registered("themes.backend"));
        assert!(table.is_registered("themes.frontend"));
        assert!(!table.is_registered("layouts.app.backend"));
    }

    #[test]
    fn test_bad_backend_pattern_is_rejected() {
        let result = DynamicLayout::standard()
            .unwrap()
            .with_backend_patterns([""]);
        assert!(matches!(result, Err(LayoutError::InvalidPattern { .. })));
    }
}
