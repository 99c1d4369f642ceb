// File: src/extract.rs
// Purpose: Named routes for Axum and the CurrentRoute extractor

use crate::route::{RouteMatcher, RouteName, RoutePattern};
use axum::{
    async_trait,
    extract::{FromRequestParts, MatchedPath},
    http::request::Parts,
    routing::MethodRouter,
    Extension, Router,
};
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::warn;

/// Route names keyed by Axum path pattern (`/admin/users` -> `backend.users.index`)
///
/// A name belongs to one path. Registering it again for another path logs a
/// warning and the later path wins for [`NamedRoutes::path_for`].
#[derive(Debug, Clone, Default)]
pub struct NamedRoutes {
    names: HashMap<String, RouteName>,
    paths: HashMap<RouteName, String>,
}

impl NamedRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, name: impl Into<RouteName>) {
        let path = path.into();
        let name = name.into();

        if let Some(previous) = self.paths.get(&name) {
            if *previous != path {
                warn!(route = %name, previous = %previous, path = %path, "route name registered twice");
                self.names.remove(previous);
            }
        }
        if let Some(replaced) = self.names.insert(path.clone(), name.clone()) {
            if replaced != name {
                self.paths.remove(&replaced);
            }
        }
        self.paths.insert(name, path);
    }

    /// Name of the route registered at `path`
    pub fn name_for(&self, path: &str) -> Option<&RouteName> {
        self.names.get(path)
    }

    /// Path pattern registered under `name`, for building links
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.paths.get(&RouteName::from(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Axum router that remembers a name for each route
///
/// ```ignore
/// let app = NamedRouter::new()
///     .route("frontend.home", "/", get(home))
///     .route("backend.users.index", "/admin/users", get(users))
///     .into_router();
/// ```
pub struct NamedRouter<S = ()> {
    router: Router<S>,
    names: NamedRoutes,
}

impl<S> Default for NamedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> NamedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            names: NamedRoutes::new(),
        }
    }

    /// Add a named route
    pub fn route(mut self, name: &str, path: &str, method_router: MethodRouter<S>) -> Self {
        self.names.insert(path, name);
        self.router = self.router.route(path, method_router);
        self
    }

    /// Add a route without a name; it renders with the frontend shell
    pub fn unnamed(mut self, path: &str, method_router: MethodRouter<S>) -> Self {
        self.router = self.router.route(path, method_router);
        self
    }

    pub fn names(&self) -> &NamedRoutes {
        &self.names
    }

    /// Finish building; the names are attached as a request extension
    pub fn into_router(self) -> Router<S> {
        self.router.layer(Extension(Arc::new(self.names)))
    }
}

/// The route that matched the current request
#[derive(Debug, Clone, Default)]
pub struct CurrentRoute {
    /// Route name, empty for unnamed routes
    pub name: RouteName,
    /// Matched Axum path pattern
    pub path: Option<String>,
    /// Whether htmx sent the request (`HX-Request` header)
    pub is_htmx: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentRoute
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<MatchedPath>()
            .map(|matched| matched.as_str().to_string());

        let name = match (&path, parts.extensions.get::<Arc<NamedRoutes>>()) {
            (Some(path), Some(names)) => names.name_for(path).cloned().unwrap_or_default(),
            _ => RouteName::default(),
        };

        let is_htmx = parts.headers.contains_key("hx-request");

        Ok(CurrentRoute {
            name,
            path,
            is_htmx,
        })
    }
}

impl RouteMatcher for CurrentRoute {
    fn route_is(&self, pattern: &str) -> bool {
        self.name.route_is(pattern)
    }

    fn route_matches(&self, pattern: &RoutePattern) -> bool {
        self.name.route_matches(pattern)
    }
}
