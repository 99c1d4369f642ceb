// Fleuron - route-namespaced layouts for Axum + Maud
// Picks the backend or frontend page shell from the current route name

pub mod error;
pub mod route;
pub mod layout;
pub mod layouts;

// Selection and dispatch
pub mod selector;
pub mod dynamic;
pub mod renderer;

// Axum integration
pub mod config;
pub mod extract;
pub mod response;

// Re-export the core API so applications can just `use fleuron::*`
pub use error::{LayoutError, Result};
pub use route::{RouteMatcher, RouteName, RoutePattern};
pub use layout::{Layout, LayoutName, LayoutRequest, COMPONENT_PREFIX};
pub use layouts::{BackendLayout, FrontendLayout, LayoutSet};
pub use selector::{LayoutSelector, DEFAULT_BACKEND_PATTERN};
pub use dynamic::DynamicLayout;
pub use renderer::Renderer;
pub use config::{Dispatch, FleuronConfig};
pub use extract::{CurrentRoute, NamedRouter, NamedRoutes};
pub use response::PageResponse;

// Re-export Maud for page content
pub use maud::{html, Markup, PreEscaped};
