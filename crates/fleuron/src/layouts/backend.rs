// Backend Layout
// Shell for administration pages with sidebar navigation

use crate::layout::{Layout, LayoutRequest};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
.backend-layout { display: flex; min-height: 100vh; }
.sidebar { width: 250px; background: #2c3e50; color: white; padding: 1rem; }
.sidebar a { color: inherit; }
.main { flex: 1; padding: 2rem; }
"#;

/// Backend shell
///
/// Renders a two-column document: sidebar on the left, page content in `<main>`.
///
/// # Example
///
/// ```
/// use fleuron::{BackendLayout, Layout, LayoutRequest};
///
/// let shell = BackendLayout::new("Acme");
/// let page = shell.render(&LayoutRequest::from_html("<p>list</p>").title("Users"));
///
/// assert!(page.into_string().contains("<title>Users</title>"));
/// ```
#[derive(Clone)]
pub struct BackendLayout {
    app_name: String,
    sidebar: Option<Markup>,
}

impl BackendLayout {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            sidebar: None,
        }
    }

    /// Builder method to replace the default sidebar
    pub fn sidebar(mut self, sidebar: Markup) -> Self {
        self.sidebar = Some(sidebar);
        self
    }

    fn default_sidebar(&self) -> Markup {
        html! {
            nav.sidebar {
                h2 { (self.app_name) }
                ul {
                    li { a href="/admin" { "Dashboard" } }
                    li { a href="/admin/users" { "Users" } }
                    li { a href="/" { "View site" } }
                }
            }
        }
    }
}

impl Layout for BackendLayout {
    fn render(&self, request: &LayoutRequest) -> Markup {
        let title = request.display_title().unwrap_or(&self.app_name);

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    style { (PreEscaped(STYLES)) }
                }
                body data-layout="backend" {
                    div.backend-layout {
                        @if let Some(sidebar) = &self.sidebar {
                            (sidebar)
                        } @else {
                            (self.default_sidebar())
                        }
                        main.main { (request.content()) }
                    }
                }
            }
        }
    }
}
