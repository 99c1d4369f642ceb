// Frontend Layout
// The public site shell: header navigation, content, footer

use crate::layout::{Layout, LayoutRequest};
use maud::{html, Markup, DOCTYPE};

/// Frontend shell
///
/// Header and footer fall back to the defaults below unless replaced.
#[derive(Clone)]
pub struct FrontendLayout {
    app_name: String,
    description: Option<String>,
    header: Option<Markup>,
    footer: Option<Markup>,
}

impl FrontendLayout {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            description: None,
            header: None,
            footer: None,
        }
    }

    /// Builder method to set the meta description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set a custom header
    pub fn header(mut self, header: Markup) -> Self {
        self.header = Some(header);
        self
    }

    /// Builder method to set a custom footer
    pub fn footer(mut self, footer: Markup) -> Self {
        self.footer = Some(footer);
        self
    }

    fn default_header(&self) -> Markup {
        html! {
            header.navbar {
                a.brand href="/" { (self.app_name) }
                nav {
                    a href="/" { "Home" }
                    a href="/about" { "About" }
                }
            }
        }
    }

    fn default_footer(&self) -> Markup {
        html! {
            footer.footer {
                p { (self.app_name) }
            }
        }
    }
}

impl Layout for FrontendLayout {
    fn render(&self, request: &LayoutRequest) -> Markup {
        let title = request.display_title().unwrap_or(&self.app_name);

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    @if let Some(description) = &self.description {
                        meta name="description" content=(description);
                    }
                }
                body data-layout="frontend" {
                    @match &self.header {
                        Some(header) => { (header) }
                        None => { (self.default_header()) }
                    }
                    main.main { (request.content()) }
                    @match &self.footer {
                        Some(footer) => { (footer) }
                        None => { (self.default_footer()) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_embeds_content_in_main() {
        let shell = FrontendLayout::new("Acme");
        let html = shell
            .render(&LayoutRequest::from_html("<p>welcome</p>"))
            .into_string();

        assert!(html.contains(r#"data-layout="frontend""#));
        assert!(html.contains("<title>Acme</title>"));
        assert!(html.contains(r#"<main class="main"><p>welcome</p></main>"#));
    }

    #[test]
    fn test_frontend_description() {
        let shell = FrontendLayout::new("Acme").description("A shop");
        let html = shell.render(&LayoutRequest::from_html("x")).into_string();

        assert!(html.contains(r#"<meta name="description" content="A shop">"#));
    }

    #[test]
    fn test_frontend_custom_header_and_footer() {
        let shell = FrontendLayout::new("Acme")
            .header(html! { header { "Top" } })
            .footer(html! { footer { "Bottom" } });
        let html = shell.render(&LayoutRequest::from_html("x")).into_string();

        assert!(html.contains("<header>Top</header>"));
        assert!(html.contains("<footer>Bottom</footer>"));
        assert!(!html.contains("navbar"));
    }
}
