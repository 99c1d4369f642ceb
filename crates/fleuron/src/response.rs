// File: src/response.rs
// Purpose: HTML response for rendered pages

use crate::layout::LayoutName;
use axum::http::{header, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use maud::Markup;

/// Header naming the shell a page was rendered with
pub const LAYOUT_HEADER: &str = "x-fleuron-layout";

/// A rendered page, either a full document or a bare fragment
pub struct PageResponse {
    markup: Markup,
    layout: Option<LayoutName>,
    no_cache: bool,
}

impl PageResponse {
    pub fn new(markup: Markup, layout: LayoutName) -> Self {
        Self {
            markup,
            layout: Some(layout),
            no_cache: false,
        }
    }

    /// Content without any shell
    pub fn fragment(markup: Markup) -> Self {
        Self {
            markup,
            layout: None,
            no_cache: false,
        }
    }

    /// Mark the page `Cache-Control: no-store`
    pub fn no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }

    pub fn is_no_cache(&self) -> bool {
        self.no_cache
    }

    pub fn layout(&self) -> Option<LayoutName> {
        self.layout
    }

    pub fn body(&self) -> &str {
        &self.markup.0
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        let mut response = Html(self.markup.into_string()).into_response();

        if let Some(layout) = self.layout {
            response
                .headers_mut()
                .insert(LAYOUT_HEADER, HeaderValue::from_static(layout.token()));
        }
        if self.no_cache {
            response
                .headers_mut()
                .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        }

        response
    }
}
