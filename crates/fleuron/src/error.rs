// File: src/error.rs
// Purpose: Errors raised while resolving a layout

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::{html, DOCTYPE};
use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur while selecting or resolving a layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No layout is registered under the computed component name
    #[error("layout template not found: {name}")]
    TemplateNotFound { name: String },

    /// A route pattern could not be compiled
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl LayoutError {
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound { name: name.into() }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for LayoutError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to render page layout");

        let status = self.status();
        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { "Internal Server Error" }
                }
                body {
                    h1 { (status.as_u16()) " Internal Server Error" }
                    p { (self.to_string()) }
                    a href="/" { "Go Home" }
                }
            }
        };

        (status, Html(markup.into_string())).into_response()
    }
}
