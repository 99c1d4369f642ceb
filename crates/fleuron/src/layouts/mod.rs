// Fleuron Layouts Module
// The two page shells and the pair handed to both dispatch strategies

pub mod backend;
pub mod frontend;

pub use backend::BackendLayout;
pub use frontend::FrontendLayout;

use crate::layout::{Layout, LayoutName};
use std::sync::Arc;

/// The backend and frontend shells, shared between handlers
#[derive(Clone)]
pub struct LayoutSet {
    pub backend: Arc<dyn Layout>,
    pub frontend: Arc<dyn Layout>,
}

impl LayoutSet {
    pub fn new(backend: impl Layout + 'static, frontend: impl Layout + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
            frontend: Arc::new(frontend),
        }
    }

    /// The built-in shells, titled with `app_name` when a page has no title
    pub fn standard(app_name: &str) -> Self {
        Self::new(BackendLayout::new(app_name), FrontendLayout::new(app_name))
    }

    pub fn get(&self, name: LayoutName) -> &Arc<dyn Layout> {
        match name {
            LayoutName::Backend => &self.backend,
            LayoutName::Frontend => &self.frontend,
        }
    }
}
