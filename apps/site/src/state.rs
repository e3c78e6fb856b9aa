//! Application State
//!
//! Arc-wrapped state shared across handlers.

use std::sync::Arc;

use aderyn_core::SiteContent;
use aderyn_portable_text::{ImageUrlBuilder, Renderer};
use aderyn_shared::{Block, CmsConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    content: SiteContent,
    renderer: Renderer,
    connection: Connection,
}

/// Resolved CMS settings, shown on the debug page. Never holds the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub project_id: Option<String>,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub has_token: bool,
}

impl From<&CmsConfig> for Connection {
    fn from(config: &CmsConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            dataset: config.dataset.clone(),
            api_version: config.api_version.clone(),
            use_cdn: config.use_cdn,
            has_token: config.token.is_some(),
        }
    }
}

impl AppState {
    /// Create state for `config`; without a project id every page serves fallback content.
    pub fn new(config: &CmsConfig) -> Self {
        let images = config
            .project_id
            .as_ref()
            .map(|project| ImageUrlBuilder::new(project, &config.dataset));
        Self::from_parts(SiteContent::new(config), Renderer::new(images), Connection::from(config))
    }

    pub fn from_parts(content: SiteContent, renderer: Renderer, connection: Connection) -> Self {
        Self {
            inner: Arc::new(InnerState {
                content,
                renderer,
                connection,
            }),
        }
    }

    /// Get the content source.
    pub fn content(&self) -> &SiteContent {
        &self.inner.content
    }

    pub fn connection(&self) -> &Connection {
        &self.inner.connection
    }

    /// Render portable text to an HTML fragment.
    pub fn render(&self, blocks: &[Block]) -> String {
        self.inner.renderer.render(blocks)
    }
}
