//! Application state - shared across all handlers.

use std::sync::Arc;

use inkpost_core::ports::{MarkdownRenderer, PostStore};
use inkpost_infra::{ComrakRenderer, FsPostStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub renderer: Arc<dyn MarkdownRenderer>,
}

impl AppState {
    /// Build the application state: filesystem post storage plus the
    /// comrak renderer (which loads its syntax definitions once, here).
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn PostStore> = Arc::new(FsPostStore::new(config.posts_dir.clone()));
        let renderer: Arc<dyn MarkdownRenderer> = Arc::new(ComrakRenderer::new());

        tracing::info!("Application state initialized");

        Self { store, renderer }
    }
}
