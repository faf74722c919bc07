//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to render a markdown preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Markdown source; a missing field previews as empty.
    #[serde(default)]
    pub content: String,
}

/// Response carrying the rendered preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub html: String,
}

/// Request to save a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Response for a successfully saved post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    /// Document path relative to the posts root.
    pub path: String,
    /// Post directory name.
    pub directory: String,
}
