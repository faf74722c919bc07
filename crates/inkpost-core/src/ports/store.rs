use async_trait::async_trait;

use crate::domain::{PostDraft, SavedPost};
use crate::error::StoreError;

/// Post persistence port.
///
/// A single operation: posts are written once and never updated or
/// deleted by this system.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a draft under a unique directory, materializing its image
    /// references next to the document, and return where it landed.
    async fn save(&self, draft: PostDraft) -> Result<SavedPost, StoreError>;
}
