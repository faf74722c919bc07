use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Validated save input.
///
/// Construction trims both fields and rejects empty values, so every layer
/// past this one can rely on a draft being non-empty. An invalid draft
/// never reaches storage.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: &str, content: &str) -> Result<Self, DomainError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "Title and content are required".to_string(),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

/// Post entity - a persisted markdown document plus its metadata fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl Post {
    /// Create a post at the given save instant. Both timestamps are set to
    /// that same instant; posts are never mutated after creation.
    pub fn new(title: String, content: String, saved_at: DateTime<Utc>) -> Self {
        Self {
            title,
            content,
            created_at: saved_at,
            last_modified: saved_at,
        }
    }

    /// Render the on-disk document: frontmatter, one blank line, body.
    pub fn to_document(&self) -> String {
        format!(
            "---\ntitle: {}\ncreated_at: {}\nlast_modified: {}\n---\n\n{}",
            self.title,
            self.created_at.to_rfc3339(),
            self.last_modified.to_rfc3339(),
            self.content,
        )
    }
}

/// Outcome of a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPost {
    /// Final post directory name, unique under the posts root.
    pub directory: String,
    /// Document path relative to the posts root.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn draft_trims_title_and_content() {
        let draft = PostDraft::new("  Hello  ", "\n\nbody\n").unwrap();
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.content, "body");
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let err = PostDraft::new("   ", "body").unwrap_err();
        let DomainError::Validation(msg) = err;
        assert_eq!(msg, "Title and content are required");
    }

    #[test]
    fn empty_content_is_rejected() {
        assert!(PostDraft::new("Hello", "").is_err());
    }

    #[test]
    fn document_is_frontmatter_blank_line_body() {
        let saved_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let post = Post::new("First".to_string(), "The body.".to_string(), saved_at);

        assert_eq!(
            post.to_document(),
            "---\n\
             title: First\n\
             created_at: 2024-01-02T03:04:05+00:00\n\
             last_modified: 2024-01-02T03:04:05+00:00\n\
             ---\n\
             \n\
             The body."
        );
    }
}
