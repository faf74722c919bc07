//! Filesystem-backed post storage.
//!
//! One directory per post under a fixed root, claimed atomically at save
//! time, holding `index.md` plus the image files it references.

mod images;


pub use images::{ImageResolver, Resolution};

use std::fs;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use inkpost_core::domain::{slugify, Post, PostDraft, SavedPost};
use inkpost_core::error::StoreError;
use inkpost_core::ports::PostStore;

/// Inline markdown image markup, `![alt](reference)`.
static IMAGE_MARKUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

/// Directory names tried per save before giving up.
const MAX_DIR_ATTEMPTS: u32 = 16;

/// Post store writing one directory per post under `posts_root`.
pub struct FsPostStore {
    posts_root: PathBuf,
}

impl FsPostStore {
    /// Create a store rooted at `posts_root`. The root itself is created
    /// on first save if missing.
    pub fn new(posts_root: impl Into<PathBuf>) -> Self {
        Self {
            posts_root: posts_root.into(),
        }
    }

    /// Atomically claim a directory for the new post.
    ///
    /// `fs::create_dir` is create-if-absent, so two concurrent saves with
    /// the same slug cannot both win a name: the loser falls through to a
    /// timestamp-suffixed candidate, then numbered ones.
    fn create_post_dir(
        &self,
        slug: &str,
        saved_at: DateTime<Utc>,
    ) -> Result<(String, PathBuf), StoreError> {
        let stamp = saved_at.format("%Y%m%d_%H%M%S").to_string();
        let mut last_err = None;

        for attempt in 0..MAX_DIR_ATTEMPTS {
            let name = match attempt {
                0 => slug.to_string(),
                1 => format!("{slug}_{stamp}"),
                n => format!("{slug}_{stamp}-{n}"),
            };
            let path = self.posts_root.join(&name);

            match fs::create_dir(&path) {
                Ok(()) => return Ok((name, path)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    last_err = Some(err);
                }
                Err(source) => return Err(StoreError::CreateDirectory { path, source }),
            }
        }

        Err(StoreError::CreateDirectory {
            path: self.posts_root.join(slug),
            source: last_err.unwrap_or_else(|| io::ErrorKind::AlreadyExists.into()),
        })
    }

    /// Run every `![alt](reference)` occurrence through the resolver,
    /// rewriting the ones it materializes and leaving the rest exactly as
    /// found.
    fn rewrite_images(content: &str, resolver: &mut ImageResolver) -> String {
        IMAGE_MARKUP_RE
            .replace_all(content, |caps: &Captures<'_>| {
                match resolver.resolve(&caps[2]) {
                    Resolution::Stored(filename) => format!("![{}]({filename})", &caps[1]),
                    Resolution::Unchanged => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[async_trait]
impl PostStore for FsPostStore {
    async fn save(&self, draft: PostDraft) -> Result<SavedPost, StoreError> {
        let saved_at = Utc::now();

        fs::create_dir_all(&self.posts_root).map_err(|source| StoreError::CreateDirectory {
            path: self.posts_root.clone(),
            source,
        })?;

        let slug = slugify(&draft.title);
        let (directory, dir_path) = self.create_post_dir(&slug, saved_at)?;

        let mut resolver = ImageResolver::new(&dir_path, saved_at);
        let content = Self::rewrite_images(&draft.content, &mut resolver);

        let post = Post::new(draft.title, content, saved_at);
        let doc_path = dir_path.join("index.md");
        fs::write(&doc_path, post.to_document()).map_err(|source| StoreError::WriteDocument {
            path: doc_path,
            source,
        })?;

        tracing::info!(directory = %directory, "saved post");

        Ok(SavedPost {
            path: format!("{directory}/index.md"),
            directory,
        })
    }
}
