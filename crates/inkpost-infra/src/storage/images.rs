//! Image materialization - turns markdown image references into files
//! stored alongside the post document.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use chrono::{DateTime, Utc};

use inkpost_core::domain::ImageSource;

/// Outcome of resolving a single image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The reference was materialized; rewrite the markup to this filename.
    Stored(String),
    /// The reference could not (or must not) be materialized; the original
    /// markup is kept byte-for-byte.
    Unchanged,
}

/// Resolves image references into a single post directory.
///
/// Filenames embed the save instant plus a monotonic sequence number, so
/// two images resolved within the same second cannot collide.
pub struct ImageResolver {
    dest: PathBuf,
    stamp: String,
    seq: u32,
}

impl ImageResolver {
    pub fn new(dest: &Path, saved_at: DateTime<Utc>) -> Self {
        Self {
            dest: dest.to_path_buf(),
            stamp: saved_at.format("%Y%m%d_%H%M%S").to_string(),
            seq: 0,
        }
    }

    /// Resolve one reference. Never fails: every failure mode degrades to
    /// `Resolution::Unchanged` with a diagnostic log line.
    pub fn resolve(&mut self, reference: &str) -> Resolution {
        match ImageSource::parse(reference) {
            ImageSource::Embedded { ext, payload } => self.store_embedded(&ext, &payload),
            ImageSource::LocalFile(path) => self.copy_local(&path),
            ImageSource::Remote | ImageSource::Opaque => Resolution::Unchanged,
        }
    }

    fn store_embedded(&mut self, ext: &str, payload: &str) -> Resolution {
        let bytes = match base64::engine::general_purpose::STANDARD.decode(payload) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!("skipping embedded image with undecodable payload: {err}");
                return Resolution::Unchanged;
            }
        };

        let filename = self.next_filename(&format!(".{ext}"));
        match fs::write(self.dest.join(&filename), bytes) {
            Ok(()) => Resolution::Stored(filename),
            Err(err) => {
                tracing::warn!("failed to write embedded image {filename}: {err}");
                Resolution::Unchanged
            }
        }
    }

    fn copy_local(&mut self, source: &Path) -> Resolution {
        if !source.exists() {
            tracing::warn!("local image {} does not exist", source.display());
            return Resolution::Unchanged;
        }

        // Original extension preserved verbatim, dot included.
        let ext = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let filename = self.next_filename(&ext);
        match fs::copy(source, self.dest.join(&filename)) {
            Ok(_) => Resolution::Stored(filename),
            Err(err) => {
                tracing::warn!("failed to copy local image {}: {err}", source.display());
                Resolution::Unchanged
            }
        }
    }

    fn next_filename(&mut self, ext: &str) -> String {
        self.seq += 1;
        format!("image_{}_{:02}{}", self.stamp, self.seq, ext)
    }
}
