//! Domain-level error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Domain errors - business rule failures, surfaced as client errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Storage-level errors - filesystem failures fatal to a save.
///
/// Image resolution failures are deliberately not represented here: they
/// degrade to leaving the original markup in place and never fail a save.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create post directory {}: {source}", .path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Failed to write post document {}: {source}", .path.display())]
    WriteDocument { path: PathBuf, source: io::Error },
}
