//! # Inkpost Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpost-core`:
//! filesystem post storage and comrak-based markdown rendering.

pub mod render;
pub mod storage;

pub use render::ComrakRenderer;
pub use storage::{FsPostStore, ImageResolver, Resolution};
