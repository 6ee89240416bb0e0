//! Content module - post kinds and slugs

pub mod kind;
pub mod slug;

pub use kind::{KindProfile, PostKind};
pub use slug::{slugify, slugify_with, SlugCharset};
