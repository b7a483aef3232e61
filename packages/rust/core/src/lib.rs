//! Catalog and content loading for pitchdeck.
//!
//! This crate ties the static game catalog to the on-disk markdown tree and
//! exposes the query surface used by the presentation layer:
//! list, find by slug, adjacent navigation, full content, single document.

pub mod catalog;
pub mod loader;

pub use catalog::Catalog;
pub use loader::{ContentLoader, PITCH_FILE};
