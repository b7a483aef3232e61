//! Shared types, error model, and configuration for pitchdeck.
//!
//! This crate is the foundation depended on by all other pitchdeck crates.
//! It provides:
//! - [`PitchdeckError`] — the unified error type
//! - Domain types ([`GameMeta`], [`GameContent`], [`PitchSections`], [`DocKind`])
//! - Configuration ([`AppConfig`], [`LoaderConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ContentConfig, LoaderConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{PitchdeckError, Result};
pub use types::{
    AdjacentGames, DocDescriptor, DocKind, GameContent, GameMeta, PitchSections, Section,
    UnknownDocKind, is_valid_slug,
};
