//! Application configuration for pitchdeck.
//!
//! User config lives at `~/.pitchdeck/pitchdeck.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PitchdeckError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "pitchdeck.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".pitchdeck";

// ---------------------------------------------------------------------------
// Config structs (matching pitchdeck.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Content locations.
    #[serde(default)]
    pub content: ContentConfig,
}

/// `[content]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base directory for relative paths. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Directory holding one subdirectory per game slug.
    #[serde(default = "default_games_dir")]
    pub games_dir: String,

    /// JSON catalog of game metadata.
    #[serde(default = "default_catalog")]
    pub catalog: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: None,
            games_dir: default_games_dir(),
            catalog: default_catalog(),
        }
    }
}

fn default_games_dir() -> String {
    "games".into()
}
fn default_catalog() -> String {
    "data/games.json".into()
}

// ---------------------------------------------------------------------------
// Loader config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime content locations, merged from config file + CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Base directory containing `<slug>/pitch.md` trees.
    pub games_dir: PathBuf,
    /// Path to the catalog JSON file.
    pub catalog_path: PathBuf,
}

impl From<&AppConfig> for LoaderConfig {
    fn from(config: &AppConfig) -> Self {
        let content = &config.content;
        let root = content.root.as_deref().map(Path::new);
        Self {
            games_dir: resolve(root, &content.games_dir),
            catalog_path: resolve(root, &content.catalog),
        }
    }
}

impl LoaderConfig {
    /// Apply CLI overrides. `None` keeps the configured value.
    pub fn with_overrides(
        mut self,
        games_dir: Option<PathBuf>,
        catalog_path: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = games_dir {
            self.games_dir = dir;
        }
        if let Some(path) = catalog_path {
            self.catalog_path = path;
        }
        self
    }
}

/// Join `path` onto `root` unless it is already absolute.
fn resolve(root: Option<&Path>, path: &str) -> PathBuf {
    let path = Path::new(path);
    match root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.pitchdeck/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PitchdeckError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.pitchdeck/pitchdeck.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| PitchdeckError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        PitchdeckError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    write_default_config(&dir)
}

fn write_default_config(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| PitchdeckError::io(dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| PitchdeckError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| PitchdeckError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
