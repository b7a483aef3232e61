//! Game catalog.
//!
//! The catalog is the ordered list of [`GameMeta`] records loaded once at
//! startup from a JSON array. Its order drives previous/next navigation, and
//! slugs are guaranteed unique and URL-safe once a `Catalog` exists.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, instrument};

use pitchdeck_shared::{AdjacentGames, GameMeta, PitchdeckError, Result, is_valid_slug};

/// Immutable, validated collection of game metadata.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<GameMeta>,
}

impl Catalog {
    /// Build a catalog from records, rejecting malformed or duplicate slugs.
    pub fn new(games: Vec<GameMeta>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(games.len());

        for game in &games {
            if !is_valid_slug(&game.slug) {
                return Err(PitchdeckError::validation(format!(
                    "invalid slug '{}' for game '{}'",
                    game.slug, game.title
                )));
            }
            if !seen.insert(game.slug.as_str()) {
                return Err(PitchdeckError::validation(format!(
                    "duplicate slug '{}'",
                    game.slug
                )));
            }
        }

        Ok(Self { games })
    }

    /// Parse a catalog from a JSON array of game records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let games: Vec<GameMeta> = serde_json::from_str(json)
            .map_err(|e| PitchdeckError::parse(format!("invalid catalog JSON: {e}")))?;
        Self::new(games)
    }

    /// Load the catalog from a JSON file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| PitchdeckError::io(path, e))?;
        let catalog = Self::from_json_str(&json)?;
        info!(games = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// All records in catalog order.
    pub fn games(&self) -> &[GameMeta] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Index of `slug` in catalog order.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.games.iter().position(|g| g.slug == slug)
    }

    /// Look up a record by slug.
    pub fn get(&self, slug: &str) -> Option<&GameMeta> {
        self.games.iter().find(|g| g.slug == slug)
    }

    /// Neighbours of `slug` in catalog order. Unknown slugs have none.
    pub fn adjacent(&self, slug: &str) -> AdjacentGames<'_> {
        let Some(idx) = self.position(slug) else {
            return AdjacentGames::default();
        };

        AdjacentGames {
            prev: idx.checked_sub(1).and_then(|i| self.games.get(i)),
            next: self.games.get(idx + 1),
        }
    }
}
