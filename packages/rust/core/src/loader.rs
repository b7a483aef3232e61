//! Content loader: the query surface over the catalog and the games directory.
//!
//! Layout on disk:
//! ```text
//! <games_dir>/
//! └── <slug>/
//!     ├── pitch.md            (required for a content page)
//!     ├── game-design.md      (optional, one per DocKind)
//!     └── ...
//! ```
//!
//! Missing slugs, directories and files are all reported as `Ok(None)`.
//! Text is decoded leniently. Only real I/O failures on existing paths
//! (permissions, a directory where a file belongs) become errors.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use pitchdeck_markdown::parse_pitch_sections;
use pitchdeck_shared::{
    AdjacentGames, DocDescriptor, DocKind, GameContent, GameMeta, LoaderConfig, PitchdeckError,
    Result, is_valid_slug,
};

use crate::catalog::Catalog;

/// File name of the primary pitch document.
pub const PITCH_FILE: &str = "pitch.md";

/// Reads game content from a catalog plus a directory tree.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    catalog: Catalog,
    games_dir: PathBuf,
}

impl ContentLoader {
    pub fn new(catalog: Catalog, games_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            games_dir: games_dir.into(),
        }
    }

    /// Load the catalog named by `config` and point at its games directory.
    pub fn from_config(config: &LoaderConfig) -> Result<Self> {
        let catalog = Catalog::load(&config.catalog_path)?;
        Ok(Self::new(catalog, config.games_dir.clone()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn games_dir(&self) -> &Path {
        &self.games_dir
    }

    /// Every game, in catalog order.
    pub fn all_games(&self) -> &[GameMeta] {
        self.catalog.games()
    }

    pub fn game_by_slug(&self, slug: &str) -> Option<&GameMeta> {
        self.catalog.get(slug)
    }

    /// Previous and next games for navigation.
    pub fn adjacent_games(&self, slug: &str) -> AdjacentGames<'_> {
        self.catalog.adjacent(slug)
    }

    /// Directory for `slug`, or `None` if the slug could escape `games_dir`.
    fn game_dir(&self, slug: &str) -> Option<PathBuf> {
        is_valid_slug(slug).then(|| self.games_dir.join(slug))
    }

    /// Assemble the full content record for one game.
    ///
    /// Returns `Ok(None)` when the slug is not in the catalog or its
    /// `pitch.md` does not exist.
    #[instrument(skip(self))]
    pub fn game_content(&self, slug: &str) -> Result<Option<GameContent>> {
        let Some(meta) = self.catalog.get(slug) else {
            debug!("slug not in catalog");
            return Ok(None);
        };
        let Some(dir) = self.game_dir(slug) else {
            return Ok(None);
        };

        let Some(pitch) = read_if_exists(&dir.join(PITCH_FILE))? else {
            debug!(dir = %dir.display(), "no pitch document");
            return Ok(None);
        };

        let sections = parse_pitch_sections(&pitch);
        let docs: Vec<DocDescriptor> = DocKind::ALL
            .into_iter()
            .map(|kind| DocDescriptor::new(kind, dir.join(kind.file_name()).is_file()))
            .collect();

        debug!(
            pitch_len = pitch.len(),
            available_docs = docs.iter().filter(|d| d.available).count(),
            "game content loaded"
        );

        Ok(Some(GameContent {
            meta: meta.clone(),
            pitch,
            sections,
            docs,
        }))
    }

    /// Raw text of one auxiliary document, looked up by its slug.
    ///
    /// Document slugs outside the fixed [`DocKind`] set are `Ok(None)`.
    pub fn game_doc(&self, slug: &str, doc_slug: &str) -> Result<Option<String>> {
        match doc_slug.parse::<DocKind>() {
            Ok(kind) => self.doc(slug, kind),
            Err(e) => {
                debug!(slug, error = %e, "unknown document requested");
                Ok(None)
            }
        }
    }

    /// Raw text of one auxiliary document. No trimming or parsing.
    #[instrument(skip(self, kind), fields(kind = %kind))]
    pub fn doc(&self, slug: &str, kind: DocKind) -> Result<Option<String>> {
        let Some(dir) = self.game_dir(slug) else {
            return Ok(None);
        };
        read_if_exists(&dir.join(kind.file_name()))
    }
}

/// Read a text file, mapping "does not exist" to `None`.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing.
fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
        Err(e) => Err(PitchdeckError::io(path, e)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pitchdeck_shared::AppConfig;
    use uuid::Uuid;

    const CATALOG_JSON: &str = r#"[
        {"slug": "alpha", "number": "01", "title": "Alpha", "comparable": "A meets B",
         "elevator": "First.", "scrollStop": "One.", "genre": ["puzzle"],
         "industry": "games", "accent": "red"},
        {"slug": "beta", "number": "02", "title": "Beta", "comparable": "C meets D",
         "elevator": "Second.", "scrollStop": "Two.", "genre": [],
         "industry": "education", "accent": "blue"},
        {"slug": "gamma", "number": "03", "title": "Gamma", "comparable": "E meets F",
         "elevator": "Third.", "scrollStop": "Three.", "genre": ["rpg", "sim"],
         "industry": "health", "accent": "green"}
    ]"#;

    const PITCH: &str = "# Alpha\n\n## THE HOOK\nHook body.\n\n## THE CORE\nCore body.\n\n\
                         ## THE HEART\nHeart body.\n\n## THE MARKET\nMarket body.\n\n\
                         ## THE SCOPE\nScope body.\n";

    /// A throwaway games directory that is removed on drop.
    struct TempGames {
        root: PathBuf,
    }

    impl TempGames {
        fn new() -> Self {
            let root = std::env::temp_dir().join(format!("pd-loader-test-{}", Uuid::now_v7()));
            std::fs::create_dir_all(&root).expect("create temp games dir");
            Self { root }
        }

        fn write(&self, slug: &str, file: &str, content: &str) {
            let dir = self.root.join(slug);
            std::fs::create_dir_all(&dir).expect("create game dir");
            std::fs::write(dir.join(file), content).expect("write file");
        }

        fn loader(&self) -> ContentLoader {
            let catalog = Catalog::from_json_str(CATALOG_JSON).expect("catalog");
            ContentLoader::new(catalog, &self.root)
        }
    }

    impl Drop for TempGames {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn content_for_complete_game() {
        let games = TempGames::new();
        games.write("alpha", PITCH_FILE, PITCH);

        let content = games
            .loader()
            .game_content("alpha")
            .expect("read content")
            .expect("content present");

        assert_eq!(content.meta.title, "Alpha");
        assert_eq!(content.pitch, PITCH);
        assert_eq!(content.sections.hook, "Hook body.");
        assert_eq!(content.sections.core, "Core body.");
        assert_eq!(content.sections.heart, "Heart body.");
        assert_eq!(content.sections.market, "Market body.");
        assert_eq!(content.sections.scope, "Scope body.");
        assert_eq!(content.docs.len(), 10);
        assert!(content.docs.iter().all(|d| !d.available));
    }

    #[test]
    fn only_qa_plan_available() {
        let games = TempGames::new();
        games.write("beta", PITCH_FILE, PITCH);
        games.write("beta", "qa-plan.md", "# QA\n");

        let content = games
            .loader()
            .game_content("beta")
            .expect("read content")
            .expect("content present");

        let available: Vec<&str> = content.available_docs().map(|d| d.slug.as_str()).collect();
        assert_eq!(available, vec!["qa-plan"]);
        assert_eq!(content.docs.iter().filter(|d| !d.available).count(), 9);

        let order: Vec<Option<DocKind>> = content.docs.iter().map(|d| d.kind()).collect();
        let expected: Vec<Option<DocKind>> = DocKind::ALL.into_iter().map(Some).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn unknown_slug_is_absent() {
        let games = TempGames::new();
        games.write("stranger", PITCH_FILE, PITCH);
        let loader = games.loader();
        assert!(loader.game_content("stranger").expect("no error").is_none());
        assert!(loader.game_by_slug("stranger").is_none());
    }

    #[test]
    fn missing_pitch_is_absent() {
        let games = TempGames::new();
        games.write("gamma", "game-design.md", "design");
        let loader = games.loader();
        assert!(loader.game_content("gamma").expect("no error").is_none());
        // Directory never created at all.
        assert!(loader.game_content("beta").expect("no error").is_none());

        // A regular file where the game directory should be.
        std::fs::write(games.root.join("beta"), "not a directory").expect("write file");
        assert!(loader.game_content("beta").expect("no error").is_none());
        assert!(loader.game_doc("beta", "qa-plan").expect("no error").is_none());
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let games = TempGames::new();
        let dir = games.root.join("alpha");
        std::fs::create_dir_all(&dir).expect("create game dir");
        std::fs::write(dir.join(PITCH_FILE), b"## THE HOOK\nCaf\xE9 hook\n").expect("write pitch");
        std::fs::write(dir.join("qa-plan.md"), b"bad \xFF byte").expect("write doc");
        let loader = games.loader();

        let content = loader
            .game_content("alpha")
            .expect("read content")
            .expect("content present");
        assert_eq!(content.sections.hook, "Caf\u{FFFD} hook");
        assert_eq!(content.pitch, "## THE HOOK\nCaf\u{FFFD} hook\n");

        let doc = loader.game_doc("alpha", "qa-plan").expect("read doc");
        assert_eq!(doc.as_deref(), Some("bad \u{FFFD} byte"));
    }

    #[test]
    fn pitch_without_heart() {
        let games = TempGames::new();
        let pitch = PITCH.replace("## THE HEART\nHeart body.\n\n", "");
        games.write("alpha", PITCH_FILE, &pitch);

        let content = games
            .loader()
            .game_content("alpha")
            .expect("read content")
            .expect("content present");
        assert_eq!(content.sections.heart, "");
        assert_eq!(content.sections.core, "Core body.");
        assert_eq!(content.sections.market, "Market body.");
    }

    #[test]
    fn single_doc_is_raw_text() {
        let games = TempGames::new();
        let raw = "\n  # Level Design\n\n## THE HOOK\nnot parsed\n\n";
        games.write("alpha", "level-design.md", raw);
        let loader = games.loader();

        let doc = loader.game_doc("alpha", "level-design").expect("read doc");
        assert_eq!(doc.as_deref(), Some(raw));

        let typed = loader.doc("alpha", DocKind::LevelDesign).expect("read doc");
        assert_eq!(typed.as_deref(), Some(raw));
    }

    #[test]
    fn single_doc_absent_cases() {
        let games = TempGames::new();
        games.write("alpha", PITCH_FILE, PITCH);
        let loader = games.loader();

        assert!(loader.game_doc("alpha", "qa-plan").expect("no error").is_none());
        assert!(loader.game_doc("alpha", "not-a-doc").expect("no error").is_none());
        assert!(loader.game_doc("alpha", "../alpha/pitch").expect("no error").is_none());
        assert!(loader.game_doc("nobody", "qa-plan").expect("no error").is_none());
        assert!(loader.game_doc("../..", "qa-plan").expect("no error").is_none());
    }

    #[test]
    fn unreadable_pitch_is_an_error() {
        let games = TempGames::new();
        let dir = games.root.join("alpha");
        std::fs::create_dir_all(dir.join(PITCH_FILE)).expect("pitch.md as directory");

        let result = games.loader().game_content("alpha");
        assert!(matches!(result, Err(PitchdeckError::Io { .. })));
    }

    #[test]
    fn listing_and_navigation_delegate_to_catalog() {
        let games = TempGames::new();
        let loader = games.loader();

        let slugs: Vec<&str> = loader.all_games().iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "beta", "gamma"]);

        let adj = loader.adjacent_games("alpha");
        assert!(adj.prev.is_none());
        assert_eq!(adj.next.map(|g| g.slug.as_str()), Some("beta"));

        let adj = loader.adjacent_games("gamma");
        assert_eq!(adj.prev.map(|g| g.slug.as_str()), Some("beta"));
        assert!(adj.next.is_none());

        assert_eq!(loader.adjacent_games("omega"), AdjacentGames::default());
    }

    #[test]
    fn fixture_tree_loads_through_config() {
        let toml_str = r#"
[content]
root = "../../../fixtures"
games_dir = "games"
catalog = "data/games.json"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse config");
        let loader = ContentLoader::from_config(&LoaderConfig::from(&config)).expect("loader");
        assert_eq!(loader.games_dir(), Path::new("../../../fixtures/games"));
        assert_eq!(loader.catalog().len(), 3);

        let content = loader
            .game_content("neon-drift")
            .expect("read content")
            .expect("neon-drift has a pitch");
        assert!(content.sections.hook.starts_with("Every lane"));
        assert!(!content.sections.scope.contains("Appendix"));

        let available: Vec<&str> = content.available_docs().map(|d| d.slug.as_str()).collect();
        assert_eq!(available, vec!["game-design", "qa-plan"]);

        let bloom = loader
            .game_content("hollow-bloom")
            .expect("read content")
            .expect("hollow-bloom has a pitch");
        assert!(bloom.sections.heart.is_empty());
        assert!(!bloom.sections.market.is_empty());

        assert!(loader.game_content("tidewatch").expect("no error").is_none());
    }
}
