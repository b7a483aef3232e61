//! Core domain types for pitchdeck game content.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Returns `true` if `slug` is URL-safe and can be used as a directory name.
///
/// Accepts ASCII letters, digits, `-` and `_`, starting with a letter or digit.
/// This rules out path separators and `..`, so a valid slug never escapes the
/// games directory.
pub fn is_valid_slug(slug: &str) -> bool {
    static SLUG_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("valid regex"));

    SLUG_RE.is_match(slug)
}

// ---------------------------------------------------------------------------
// GameMeta
// ---------------------------------------------------------------------------

/// Descriptive metadata for one game, as stored in the catalog dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMeta {
    /// Unique, URL-safe identifier.
    pub slug: String,
    /// Display number (e.g., `"07"`).
    pub number: String,
    /// Display title.
    pub title: String,
    /// Comparable product reference ("X meets Y").
    pub comparable: String,
    /// One-line elevator pitch.
    pub elevator: String,
    /// Short hook line.
    pub scroll_stop: String,
    /// Genre tags.
    #[serde(default)]
    pub genre: Vec<String>,
    /// Target industry.
    pub industry: String,
    /// Accent/theme identifier used by the presentation layer.
    pub accent: String,
}

/// The records immediately before and after a game in catalog order.
///
/// The default value (both absent) is what an unknown slug resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdjacentGames<'a> {
    pub prev: Option<&'a GameMeta>,
    pub next: Option<&'a GameMeta>,
}

// ---------------------------------------------------------------------------
// Pitch sections
// ---------------------------------------------------------------------------

/// The five narrative sections of a pitch document, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hook,
    Core,
    Heart,
    Market,
    Scope,
}

impl Section {
    /// All sections in the order they are expected to appear.
    pub const ALL: [Section; 5] = [
        Section::Hook,
        Section::Core,
        Section::Heart,
        Section::Market,
        Section::Scope,
    ];

    /// Heading label as written in the pitch (`## THE HOOK`).
    pub fn label(self) -> &'static str {
        match self {
            Section::Hook => "THE HOOK",
            Section::Core => "THE CORE",
            Section::Heart => "THE HEART",
            Section::Market => "THE MARKET",
            Section::Scope => "THE SCOPE",
        }
    }

    /// Field key: the label without its `THE ` prefix, lowercased.
    pub fn key(self) -> &'static str {
        match self {
            Section::Hook => "hook",
            Section::Core => "core",
            Section::Heart => "heart",
            Section::Market => "market",
            Section::Scope => "scope",
        }
    }

    /// Sections declared after this one, nearest first.
    pub fn following(self) -> impl Iterator<Item = Section> {
        Self::ALL
            .into_iter()
            .skip_while(move |s| *s != self)
            .skip(1)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Text of each pitch section. Missing headings leave their field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchSections {
    pub hook: String,
    pub core: String,
    pub heart: String,
    pub market: String,
    pub scope: String,
}

impl PitchSections {
    /// Borrow the text of one section.
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Hook => &self.hook,
            Section::Core => &self.core,
            Section::Heart => &self.heart,
            Section::Market => &self.market,
            Section::Scope => &self.scope,
        }
    }

    /// Mutable access to one section's text.
    pub fn get_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Hook => &mut self.hook,
            Section::Core => &mut self.core,
            Section::Heart => &mut self.heart,
            Section::Market => &mut self.market,
            Section::Scope => &mut self.scope,
        }
    }

    /// Iterate `(section, text)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

// ---------------------------------------------------------------------------
// Auxiliary documents
// ---------------------------------------------------------------------------

/// The ten supplementary documents a game directory may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    GameDesign,
    NarrativeBible,
    ArtDirection,
    SoundDesign,
    TechnicalArchitecture,
    LevelDesign,
    ProductionPlan,
    QaPlan,
    MarketingPlan,
    ReleasePlan,
}

impl DocKind {
    /// All document kinds in display order.
    pub const ALL: [DocKind; 10] = [
        DocKind::GameDesign,
        DocKind::NarrativeBible,
        DocKind::ArtDirection,
        DocKind::SoundDesign,
        DocKind::TechnicalArchitecture,
        DocKind::LevelDesign,
        DocKind::ProductionPlan,
        DocKind::QaPlan,
        DocKind::MarketingPlan,
        DocKind::ReleasePlan,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            DocKind::GameDesign => "Game Design",
            DocKind::NarrativeBible => "Narrative Bible",
            DocKind::ArtDirection => "Art Direction",
            DocKind::SoundDesign => "Sound Design",
            DocKind::TechnicalArchitecture => "Technical Architecture",
            DocKind::LevelDesign => "Level Design",
            DocKind::ProductionPlan => "Production Plan",
            DocKind::QaPlan => "QA Plan",
            DocKind::MarketingPlan => "Marketing Plan",
            DocKind::ReleasePlan => "Release Plan",
        }
    }

    /// File stem on disk (`<slug>.md`).
    pub fn slug(self) -> &'static str {
        match self {
            DocKind::GameDesign => "game-design",
            DocKind::NarrativeBible => "narrative-bible",
            DocKind::ArtDirection => "art-direction",
            DocKind::SoundDesign => "sound-design",
            DocKind::TechnicalArchitecture => "technical-architecture",
            DocKind::LevelDesign => "level-design",
            DocKind::ProductionPlan => "production-plan",
            DocKind::QaPlan => "qa-plan",
            DocKind::MarketingPlan => "marketing-plan",
            DocKind::ReleasePlan => "release-plan",
        }
    }

    /// Codename of the agent credited with the document. Display only.
    pub fn agent(self) -> &'static str {
        match self {
            DocKind::GameDesign => "REED",
            DocKind::NarrativeBible => "NOVA",
            DocKind::ArtDirection => "PIXEL",
            DocKind::SoundDesign => "ECHO",
            DocKind::TechnicalArchitecture => "BYTE",
            DocKind::LevelDesign => "GRID",
            DocKind::ProductionPlan => "CLOCK",
            DocKind::QaPlan => "CRASH",
            DocKind::MarketingPlan => "HYPE",
            DocKind::ReleasePlan => "SHIP",
        }
    }

    /// File name within a game directory.
    pub fn file_name(self) -> String {
        format!("{}.md", self.slug())
    }
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a string is not one of the ten document slugs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document slug '{0}'")]
pub struct UnknownDocKind(pub String);

impl std::str::FromStr for DocKind {
    type Err = UnknownDocKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DocKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownDocKind(s.to_string()))
    }
}

/// Availability of one auxiliary document for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocDescriptor {
    /// Display name (e.g., `QA Plan`).
    pub name: String,
    /// Document slug (e.g., `qa-plan`).
    pub slug: String,
    /// Credited agent codename.
    pub agent: String,
    /// Whether `<slug>.md` exists in the game directory.
    pub available: bool,
}

impl DocDescriptor {
    pub fn new(kind: DocKind, available: bool) -> Self {
        Self {
            name: kind.name().to_string(),
            slug: kind.slug().to_string(),
            agent: kind.agent().to_string(),
            available,
        }
    }

    /// The kind this descriptor was built from.
    pub fn kind(&self) -> Option<DocKind> {
        self.slug.parse().ok()
    }
}

// ---------------------------------------------------------------------------
// GameContent
// ---------------------------------------------------------------------------

/// Everything the presentation layer needs to render one game page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContent {
    /// Catalog metadata.
    pub meta: GameMeta,
    /// Raw text of `pitch.md`.
    pub pitch: String,
    /// Pitch split into its five sections.
    pub sections: PitchSections,
    /// One descriptor per [`DocKind`], in [`DocKind::ALL`] order.
    pub docs: Vec<DocDescriptor>,
}

impl GameContent {
    /// Kinds whose document file is present.
    pub fn available_docs(&self) -> impl Iterator<Item = &DocDescriptor> {
        self.docs.iter().filter(|d| d.available)
    }
}
