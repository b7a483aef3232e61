//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use pitchdeck_core::ContentLoader;
use pitchdeck_shared::{
    AppConfig, DocKind, GameContent, GameMeta, LoaderConfig, init_config, load_config,
};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// pitchdeck — browse game pitches and their design documents.
#[derive(Parser)]
#[command(
    name = "pitchdeck",
    version,
    about = "Browse game pitch content: catalog metadata, pitch sections, and design documents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Games directory (overrides config).
    #[arg(long, env = "PITCHDECK_GAMES_DIR", global = true)]
    pub games_dir: Option<PathBuf>,

    /// Catalog JSON file (overrides config).
    #[arg(long, env = "PITCHDECK_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// List every game in catalog order.
    List,

    /// Show a game's metadata, pitch sections, and document availability.
    Show {
        /// Game slug.
        slug: String,
    },

    /// Show the previous and next games in catalog order.
    Adjacent {
        /// Game slug.
        slug: String,
    },

    /// Print the raw text of one design document.
    Doc {
        /// Game slug.
        slug: String,

        /// Document slug (e.g., qa-plan). See `pitchdeck docs`.
        doc: String,
    },

    /// List the supported document kinds.
    Docs,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = format!(
        "pitchdeck={level},pitchdeck_core={level},pitchdeck_markdown={level},pitchdeck_shared={level}"
    );

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let Cli {
        json,
        games_dir,
        catalog,
        command,
        ..
    } = cli;
    let loader = || open_loader(games_dir.clone(), catalog.clone());

    match command {
        Command::List => cmd_list(&loader()?, json),
        Command::Show { slug } => cmd_show(&loader()?, &slug, json),
        Command::Adjacent { slug } => cmd_adjacent(&loader()?, &slug, json),
        Command::Doc { slug, doc } => cmd_doc(&loader()?, &slug, &doc),
        Command::Docs => cmd_docs(json),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Resolve content locations (flags > config > defaults) and load the catalog.
fn open_loader(games_dir: Option<PathBuf>, catalog: Option<PathBuf>) -> Result<ContentLoader> {
    let config = load_config()?;
    let loader_config = LoaderConfig::from(&config).with_overrides(games_dir, catalog);

    info!(
        games_dir = %loader_config.games_dir.display(),
        catalog = %loader_config.catalog_path.display(),
        "opening content"
    );

    let loader = ContentLoader::from_config(&loader_config)?;
    if loader.catalog().is_empty() {
        tracing::warn!(games_dir = %loader.games_dir().display(), "catalog has no games");
    }
    Ok(loader)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_list(loader: &ContentLoader, json: bool) -> Result<()> {
    let games = loader.all_games();

    if json {
        println!("{}", serde_json::to_string_pretty(games)?);
        return Ok(());
    }

    for game in games {
        println!("  {:>3}  {:<24} {}", game.number, game.slug, game.title);
    }
    println!();
    println!("  {} games", games.len());

    Ok(())
}

fn cmd_show(loader: &ContentLoader, slug: &str, json: bool) -> Result<()> {
    let content = loader
        .game_content(slug)?
        .ok_or_else(|| eyre!("no pitch found for '{slug}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    print_content(&content);
    Ok(())
}

fn print_content(content: &GameContent) {
    let meta = &content.meta;

    println!();
    println!("  #{} {}", meta.number, meta.title);
    println!("  {}", meta.comparable);
    println!();
    println!("  {}", meta.elevator);
    println!("  \"{}\"", meta.scroll_stop);
    println!();
    println!("  Genre:    {}", meta.genre.join(", "));
    println!("  Industry: {}", meta.industry);
    println!("  Accent:   {}", meta.accent);

    for (section, text) in content.sections.iter() {
        println!();
        println!("  [{}]", section.label());
        if text.is_empty() {
            println!("    (missing)");
        }
        for line in text.lines() {
            println!("    {line}");
        }
    }

    println!();
    println!("  Documents:");
    for doc in &content.docs {
        let mark = if doc.available { "x" } else { " " };
        println!("    [{mark}] {:<24} {:<24} {}", doc.name, doc.slug, doc.agent);
    }
    println!();
}

fn cmd_adjacent(loader: &ContentLoader, slug: &str, json: bool) -> Result<()> {
    if loader.game_by_slug(slug).is_none() {
        return Err(eyre!("no game with slug '{slug}'"));
    }
    let adjacent = loader.adjacent_games(slug);

    if json {
        println!("{}", serde_json::to_string_pretty(&adjacent)?);
        return Ok(());
    }

    let describe = |game: Option<&GameMeta>| {
        game.map(|g| format!("{} ({})", g.title, g.slug))
            .unwrap_or_else(|| "-".to_string())
    };
    println!("  prev: {}", describe(adjacent.prev));
    println!("  next: {}", describe(adjacent.next));

    Ok(())
}

fn cmd_doc(loader: &ContentLoader, slug: &str, doc: &str) -> Result<()> {
    let text = loader
        .game_doc(slug, doc)?
        .ok_or_else(|| eyre!("document '{doc}' not found for '{slug}'"))?;

    // Raw text, exactly as stored.
    print!("{text}");
    Ok(())
}

fn cmd_docs(json: bool) -> Result<()> {
    if json {
        let kinds: Vec<serde_json::Value> = DocKind::ALL
            .into_iter()
            .map(|kind| {
                serde_json::json!({
                    "name": kind.name(),
                    "slug": kind.slug(),
                    "agent": kind.agent(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&kinds)?);
        return Ok(());
    }

    for kind in DocKind::ALL {
        println!("  {:<24} {:<24} {}", kind.slug(), kind.name(), kind.agent());
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
