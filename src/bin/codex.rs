//! codex - look up cards, summarize squads and roll dice from a terminal.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use squadron_codex::core::{DEFAULT_FUZZY_THRESHOLD, DEFAULT_MANIFEST, DEFAULT_MAX_RESULTS};
use squadron_codex::render::pilot_label;
use squadron_codex::squad::{clean_link, display_link};
use squadron_codex::{
    dice, fetch_squad, resolve_icons, select_label, CardKind, CatalogLoader, DiceRng, HttpFetcher,
    IconTable, ListParser, LoaderConfig, RenderConfig, RenderContext, Renderable, SearchConfig,
    SearchEngine, SelectLabel, SharedCatalog, SquadDocument,
};

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "codex", about = "X-Wing card lookup, squad lists and dice", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Catalog manifest: an http(s) URL or a local path
    #[clap(long, env = "CODEX_MANIFEST", default_value = DEFAULT_MANIFEST, global = true)]
    manifest: String,

    /// JSON object mapping icon names to display glyphs
    #[clap(long, global = true)]
    icons: Option<PathBuf>,

    /// Wiki that card names link to
    #[clap(long, global = true)]
    wiki_base: Option<String>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[clap(flatten)]
    Catalog(CatalogCommand),

    /// Roll dice: "3 red", "2 green", "d6", "scenario" or "help"
    Roll {
        query: Vec<String>,

        /// Seed for reproducible rolls
        #[clap(long)]
        seed: Option<u64>,
    },
}

/// Commands answered from the card catalog.
#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Fuzzy search the catalog and print matching cards
    Search {
        query: Vec<String>,

        #[clap(long, default_value_t = DEFAULT_FUZZY_THRESHOLD)]
        threshold: u8,

        #[clap(long, default_value_t = DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Print one label per hit instead of full card text
        #[clap(long)]
        labels: bool,
    },

    /// Print every card with this short id
    Card { xws: String },

    /// List a ship's pilots, grouped as a selection menu would
    Pilots { ship: String },

    /// Summarize a squad from an XWS file or a list builder link
    List { source: String },
}

fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    if let Err(err) = run(cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let icons = match &cli.icons {
        Some(path) => load_icons(path)?,
        None => IconTable::new(),
    };
    let mut render_config = RenderConfig::default();
    if let Some(base) = &cli.wiki_base {
        render_config = render_config.with_wiki_base(base.clone());
    }

    let lines = match &cli.command {
        Command::Roll { query, seed } => roll(query, *seed)?,
        Command::Catalog(command) => lookup(command, &cli.manifest, render_config)?,
    };

    if lines.is_empty() {
        println!("No results.");
    }
    for line in lines {
        println!("{}", resolve_icons(&line, &icons));
    }
    Ok(())
}

fn roll(query: &[String], seed: Option<u64>) -> Result<Vec<String>> {
    let mut rng = match seed {
        Some(seed) => DiceRng::new(seed),
        None => DiceRng::from_entropy(),
    };
    debug!(seed = rng.seed(), "rolling");
    Ok(dice::answer(&query.join(" "), &mut rng)?)
}

fn lookup(command: &CatalogCommand, manifest: &str, config: RenderConfig) -> Result<Vec<String>> {
    let catalog = open_catalog(manifest)?;
    let index = catalog.current();
    let ctx = RenderContext::new(&index).with_config(config);

    let lines = match command {
        CatalogCommand::Search {
            query,
            threshold,
            limit,
            labels,
        } => {
            let config = SearchConfig::default()
                .with_threshold(*threshold)
                .with_max_results(*limit);
            let engine = SearchEngine::new(Arc::clone(&index)).with_config(config);
            let cards = engine.search_cards(&query.join(" "));
            if *labels {
                cards
                    .into_iter()
                    .map(|card| label_line(&select_label(card, &ctx)))
                    .collect()
            } else {
                cards.into_iter().map(|card| card.render(&ctx)).collect()
            }
        }
        CatalogCommand::Card { xws } => index.by_xws(xws).map(|card| card.render(&ctx)).collect(),
        CatalogCommand::Pilots { ship } => {
            let mut lines = Vec::new();
            for card in index.by_xws(ship).filter(|card| card.kind() == CardKind::Ship) {
                lines.push(label_line(&select_label(card, &ctx)));
                let Some(ship) = card.as_ship() else { continue };
                for (group, pilots) in index.grouped_pilots(ship) {
                    lines.push(format!("  {group}"));
                    lines.extend(
                        pilots
                            .into_iter()
                            .map(|pilot| format!("    {}", label_line(&pilot_label(pilot)))),
                    );
                }
            }
            lines
        }
        CatalogCommand::List { source } => {
            let (squad, url) = read_squad(source)?;
            let summary = ListParser::with_context(ctx.clone()).summarize(&squad, url.as_deref());
            for card in &summary.unrecognized {
                debug!(%card, "unrecognized card in squad");
            }
            summary.lines
        }
    };
    Ok(lines)
}

fn open_catalog(manifest: &str) -> Result<SharedCatalog> {
    let loader = CatalogLoader::new(LoaderConfig::new(manifest))
        .with_context(|| format!("cannot read catalog at {manifest}"))?;
    SharedCatalog::open(loader).context("failed to load catalog")
}

fn load_icons(path: &Path) -> Result<IconTable> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read icon table {}", path.display()))?;
    let table = IconTable::from_json(&json)
        .with_context(|| format!("invalid icon table {}", path.display()))?;
    Ok(table.with_bracket_fallback())
}

/// Builder links are fetched, anything else is read as a local XWS file.
fn read_squad(source: &str) -> Result<(SquadDocument, Option<String>)> {
    if source.starts_with("http") || source.starts_with('<') {
        let link = clean_link(source);
        let fetcher = HttpFetcher::new()?;
        let squad = fetch_squad(&link, &fetcher)?;
        debug!(link = %display_link(&link), "squad fetched");
        Ok((squad, Some(link)))
    } else {
        let json = fs::read_to_string(source).with_context(|| format!("cannot read {source}"))?;
        Ok((SquadDocument::from_json(&json)?, None))
    }
}

fn label_line(label: &SelectLabel) -> String {
    match &label.icon {
        Some(icon) => format!("{icon} {}", label.label),
        None => label.label.clone(),
    }
}
