//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::build::build_cache;
use crate::cache::store;
use crate::core::paths;
use crate::lookup::LookupCache;
use crate::registry::{Category, Options, Registry};

/// hicache - a lookup cache for pluggable syntax highlighting components.
#[derive(Parser, Debug)]
#[command(name = "hicache")]
#[command(
    author,
    version,
    about,
    long_about = r#"hicache keeps a persisted mapping from lookup keys (filename, extension,
short name) to component identity, so resolving a lexer, formatter, style
or filter does not re-enumerate the whole catalog on every process start.

The cache lives in a single JSON file (see `hicache path`) and repairs
itself: a key that misses is resolved the slow way and added to the file.

Examples:
    hicache lookup lexers my.py
    hicache lookup formatters latex
    hicache build
    hicache path
"#
)]
pub struct Cli {
    /// Cache file to use instead of the default location.
    #[arg(
        long,
        global = true,
        env = "HICACHE_FILE",
        value_name = "PATH",
        long_help = "Cache file to use instead of the default location.\n\n\
Defaults to $XDG_DATA_HOME/hicache/cache.json (or the platform data\n\
directory). The HICACHE_FILE environment variable sets the same override."
    )]
    pub cache_file: Option<PathBuf>,

    /// Output format (text/json).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): human-friendly lines\n\
- json: one JSON object or array on stdout"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a component by key and print its identity.
    #[command(
        long_about = "Resolve a component and print its namespace and identifier.\n\n\
Lexers and formatters take a filename or extension key; styles and\n\
filters take a short name. A formatter key containing a dot is treated\n\
as a filename, anything else as a short name.\n\n\
Examples:\n\
  hicache lookup lexers CMakeLists.txt\n\
  hicache lookup formatters tex\n\
  hicache lookup filters gobble\n"
    )]
    Lookup {
        /// Component category (lexers/formatters/styles/filters).
        #[arg(value_name = "CATEGORY")]
        category: String,

        /// Lookup key: a filename for lexers, a short name for styles/filters.
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Discover the full catalog and (re)write the cache file.
    #[command(
        long_about = "Run discovery over every category and overwrite the cache file,\n\
whether or not one exists.\n\n\
Example:\n\
  hicache build\n"
    )]
    Build,

    /// Print the resolved cache file path.
    Path,

    /// Delete the cache file.
    Clear,

    /// List all registered style names.
    #[command(
        long_about = "List every registered style name.\n\n\
Listing proxies straight to the catalog; full enumerations gain nothing\n\
from per-key caching.\n"
    )]
    Styles,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let path = cli.cache_file.unwrap_or_else(paths::cache_file);

    match cli.command {
        Commands::Lookup { category, key } => run_lookup(&path, &category, &key, format),
        Commands::Build => run_build(&path, format),
        Commands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        Commands::Clear => run_clear(&path),
        Commands::Styles => run_styles(format),
    }
}

fn run_lookup(path: &Path, category: &str, key: &str, format: OutputFormat) -> Result<()> {
    let category: Category = category
        .parse()
        .map_err(|err: String| anyhow::anyhow!(err))?;
    let mut lookup = LookupCache::load_or_build_at(Registry::new(), path.to_path_buf())
        .with_context(|| format!("Failed to load lookup cache from {:?}", path))?;

    let by_filename = match category {
        Category::Lexers => true,
        Category::Formatters => key.contains('.'),
        Category::Styles | Category::Filters => false,
    };
    let cached = if by_filename {
        lookup.contains_filename(category, key)
    } else {
        lookup.contains_name(category, key)
    };

    let component = match category {
        Category::Lexers => lookup.lexer_for_filename(key, "", Options::new())?,
        Category::Formatters if by_filename => {
            lookup.formatter_for_filename(key, Options::new())?
        }
        Category::Formatters => lookup.formatter_by_name(key, Options::new())?,
        Category::Styles => lookup.style_by_name(key)?,
        Category::Filters => lookup.filter_by_name(key, Options::new())?,
    };

    match format {
        OutputFormat::Json => {
            let line = serde_json::json!({
                "category": category.as_str(),
                "key": key,
                "namespace": component.namespace(),
                "ident": component.ident(),
                "cached": cached,
            });
            println!("{}", serde_json::to_string(&line)?);
        }
        OutputFormat::Text => {
            let source = if cached {
                "cache".green()
            } else {
                "catalog".yellow()
            };
            println!(
                "{} {} -> [{}, {}] ({})",
                category,
                key,
                component.namespace(),
                component.ident(),
                source
            );
        }
    }
    Ok(())
}

fn run_build(path: &Path, format: OutputFormat) -> Result<()> {
    let registry = Registry::new();
    let cache = build_cache(&registry).context("Failed to discover the component catalog")?;
    store::write_cache(&cache, path)
        .with_context(|| format!("Failed to write cache file: {:?}", path))?;

    match format {
        OutputFormat::Json => {
            let counts: serde_json::Map<String, serde_json::Value> = cache
                .categories()
                .map(|(name, tables)| {
                    let keys: usize = tables.values().map(|table| table.len()).sum();
                    (name.to_string(), serde_json::json!(keys))
                })
                .collect();
            let line = serde_json::json!({
                "path": path.display().to_string(),
                "keys": cache.key_count(),
                "categories": counts,
            });
            println!("{}", serde_json::to_string(&line)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {} keys -> {}",
                "built".green(),
                cache.key_count(),
                path.display()
            );
        }
    }
    Ok(())
}

fn run_clear(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove cache file: {:?}", path))?;
        println!("removed {}", path.display());
    } else {
        println!("no cache file at {}", path.display());
    }
    Ok(())
}

fn run_styles(format: OutputFormat) -> Result<()> {
    let registry = Registry::new();
    let names: Vec<String> = registry
        .enumerate(Category::Styles)
        .iter()
        .map(|info| info.name.to_string())
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&names)?),
        OutputFormat::Text => {
            for name in names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
