//! Dump the tag tree of an SSML document, optionally timing it against `xmlparser`.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ssml_tree::{BuilderConfig, ConfigError, StructuralError, TagTreeBuilder};

#[derive(Parser)]
#[command(name = "ssml-tree", version, about)]
struct Cli {
    /// Markup file to parse.
    path: PathBuf,
    /// TOML builder configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also tokenize the input with xmlparser and report its timing.
    #[arg(long)]
    compare: bool,
    /// Enable INFO level logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Structure(#[from] StructuralError),
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG, which shows only ERROR when unset
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => BuilderConfig::load(path)?,
        None => BuilderConfig::default(),
    };
    let markup = fs::read_to_string(&cli.path)?;

    let now = Instant::now();
    let tree = TagTreeBuilder::new(config).build(&markup)?;
    info!(elapsed = ?now.elapsed(), nodes = tree.len(), depth = tree.max_depth(), "ssml_tree");
    print!("{tree}");

    if cli.compare {
        compare_xmlparser(&markup);
    }
    Ok(())
}

/// Bench against xmlparser. Markup that is valid here but not XML is only reported.
fn compare_xmlparser(markup: &str) {
    let now = Instant::now();
    match xmlparser_tokens(markup) {
        Ok(tokens) => info!(elapsed = ?now.elapsed(), tokens, "xmlparser"),
        Err(err) => warn!(error = %err, "xmlparser rejected the input, skipping comparison"),
    }
}

fn xmlparser_tokens(markup: &str) -> Result<usize, xmlparser::Error> {
    let mut tokens = 0usize;
    for token in xmlparser::Tokenizer::from(markup.trim()) {
        token?;
        tokens += 1;
    }
    Ok(tokens)
}
