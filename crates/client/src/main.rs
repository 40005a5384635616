//! `contest` binary.
//!
//! Composition root: reads `.env`, parses flags, installs logging, loads the
//! content into a [`Runtime`] and prints either an evaluation or the catalogs.
//!
//! # Examples
//!
//! ```bash
//! contest evaluate --monster fenrir_adult --appeal-uses 2
//! contest evaluate --nature daring --gambits wild_show,stage_finale --json
//! contest catalog judges
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use contest_client::{CatalogArgs, CatalogListing, Cli, Command, EvaluateArgs, EvaluationReport};
use contest_content::ConfigLoader;
use contest_runtime::{ContentOracleFactory, Runtime};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _guard = contest_client::logging::setup_logging(cli.log_file)?;

    let factory = cli
        .data_dir
        .clone()
        .map(ContentOracleFactory::new)
        .unwrap_or_else(ContentOracleFactory::default_paths);
    tracing::debug!(data_dir = %factory.data_dir().display(), "loading content");

    let runtime = Runtime::from_content(&factory)?;

    match cli.command {
        Command::Evaluate(args) => evaluate(&runtime, &factory, &args),
        Command::Catalog(args) => catalog(&runtime, &args),
    }
}

fn evaluate(runtime: &Runtime, factory: &ContentOracleFactory, args: &EvaluateArgs) -> Result<()> {
    // Shipped defaults, then the selection file, then flags and environment.
    let mut overrides = factory.load_defaults()?;
    if let Some(path) = &args.config {
        let file = ConfigLoader::load(path)
            .with_context(|| format!("failed to load selection {}", path.display()))?;
        overrides = overrides.merge(file);
    }
    overrides = overrides.merge(args.overrides());

    let config = runtime.resolve(&overrides)?;
    let evaluation = runtime.evaluate(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print!("{}", EvaluationReport::new(&evaluation));
    }
    Ok(())
}

fn catalog(runtime: &Runtime, args: &CatalogArgs) -> Result<()> {
    let listing = CatalogListing::new(runtime.oracles(), args.section);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{listing}");
    }
    Ok(())
}
