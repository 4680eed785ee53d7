//! cityradius — radius queries over a set of named points
//!
//! Loads the city data once, then answers queries.
//!
//! Usage examples
//! --------------
//!
//! - Interactive prompt loop (the default)
//!   $ cityradius
//!   $ cityradius --input cities.txt interactive
//!
//! - Summary of the loaded data
//!   $ cityradius stats
//!
//! - Name lookup
//!   $ cityradius cities ash
//!
//! - One-shot query, optionally as JSON
//!   $ cityradius query Ashford 5
//!   $ cityradius query Ashford 5 --metric manhattan --json
//!
//! Data source
//! -----------
//!
//! Without `--input` (or `CITYRADIUS_DATA`), the sample file bundled with
//! `cityradius-core` is used. A binary snapshot is written next to the
//! source and reused while it is up to date; `--no-cache` skips it.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use cityradius_cli::{write_result, Session};
use cityradius_core::{PointStore, RadiusSearch};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let input = args.input.unwrap_or_else(PointStore::default_dataset_path);
    let store = if args.no_cache {
        PointStore::load_from_path(&input)
    } else {
        PointStore::load_cached(&input)
    }
    .with_context(|| format!("failed to load cities from {}", input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Commands::Interactive) {
        Commands::Stats => {
            let stats = store.stats();
            writeln!(out, "Point store statistics:")?;
            writeln!(out, "  Cities: {}", stats.cities)?;
            if let Some(e) = stats.extent {
                writeln!(out, "  x: {} .. {} (width {})", e.min.x, e.max.x, e.width())?;
                writeln!(out, "  y: {} .. {} (height {})", e.min.y, e.max.y, e.height())?;
            }
        }

        Commands::Cities { query } => {
            let matches = store.find_by_substring(&query);
            if matches.is_empty() {
                writeln!(out, "No cities found matching: {query}")?;
            }
            for c in matches {
                writeln!(out, "{} ({}, {})", c.name, c.x(), c.y())?;
            }
        }

        Commands::Query {
            city,
            radius,
            metric,
            json,
        } => {
            if let (false, Some(hint)) = (store.contains(&city), store.suggest(&city)) {
                anyhow::bail!("city not found: {city} (did you mean {}?)", hint.name);
            }
            let res = store.search_nearby(&city, radius, metric)?;
            if json {
                serde_json::to_writer_pretty(&mut out, &res)?;
                writeln!(out)?;
            } else {
                write_result(&mut out, &res)?;
            }
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            Session::new(&store, stdin.lock(), out).run()?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
