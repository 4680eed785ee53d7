use cityradius_core::Metric;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for cityradius
#[derive(Debug, Parser)]
#[command(
    name = "cityradius",
    version,
    about = "Find every city within a radius of another, under a choice of distance metric"
)]
pub struct CliArgs {
    /// Path to the city data file (name line, then `x , y` line, repeated).
    /// Files ending in .gz are decompressed.
    #[arg(short = 'i', long = "input", global = true, env = "CITYRADIUS_DATA")]
    pub input: Option<PathBuf>,

    /// Always parse the text source; don't read or write the binary snapshot
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `interactive`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded cities
    Stats,

    /// Search city names containing a substring (case- and accent-insensitive)
    Cities {
        query: String,
    },

    /// Run a single radius query
    Query {
        /// Exact city name
        city: String,

        /// Search radius (non-negative)
        #[arg(allow_negative_numbers = true)]
        radius: f64,

        /// 0/euclidean, 1/chebyshev or 2/manhattan
        #[arg(short = 'm', long = "metric", default_value_t = Metric::Euclidean)]
        metric: Metric,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for city, radius and metric until `0` is entered
    Interactive,
}
