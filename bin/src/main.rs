//! tickload CLI - Ticker reference listing loader.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tickload_lib::{DEFAULT_BATCH_SIZE, DEFAULT_TABLE, ListingQuery, OutputFormat, RunDate};

mod commands;
mod config;
mod display;

#[derive(Parser)]
#[command(name = "tickload")]
#[command(about = "Load the ticker reference listing into a CSV file or Snowflake", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub(crate) struct GlobalArgs {
    /// Dotenv file to load before reading the environment (default: ./.env if present)
    #[arg(long, global = true)]
    pub(crate) env_file: Option<PathBuf>,

    /// Base URL of the reference-data API (default: $MASSIVE_BASE_URL, then the public API)
    #[arg(long, global = true)]
    pub(crate) base_url: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

/// Listing filters shared by both sinks.
#[derive(Args, Debug, Clone)]
pub(crate) struct QueryArgs {
    /// Records per page requested from the API
    #[arg(long, default_value_t = 1000)]
    limit: u32,

    /// Market filter
    #[arg(long, default_value = "stocks")]
    market: String,
}

/// File layout options for `export`.
#[derive(Args, Debug, Clone)]
pub(crate) struct LayoutArgs {
    /// Field delimiter (csv only)
    #[arg(long, default_value_t = ',')]
    pub(crate) delimiter: char,

    /// Omit the header row (csv only)
    #[arg(long)]
    pub(crate) no_header: bool,

    /// Pretty-print the array (json only)
    #[arg(long)]
    pub(crate) pretty: bool,
}

impl QueryArgs {
    fn query(&self) -> ListingQuery {
        ListingQuery {
            market: self.market.clone(),
            active: true,
            limit: self.limit,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every ticker and write them to a file
    Export {
        /// Output file path. Defaults to tickers.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: csv, json or ndjson
        #[arg(short, long, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Fetch every ticker and replace the contents of the Snowflake table
    Load {
        /// Target table in SNOWFLAKE_DATABASE.SNOWFLAKE_SCHEMA
        #[arg(short, long, default_value = DEFAULT_TABLE)]
        table: String,

        /// Rows per INSERT statement
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Run date stamped into the ds column (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        run_date: Option<RunDate>,

        #[command(flatten)]
        query: QueryArgs,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let env_file = config::load_env_file(cli.global.env_file.as_deref())?;
    config::init_tracing(cli.global.verbose, cli.global.quiet)?;
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    match command {
        Commands::Export {
            output,
            format,
            layout,
            query,
        } => commands::export::export(&cli.global, &query.query(), output, format, &layout).await,
        Commands::Load {
            table,
            batch_size,
            run_date,
            query,
        } => {
            commands::load::load(
                &cli.global,
                &query.query(),
                &table,
                batch_size,
                run_date.unwrap_or_else(RunDate::today),
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_layout_flags() {
        let cli = Cli::try_parse_from([
            "tickload", "export", "--format", "jsonl", "--no-header", "--pretty",
        ])
        .unwrap();

        let Some(Commands::Export { format, layout, output, .. }) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(format, OutputFormat::Ndjson);
        assert!(layout.no_header);
        assert!(layout.pretty);
        assert_eq!(layout.delimiter, ',');
        assert!(output.is_none());
    }

    #[test]
    fn test_export_defaults() {
        let cli = Cli::try_parse_from(["tickload", "export"]).unwrap();

        let Some(Commands::Export { format, layout, .. }) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(format, OutputFormat::Csv);
        assert!(!layout.no_header);
        assert!(!layout.pretty);
        assert!(cli.global.base_url.is_none());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["tickload", "export", "--format", "parquet"]).is_err());
    }
}
