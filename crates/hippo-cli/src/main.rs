//! hippo command-line interface

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hippo::config::{Config, TIMEZONE_VAR};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// hippo command-line tool
#[derive(Parser)]
#[command(name = "hippo")]
#[command(author, version, about = "Typed value extraction from text, queries and JSON", long_about = None)]
struct Cli {
    /// Timezone for offset-less dates (overrides TIMEZONE)
    #[arg(short = 'z', long, global = true)]
    timezone: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Coerce a raw token
    Coerce {
        /// Destination type (int, ?date, string[], map, ...)
        #[arg(short = 't', long = "type")]
        tag: String,

        /// Raw input
        raw: String,

        /// List delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: String,
    },

    /// Resolve candidate keys in a JSON document
    Resolve {
        /// Destination type (int, ?date, string[], map, ...)
        #[arg(short = 't', long = "type")]
        tag: String,

        /// Candidate keys, tried in order (dotted paths)
        #[arg(required = true)]
        keys: Vec<String>,

        /// JSON file (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Coerce a parameter of a URL query string
    Query {
        /// Destination type (int, ?date, string[], map, ...)
        #[arg(short = 't', long = "type")]
        tag: String,

        /// Query string (`a=1&b=2`)
        query: String,

        /// Parameter name
        name: String,

        /// List delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Coerce every value of a repeated parameter
        #[arg(short, long)]
        all: bool,
    },

    /// Print the current time in the configured timezone
    Now,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let timezone = cli.timezone.clone();
    let config = Config::from_env_with(|key| match key {
        TIMEZONE_VAR => timezone.clone(),
        _ => None,
    })?;

    init_tracing(&config);
    config.apply()?;

    let value = match cli.command {
        Commands::Coerce {
            tag,
            raw,
            delimiter,
        } => commands::coerce(&tag, &raw, &delimiter)?,

        Commands::Resolve { tag, keys, file } => {
            let document = commands::read_input(file.as_deref())?;
            commands::resolve(&tag, &document, &keys)?
        }

        Commands::Query {
            tag,
            query,
            name,
            delimiter,
            all,
        } => commands::query(&tag, &query, &name, &delimiter, all)?,

        Commands::Now => commands::now(),
    };

    output::print_output(&value, cli.pretty)
}

/// Log to stderr, filtered by `RUST_LOG` or else the configured level
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
