//! Scrycsv: export Scryfall card searches to delimited text files.
//!
//! A run searches the Scryfall API, walks every result page, fills in missing
//! images for double-faced cards, keeps the requested fields, and writes them
//! as CSV.
//!
//! # Modules
//!
//! - [`search`]: Paginated search against the Scryfall API
//! - [`repair`]: Front-face image promotion for double-faced cards
//! - [`table`]: Field selection and projection into columns
//! - [`csv_out`]: Delimited text output
//! - [`export`]: The end-to-end pipeline
//! - [`error`]: Error types for scrycsv operations

pub mod csv_out;
pub mod error;
pub mod export;
pub mod repair;
pub mod search;
pub mod table;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub use error::ScrycsvError;

use csv_out::Separator;
use export::ExportOptions;
use search::{HttpPageSource, LogProgress, DEFAULT_ENDPOINT};

/// The scrycsv CLI application.
#[derive(Parser)]
#[command(name = "scrycsv")]
#[command(version, author, about)]
struct Cli {
    /// Scryfall search query, e.g. 'game:Arena set:neo'.
    query: String,

    /// Output file path.
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,

    /// Comma-separated fields to export, in order.
    #[arg(long, value_delimiter = ',', conflicts_with = "all_fields")]
    select: Vec<String>,

    /// Comma-separated fields to leave out (ignored when --select is given).
    #[arg(long, value_delimiter = ',')]
    deselect: Vec<String>,

    /// Export every field present in the results (minus any --deselect).
    #[arg(long)]
    all_fields: bool,

    /// Field separator (a single ASCII character).
    #[arg(long, default_value = ";")]
    sep: Separator,

    /// Search endpoint to query.
    #[arg(long, env = "SCRYCSV_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Do not copy front-face images into double-faced cards.
    #[arg(long)]
    no_repair: bool,

    /// Format for the final report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run the scrycsv CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ScrycsvError> {
    let cli = Cli::parse();

    let options = ExportOptions {
        endpoint: cli.endpoint,
        query: cli.query,
        output: cli.output,
        spec: export::resolve_spec(cli.select, cli.deselect, cli.all_fields),
        separator: cli.sep,
        repair: !cli.no_repair,
    };

    let mut source = HttpPageSource::new();
    let report = export::export_search(&mut source, &options, &mut LogProgress)?;

    match cli.report {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
            println!("{}", json);
            tracing::info!("Done.");
        }
        ReportFormat::Text => {
            print!("{}", report);
            println!("Done.");
        }
    }

    Ok(())
}
