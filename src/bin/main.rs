//! OCDM to SKG-IF CLI
//!
//! Command-line tool converting an OCDM API JSON export into an SKG-IF
//! JSON-LD document.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use ocdm_skgif::{
    convert, parse_records, to_json_string, ConvertError, ConvertOptions, InputRecord,
    TypeMappings,
};

#[derive(Parser)]
#[command(name = "ocdm-skgif")]
#[command(about = "JSON OCDM API format to JSON-LD SKG-IF converter")]
#[command(version)]
struct Cli {
    /// OCDM API export (JSON array of records)
    input: PathBuf,

    /// Where to write the SKG-IF JSON-LD document
    output: PathBuf,

    /// JSON file overriding the record-type tables and namespaces
    #[arg(long, value_name = "FILE")]
    mappings: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

/// Read and parse the input records
fn load_records(path: &PathBuf) -> Result<Vec<InputRecord>, ConvertError> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::LoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_records(&content, &path.display().to_string())
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let mappings = match &cli.mappings {
        Some(path) => TypeMappings::from_path(path)?,
        None => TypeMappings::default(),
    };

    let options = ConvertOptions { mappings };

    let records = load_records(&cli.input)?;
    info!(records = records.len(), input = %cli.input.display(), "Loaded records");

    let result = convert(&records, &options)?;

    // Render fully before touching the output file
    let output = to_json_string(&result, !cli.compact)?;
    fs::write(&cli.output, output)?;

    eprintln!(
        "Converted {} records into {} nodes ({} agents, {} venues), wrote {}",
        result.stats.records,
        result.stats.total_nodes,
        result.stats.agents,
        result.stats.venues,
        cli.output.display()
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
