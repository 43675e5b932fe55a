//! Process command - parse an extract and export it.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use cielo_edi_core::{CsvExporter, EdiConfig, JsonExporter, ProcessingResult};

use super::info::print_summary;
use super::{build_parser, ensure_exists, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Extract file
    #[arg(required = true)]
    input: PathBuf,

    /// Output JSON file (default: input with a .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Directory for CSV files (default: <stem>_csv next to the input)
    #[arg(short = 'd', long)]
    dir: Option<PathBuf>,

    /// Input encoding (default: from config, latin-1)
    #[arg(short, long)]
    encoding: Option<String>,

    /// JSON indentation, 0 for compact output (default: from config, 2)
    #[arg(long)]
    indent: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON document
    Json,
    /// One CSV file per record kind
    Csv,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    ensure_exists(&args.input)?;

    info!("Processing file: {}", args.input.display());
    let parser = build_parser(&config, args.encoding.as_deref());
    let result = parser.parse_file(&args.input)?;

    if result.has_unparsed_lines() {
        warn!("{} lines were not processed", result.unparsed_lines.len());
    }

    match args.format {
        OutputFormat::Json => write_json(&args, &config, &result)?,
        OutputFormat::Csv => write_csv(&args, &config, &result)?,
    }

    print_summary(&result);

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn write_json(args: &ProcessArgs, config: &EdiConfig, result: &ProcessingResult) -> anyhow::Result<()> {
    let mut exporter = JsonExporter::from_config(&config.export);
    if let Some(indent) = args.indent {
        exporter.indent = indent;
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("json"));
    exporter.export_file(result, &output)?;

    println!(
        "{} JSON written to {}",
        style("✓").green(),
        output.display()
    );

    Ok(())
}

fn write_csv(args: &ProcessArgs, config: &EdiConfig, result: &ProcessingResult) -> anyhow::Result<()> {
    let stem = file_stem(&args.input);
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| default_csv_dir(&args.input, &stem));

    let exporter = CsvExporter::from_config(&config.export);
    let written = exporter.export_all(result, &dir, &format!("{stem}_"))?;

    println!(
        "{} CSV files written to {}",
        style("✓").green(),
        dir.display()
    );
    for (_, path) in &written {
        if let Some(name) = path.file_name() {
            println!("  - {}", name.to_string_lossy());
        }
    }

    Ok(())
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "extract".to_string())
}

fn default_csv_dir(input: &Path, stem: &str) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{stem}_csv"))
}
