//! Stream command - print records as newline-delimited JSON.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use tracing::info;

use cielo_edi_core::{Source, StreamItem};

use super::{build_parser, ensure_exists, load_config};

/// Arguments for the stream command.
#[derive(Args)]
pub struct StreamArgs {
    /// Extract file
    #[arg(required = true)]
    input: PathBuf,

    /// Input encoding (default: from config, latin-1)
    #[arg(short, long)]
    encoding: Option<String>,
}

pub fn run(args: StreamArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    ensure_exists(&args.input)?;

    let parser = build_parser(&config, args.encoding.as_deref());
    let mut stream = parser.stream(Source::path(&args.input))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for item in &mut stream {
        let line = match item? {
            StreamItem::Record(record) => serde_json::to_string(&record)?,
            StreamItem::Error(entry) => json!({ "error": entry }).to_string(),
        };
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!(
        "Streamed {} records from {} lines",
        stream.records_read(),
        stream.lines_read()
    );

    Ok(())
}
