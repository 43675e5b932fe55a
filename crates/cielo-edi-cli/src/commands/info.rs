//! Info command - summarize an extract without exporting it.

use std::fmt::Display;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use cielo_edi_core::ProcessingResult;

use super::{build_parser, ensure_exists, load_config};

/// Arguments for the info command.
#[derive(Args)]
pub struct InfoArgs {
    /// Extract file
    #[arg(required = true)]
    input: PathBuf,

    /// Input encoding (default: from config, latin-1)
    #[arg(short, long)]
    encoding: Option<String>,
}

pub fn run(args: InfoArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    ensure_exists(&args.input)?;

    info!("Processing file: {}", args.input.display());
    let parser = build_parser(&config, args.encoding.as_deref());
    let result = parser.parse_file(&args.input)?;

    print_summary(&result);

    Ok(())
}

/// Print header fields, file kind, counters and totals.
pub fn print_summary(result: &ProcessingResult) {
    let rule = "=".repeat(60);

    println!();
    println!("{rule}");
    println!("{}", style("RESUMO DO PROCESSAMENTO").bold());
    println!("{rule}");

    if let Some(header) = &result.header {
        println!("Estabelecimento: {}", header.establishment);
        println!("Data Processamento: {}", or_dash(header.processing_date));
        println!(
            "Período: {} a {}",
            or_dash(header.period_start),
            or_dash(header.period_end)
        );
        println!("Versão Layout: {}", header.layout_version);
    }

    println!();
    println!(
        "Tipo de Arquivo: {} ({})",
        result.file_kind_label(),
        result.file_kind.as_deref().unwrap_or("-")
    );

    let stats = &result.statistics;
    println!();
    println!("Estatísticas:");
    println!("  Total de Linhas: {}", stats.total_lines);
    println!("  URs Agenda: {}", stats.scheduled_receivables);
    println!("  Detalhes: {}", stats.transaction_details);
    println!("  Transações Pix: {}", stats.pix_transactions);
    println!("  Negociações: {}", stats.negotiations);
    println!();
    println!("Valores:");
    println!("  Valor Bruto Total: R$ {:.2}", stats.gross_amount_total);
    println!("  Valor Líquido Total: R$ {:.2}", stats.net_amount_total);

    if result.has_unparsed_lines() {
        println!();
        println!(
            "{} Linhas não processadas: {}",
            style("⚠").yellow(),
            result.unparsed_lines.len()
        );
    }

    println!("{rule}");
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
