//! Subcommands of the `cielo-edi` binary.

pub mod config;
pub mod info;
pub mod process;
pub mod stream;

use std::path::Path;

use cielo_edi_core::EdiConfig;
use cielo_edi_core::EdiParser;

/// Config from `--config`, else the default config file when present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EdiConfig> {
    if let Some(path) = config_path {
        return Ok(EdiConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(EdiConfig::from_file(&default_path)?)
    } else {
        Ok(EdiConfig::default())
    }
}

/// Parser for `config`, with `encoding` overriding the configured one.
pub fn build_parser(config: &EdiConfig, encoding: Option<&str>) -> EdiParser {
    let parser = EdiParser::with_config(config.parser.clone());
    match encoding {
        Some(label) => parser.with_encoding(label),
        None => parser,
    }
}

pub fn ensure_exists(input: &Path) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    Ok(())
}
