//! Civ Unit Export - Entry Point
//!
//! Loads the analyzer snapshot, runs every civilization through the export
//! passes and writes the generated unit module.

use civ_unit_export::analyzer::snapshot::open_for_config;
use civ_unit_export::core::error::Result;
use civ_unit_export::core::ExportConfig;
use civ_unit_export::export::{convert, write_module};

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert analyzer unit statistics into the generated unit module
#[derive(Parser, Debug)]
#[command(name = "civ-unit-export")]
#[command(about = "Convert analyzer unit statistics into the front-end unit data module")]
struct Args {
    /// TOML file overriding the default paths
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("civ_unit_export=info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let (message, code) = e.report();
            if e.is_setup_failure() {
                println!("{}", message);
            } else {
                tracing::error!("{}", message);
            }
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };
    config.validate()?;

    tracing::info!("Initializing analyzer...");
    let analyzer = open_for_config(&config)?;

    let conversion = convert(&analyzer)?;

    tracing::info!(
        "Writing {} units to {}...",
        conversion.mapping.len(),
        config.output_path.display()
    );
    write_module(&config.output_path, &config.export_name, &conversion.mapping)?;

    tracing::info!("Done.");
    Ok(())
}
