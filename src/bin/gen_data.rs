//! Vendor data bundler
//!
//! Wraps the vendored simulator data scripts as ES modules in the generated
//! directory.

use civ_unit_export::export::vendor_bundle::{bundle_vendor_files, DEFAULT_BUNDLE};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Wrap vendored data scripts as ES modules
#[derive(Parser, Debug)]
#[command(name = "gen_data")]
#[command(about = "Append export statements to vendored data scripts")]
struct Args {
    /// Directory holding units.js, presets.js and scenarios.js
    #[arg(long)]
    vendor_dir: Option<PathBuf>,

    /// Directory the wrapped modules are written to
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> civ_unit_export::core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("civ_unit_export=info,gen_data=info")),
        )
        .init();

    let args = Args::parse();
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let vendor_dir = args
        .vendor_dir
        .unwrap_or_else(|| root.join("vendor").join("chombat"));
    let out_dir = args.out_dir.unwrap_or_else(|| root.join("generated"));

    bundle_vendor_files(&vendor_dir, &out_dir, &DEFAULT_BUNDLE)?;
    Ok(())
}
