//! xrprops: generate OpenXR system-property queries from `xr.xml`.
//!
//! Prints a listing of every extension that chains a structure onto
//! `XrSystemProperties`, then writes the C++ that queries them.

mod config;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xrprops_codegen::{EmitterOptions, generate, load_registry, write_cpp};

use crate::config::XrPropsConfig;

#[derive(Parser)]
#[command(name = "xrprops", version, about)]
struct Cli {
    /// Registry document to read [default: xr.xml]
    #[arg(short, long)]
    registry: Option<PathBuf>,

    /// Generated C++ file [default: xrsystemproperties.cpp]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file [default: xrprops.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print the extension listing
    #[arg(long)]
    no_listing: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = XrPropsConfig::load(cli.config.as_deref())?;
    let registry_path = cli.registry.unwrap_or(config.paths.registry);
    let output_path = cli.output.unwrap_or(config.paths.output);
    let options = EmitterOptions::from(config.emitter);

    let registry = load_registry(&registry_path)?;
    let generated = generate(&registry, &options)
        .with_context(|| format!("generating from {}", registry_path.display()))?;

    if !cli.no_listing {
        print!("{}", generated.listing);
    }
    write_cpp(&output_path, &generated.cpp)?;
    tracing::info!(path = %output_path.display(), "wrote system property queries");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
