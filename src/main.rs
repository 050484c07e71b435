#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use ctxwalk::cli::{self, Args};
use ctxwalk::ignore;
use ctxwalk::scan::{self, ScanConfig};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("ctxwalk: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let rules = match &args.ignore {
        Some(arg) => cli::load_ignore_rules(arg)
            .with_context(|| format!("{arg}: failed to read ignore rules"))?,
        None => Vec::new(),
    };

    let config = ScanConfig {
        ignore_patterns: ignore::build_ignore_set(&rules),
    };
    let document = scan::scan(&args.directory, &config)?;

    std::fs::write(&args.output, &document)
        .with_context(|| format!("{}: failed to write output", args.output.display()))?;

    if !args.quiet {
        let shown = args
            .output
            .canonicalize()
            .unwrap_or_else(|_| args.output.clone());
        println!("Documentation generated at: {}", shown.display());
    }
    Ok(())
}

/// Route diagnostics to stderr; `-v` raises the default filter, RUST_LOG wins.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
