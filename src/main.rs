use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use recipe_summary_rs::cli::Cli;
use recipe_summary_rs::error::Result;
use recipe_summary_rs::interface::display_summary;
use recipe_summary_rs::process::LookupTables;
use recipe_summary_rs::summary::summarize;
use recipe_summary_rs::workbook::{load_lookups, load_workbook, write_summary};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// RUST_LOG takes precedence over -v.
fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("Started with verbosity level: {}", cli.verbose);
}

fn run(cli: &Cli) -> Result<()> {
    let workbook = load_workbook(&cli.file)?;

    let lookups = match &cli.lookups {
        Some(path) => load_lookups(path)?,
        None => LookupTables::builtin(),
    };

    // Nothing is written unless every dish summarized.
    let rows = summarize(&workbook, &lookups)?;

    if cli.dry_run {
        display_summary(&rows);
        println!("DRY RUN: Would save to {}", cli.output);
        return Ok(());
    }

    write_summary(&rows, &cli.output)?;
    println!("Summary saved to {}", cli.output);
    Ok(())
}
