//! itemdefs CLI - item definition records from identifier lines
//!
//! Reads identifier lines from stdin and writes one record per line to stdout.
//! Logs and errors go to stderr.

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::process;

use itemdefs::{Catalog, EmitMode, LineTransformer, RecordError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "itemdefs")]
#[command(version, about = "Generate RON item definition records from identifier lines", long_about = None)]
struct Cli {
    /// Template written for each input line
    #[arg(short, long, value_enum, default_value_t = Emit::Record)]
    emit: Emit,

    /// Print the catalog identifiers and exit without reading input
    #[arg(short, long)]
    list: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Emit {
    /// Item definition record
    Record,
    /// `"id": "description",` catalog line
    CatalogEntry,
}

impl From<Emit> for EmitMode {
    fn from(emit: Emit) -> Self {
        match emit {
            Emit::Record => EmitMode::Record,
            Emit::CatalogEntry => EmitMode::CatalogEntry,
        }
    }
}

fn main() {
    // Load environment variables (RUST_LOG)
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout carries only records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::builtin();

    let result = if cli.list {
        list_catalog(catalog)
    } else {
        transform_stdin(catalog, cli.emit.into())
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn list_catalog(catalog: &Catalog) -> Result<(), RecordError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for id in catalog.identifiers() {
        writeln!(out, "{}", id)?;
    }
    out.flush()?;
    Ok(())
}

fn transform_stdin(catalog: &Catalog, mode: EmitMode) -> Result<(), RecordError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let summary = LineTransformer::new(catalog)
        .with_mode(mode)
        .run(stdin.lock(), stdout.lock())?;

    tracing::debug!(records = summary.records_written, "done");
    Ok(())
}
