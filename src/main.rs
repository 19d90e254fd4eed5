//! Main entry point for the storezip CLI application.
//!
//! Reads the given files, packs them into a stored ZIP archive and writes the
//! archive to disk or stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use storezip::{ArchiveBuilder, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level())),
        )
        .init();

    // Handle an existing output file before reading any input
    if !cli.is_stdout() && Path::new(&cli.archive).exists() {
        if cli.never_overwrite {
            if !cli.is_quiet() {
                eprintln!("Skipping: {} (file exists)", cli.archive);
            }
            return Ok(());
        }

        if !cli.overwrite {
            if !cli.is_very_quiet() {
                eprintln!("Skipping: {} (use -o to overwrite)", cli.archive);
            }
            return Ok(());
        }
    }

    let builder = collect_entries(&cli).await?;
    let archive = builder
        .build()
        .with_context(|| format!("failed to build {}", cli.archive))?;

    if cli.is_stdout() {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(&archive).await?;
        stdout.flush().await?;
    } else {
        fs::write(&cli.archive, &archive)
            .await
            .with_context(|| format!("failed to write {}", cli.archive))?;
    }

    info!(
        archive = %cli.archive,
        entries = builder.len(),
        bytes = archive.len(),
        "archive written"
    );

    Ok(())
}

/// Read every input file, in command-line order, into a builder.
async fn collect_entries(cli: &Cli) -> Result<ArchiveBuilder> {
    let mut builder = ArchiveBuilder::new();

    for path in &cli.files {
        let data = fs::read(path)
            .await
            .with_context(|| format!("failed to read {path}"))?;
        let name = cli.entry_name(path);

        if !cli.is_quiet() {
            println!("  adding: {name} ({} bytes)", data.len());
        }

        builder.add(name, data);
    }

    Ok(builder)
}
