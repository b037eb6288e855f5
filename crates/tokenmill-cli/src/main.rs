//! Command-line entry points for the token pipeline.
//!
//! Each subcommand is one transform: it reads the conventionally located
//! documents under the data directory, overwrites the matching JSON
//! artifact, and prints a one-line summary. A missing input document
//! aborts with a non-zero exit before anything is written.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;

use tokenmill::config::DEFAULT_DATA_DIR;
use tokenmill::{ops, Paths};

/// Regenerate the design-token JSON artifacts from the markdown documents.
#[derive(Parser)]
#[command(name = "tokenmill", version, about)]
struct Cli {
    /// Directory holding the token documents and JSON artifacts.
    #[arg(long, default_value = DEFAULT_DATA_DIR, global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild color_palette.json from the primitives document.
    Palette,
    /// Rebuild semantic_color_mapping.json from the semantic documents.
    Semantic,
    /// Rebuild theme_color_mapping.json (requires palette + semantic JSON).
    Theme,
    /// Run palette, semantic, and theme in dependency order.
    All,
    /// Print the dev-code document with resolved values filled in.
    Annotate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new(&cli.data_dir);

    match cli.command {
        Command::Palette => run_palette(&paths)?,
        Command::Semantic => run_semantic(&paths)?,
        Command::Theme => run_theme(&paths)?,
        Command::All => {
            run_palette(&paths)?;
            run_semantic(&paths)?;
            run_theme(&paths)?;
        }
        Command::Annotate => println!("{}", ops::annotate_dev_tokens(&paths)?),
    }
    Ok(())
}

fn run_palette(paths: &Paths) -> Result<()> {
    let summary = ops::generate_palette(paths)?;
    println!(
        "{} {} families, {} tokens ({} skipped) -> {}",
        style("palette").green().bold(),
        summary.families,
        summary.tokens,
        summary.skipped_hex,
        paths.palette_json().display()
    );
    Ok(())
}

fn run_semantic(paths: &Paths) -> Result<()> {
    let summary = ops::generate_semantic(paths)?;
    println!(
        "{} {} categories, {} aliases ({} unmatched) -> {}",
        style("semantic").green().bold(),
        summary.categories,
        summary.aliases,
        summary.unmatched,
        paths.semantic_json().display()
    );
    Ok(())
}

fn run_theme(paths: &Paths) -> Result<()> {
    let summary = ops::generate_theme(paths)?;
    println!(
        "{} {} entries ({} unresolved) -> {}",
        style("theme").green().bold(),
        summary.entries,
        summary.unresolved,
        paths.theme_json().display()
    );
    Ok(())
}
