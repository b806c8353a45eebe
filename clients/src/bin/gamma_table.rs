//! `gamma-table` — Prints a gamma remap table as Rust source.
//!
//! By default writes the single-line literal
//! `const gamma : [u16; 1025] = [...];` to standard output.
//!
//! **Usage:**
//! ```
//! gamma-table --gamma <float> [--entries <256|257|1025|N>] [--element <u8|u16|u32>]
//!             [--scale <float>] [--format <literal|module|json>] [--name <IDENT>]
//!             [--out <path> | --check <path>] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use gamma_lut::emit::{generate_module, write_file};
use gamma_lut::remap::out_of_range_count;
use gamma_lut::serializer::json::TableDocument;
use gamma_lut::serializer::literal::{parse_literal, serialize};
use gamma_lut::{generate, parse_gamma, ElementType, TableConfiguration};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Single-line `const gamma` array literal.
    Literal,
    /// Complete Rust module with a documented `pub const` table.
    Module,
    /// JSON document with the gamma, configuration, and values.
    Json,
}

/// Generate a gamma remap table as a source-code array literal.
#[derive(Parser)]
#[command(
    name = "gamma-table",
    about = "Generate a gamma remap table as a Rust array literal"
)]
struct Args {
    /// Gamma exponent applied to each normalized index.
    #[arg(long, allow_hyphen_values = true, value_parser = parse_gamma)]
    gamma: f64,

    /// Table size: 256, 257, 1025, or any integer from 2 to 16777216.
    #[arg(long, default_value = "1025")]
    entries: TableConfiguration,

    /// Element type declared by the array; defaults to the smallest that holds entries - 1.
    #[arg(long)]
    element: Option<ElementType>,

    /// Output scale; defaults to entries - 1.
    #[arg(long, allow_hyphen_values = true)]
    scale: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Literal)]
    format: Format,

    /// Constant name for the module format; defaults to GAMMA_<digits>.
    #[arg(long)]
    name: Option<String>,

    /// Write to this file instead of standard output.
    #[arg(long, conflicts_with = "check")]
    out: Option<PathBuf>,

    /// Verify that this literal file matches the table instead of printing it.
    #[arg(long)]
    check: Option<PathBuf>,

    /// Print a generation summary to standard error.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn configuration(&self) -> TableConfiguration {
        let mut config = self.entries;
        if let Some(element) = self.element {
            config = config.with_element(element);
        }
        if let Some(scale) = self.scale {
            config = config.with_output_scale(scale);
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.name.is_some() && args.format != Format::Module {
        Args::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--name only applies to --format module",
            )
            .exit();
    }
    if args.check.is_some() && args.format != Format::Literal {
        Args::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--check only reads the literal format",
            )
            .exit();
    }

    let config = args.configuration();

    if args.verbose {
        eprintln!(
            "Generating gamma table: gamma {}, {} entries of {} (divisor {}, scale {})",
            args.gamma,
            config.entry_count(),
            config.type_label(),
            config.input_divisor(),
            config.output_scale()
        );
    }

    let table = generate(args.gamma, &config);

    if args.verbose {
        let overflow = out_of_range_count(&table, &config);
        if overflow > 0 {
            eprintln!(
                "  {overflow} entries fall outside the {} range and are emitted unclamped",
                config.type_label()
            );
        }
    }

    if let Some(path) = &args.check {
        check(path, &table, &config)?;
        println!("{}: matches gamma {}", path.display(), args.gamma);
        return Ok(());
    }

    let text = match args.format {
        Format::Literal => serialize(&table, config.type_label(), config.entry_count()),
        Format::Module => generate_module(args.gamma, &config, args.name.as_deref())?,
        Format::Json => {
            let document = TableDocument::new(args.gamma, &config, &table);
            let mut json = serde_json::to_string_pretty(&document)
                .context("Failed to serialize gamma table to JSON")?;
            json.push('\n');
            json
        }
    };

    match &args.out {
        Some(path) => {
            write_file(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  Written: {}", path.display());
        }
        None => {
            io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("Failed to write to standard output")?;
        }
    }

    if args.verbose {
        eprintln!("Generation complete.");
    }
    Ok(())
}

/// Compares the literal stored at `path` against `table`.
fn check(path: &Path, table: &[i64], config: &TableConfiguration) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = parse_literal(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if parsed.type_label != config.type_label() {
        bail!(
            "{}: declares element type {}, expected {}",
            path.display(),
            parsed.type_label,
            config.type_label()
        );
    }
    if parsed.declared_len != config.entry_count() {
        bail!(
            "{}: declares {} entries, expected {}",
            path.display(),
            parsed.declared_len,
            config.entry_count()
        );
    }
    if let Some((index, (found, expected))) = parsed
        .values
        .iter()
        .zip(table)
        .enumerate()
        .find(|(_, (found, expected))| found != expected)
    {
        bail!(
            "{}: first difference at index {index}: found {found}, expected {expected}",
            path.display()
        );
    }
    Ok(())
}
