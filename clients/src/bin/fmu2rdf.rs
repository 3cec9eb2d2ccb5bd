//! `fmu2rdf` — Translates an FMU's model description into an RDF graph
//! and writes it as Turtle or N-Triples.
//!
//! **Usage:**
//! ```
//! fmu2rdf <FMU> [--shapes] [--blackbox | --filter <prefix>...]
//!         [--iri-prefix <iri>] [--format turtle|ntriples] [--output <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fmu2rdf::{assemble_path, AssembleOptions, DEFAULT_IRI_PREFIX};
use tracing_subscriber::EnvFilter;

/// Translate an FMU model description into an RDF graph.
#[derive(Parser)]
#[command(name = "fmu2rdf", about = "Translate an FMU model description into RDF")]
struct Args {
    /// Path to the FMU archive (or a bare modelDescription.xml).
    fmu: PathBuf,

    /// Base IRI under which all graph IRIs are minted.
    #[arg(long, env = "FMU2RDF_IRI_PREFIX", default_value = DEFAULT_IRI_PREFIX)]
    iri_prefix: String,

    /// Emit SHACL shapes for instantiation and simulation inputs.
    #[arg(long)]
    shapes: bool,

    /// Expose only top-level parameters (names without a dot).
    #[arg(long, conflicts_with = "filter")]
    blackbox: bool,

    /// Expose only parameters whose name starts with one of these
    /// prefixes. Repeatable.
    #[arg(long = "filter", value_name = "PREFIX")]
    filter: Vec<String>,

    /// Serialization format.
    #[arg(long, value_enum, default_value_t = Format::Turtle)]
    format: Format,

    /// Output file; stdout when omitted.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Pretty Turtle with the fixed prefix table.
    Turtle,
    /// N-Triples, one triple per line.
    Ntriples,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let options = AssembleOptions {
        iri_prefix: args.iri_prefix,
        shapes: args.shapes,
        blackbox: args.blackbox,
        records: if args.filter.is_empty() {
            None
        } else {
            Some(args.filter)
        },
    };

    let graph = assemble_path(&args.fmu, &options)
        .with_context(|| format!("Failed to translate {}", args.fmu.display()))?;

    eprintln!("{}: {} triples", graph.fmu_iri(), graph.triple_count());

    let serialized = match args.format {
        Format::Turtle => graph.to_turtle(),
        Format::Ntriples => graph.to_ntriples(),
    }
    .context("Failed to serialize graph")?;

    match &args.output {
        Some(path) => {
            fs::write(path, &serialized)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Written: {}", path.display());
        }
        None => print!("{serialized}"),
    }

    Ok(())
}
