//! Translation of FMI 2.0 model descriptions into RDF knowledge graphs.
//!
//! The crate takes a parsed [`model::ModelDescription`] (or a path to an
//! FMU archive or bare descriptor) and assembles a graph describing the
//! FMU, its units, its simple types and its scalar variables, optionally
//! together with SHACL shapes that constrain model instantiation and
//! simulation inputs.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fmu2rdf::{assemble_path, AssembleOptions};
//!
//! # fn main() -> Result<(), fmu2rdf::Error> {
//! let options = AssembleOptions {
//!     shapes: true,
//!     ..AssembleOptions::default()
//! };
//! let graph = assemble_path(Path::new("Thermostat.fmu"), &options)?;
//! println!("{}", graph.to_turtle()?);
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod annotate;
pub mod assemble;
pub mod coerce;
pub mod error;
pub mod graph;
pub mod shapes;
pub mod vocab;

pub use fmi_model as model;

pub use assemble::{assemble, assemble_path, AssembleOptions, DEFAULT_IRI_PREFIX};
pub use coerce::{coerce, TypedValue};
pub use error::Error;
pub use graph::FmuGraph;
