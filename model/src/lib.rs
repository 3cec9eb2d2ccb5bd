//! FMI 2.0 model descriptions as typed Rust data.
//!
//! An FMU (Functional Mock-up Unit) is a zip archive whose
//! `modelDescription.xml` describes the packaged simulation model: its
//! metadata, unit and type definitions, and the flat list of scalar
//! variables with their causalities. This crate reads that descriptor —
//! either straight from an `.fmu` archive or from a bare XML file — into
//! the [`ModelDescription`] structure.
//!
//! Parsing is strict: a malformed descriptor is an [`Error`], never a
//! partially-initialized description.
//!
//! # Entry Point
//!
//! ```no_run
//! let md = fmi_model::read_model_description("model.fmu".as_ref())?;
//! println!("{} variables", md.model_variables.len());
//! # Ok::<(), fmi_model::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod error;
mod model;
mod read;
mod xml;

pub use error::Error;
pub use model::{
    Causality, ModelDescription, ScalarVariable, TypeDefinition, UnitDefinition, VarType,
};
pub use read::read_model_description;
