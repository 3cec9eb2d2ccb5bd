//! Error type for the translation core.

/// Everything that can fail while assembling an FMU graph.
///
/// Unit-lookup and declared-type-lookup misses are deliberately *not*
/// errors; they are logged warnings and the corresponding triples are
/// omitted (see the assembler documentation).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The FMU container or its descriptor could not be read.
    #[error("failed to read model description: {0}")]
    ModelDescription(#[from] fmi_model::Error),

    /// Coercion of an `Enumeration`-typed value was requested.
    #[error("type `Enumeration` is not yet supported")]
    UnsupportedType,

    /// A type tag outside the normalization table was encountered.
    #[error("unknown variable type `{0}`")]
    UnknownType(String),

    /// A raw value does not parse as its declared type.
    #[error("cannot interpret `{value}` as {expected}")]
    InvalidValue {
        /// The raw attribute value.
        value: String,
        /// The canonical FMI type tag it was expected to satisfy.
        expected: &'static str,
    },

    /// A minted IRI is not a valid IRI reference.
    #[error("invalid IRI `{0}`")]
    InvalidIri(String),

    /// The shape builder was invoked for a causality that never
    /// contributes shapes (a caller bug, not an FMU defect).
    #[error("variable `{name}` with causality `{causality}` cannot contribute a shape")]
    UnexpectedCausality {
        /// Variable name.
        name: String,
        /// The offending causality tag.
        causality: &'static str,
    },

    /// Graph serialization failed.
    #[error("graph serialization failed: {0}")]
    Serialization(String),
}
