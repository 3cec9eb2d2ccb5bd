//! Error type for model-description reading and parsing.

/// Everything that can go wrong while reading a model description.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The FMU archive or descriptor file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that failed to open or read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The `.fmu` container is not a readable zip archive.
    #[error("`{path}` is not a readable FMU archive: {source}")]
    Archive {
        /// Path of the offending archive.
        path: String,
        /// Underlying zip error.
        #[source]
        source: zip::result::ZipError,
    },

    /// The archive contains no `modelDescription.xml` entry.
    #[error("`{path}` contains no modelDescription.xml")]
    MissingDescriptor {
        /// Path of the offending archive.
        path: String,
    },

    /// A bare descriptor file is not valid UTF-8.
    #[error("`{path}` is not valid UTF-8: {source}")]
    Encoding {
        /// Path of the offending file.
        path: String,
        /// Underlying conversion error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The descriptor XML failed to deserialize.
    #[error("invalid modelDescription.xml: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// A `<ScalarVariable>` or `<SimpleType>` carries no typed child
    /// element (`<Real>`, `<Integer>`, `<Boolean>`, `<String>`,
    /// `<Enumeration>`).
    #[error("`{name}` declares no variable type element")]
    MissingType {
        /// Name of the untyped variable or type definition.
        name: String,
    },
}
