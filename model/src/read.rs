//! Reading a model description from disk.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::model::ModelDescription;

/// Name of the descriptor entry inside an `.fmu` archive.
const DESCRIPTOR_ENTRY: &str = "modelDescription.xml";

/// Zip local-file-header magic, used to tell archives from bare XML.
const ZIP_MAGIC: [u8; 4] = [b'P', b'K', 0x03, 0x04];

/// Reads a model description from an `.fmu` archive or a bare
/// `modelDescription.xml` file.
///
/// Dispatch is by content, not extension: files starting with the zip
/// magic are treated as FMU containers and `modelDescription.xml` is
/// extracted from them; anything else is parsed as XML directly.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Archive`] /
/// [`Error::MissingDescriptor`] for container-level failures, and
/// [`Error::Xml`] / [`Error::MissingType`] for descriptor-level failures.
pub fn read_model_description(path: &Path) -> Result<ModelDescription, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;

    let xml = if bytes.starts_with(&ZIP_MAGIC) {
        debug!(path = %path.display(), "extracting {DESCRIPTOR_ENTRY} from FMU archive");
        extract_descriptor(path, &bytes)?
    } else {
        debug!(path = %path.display(), "reading bare descriptor XML");
        String::from_utf8(bytes).map_err(|source| Error::Encoding {
            path: path.display().to_string(),
            source,
        })?
    };

    ModelDescription::from_xml(&xml)
}

fn extract_descriptor(path: &Path, bytes: &[u8]) -> Result<String, Error> {
    let archive_err = |source| Error::Archive {
        path: path.display().to_string(),
        source,
    };

    let reader = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(reader).map_err(archive_err)?;

    let mut entry = match archive.by_name(DESCRIPTOR_ENTRY) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(Error::MissingDescriptor {
                path: path.display().to_string(),
            })
        }
        Err(source) => return Err(archive_err(source)),
    };

    let mut xml = String::new();
    entry.read_to_string(&mut xml).map_err(|source| Error::Io {
        path: format!("{}!{DESCRIPTOR_ENTRY}", path.display()),
        source,
    })?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_model_description(Path::new("/nonexistent/model.fmu")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn garbage_zip_is_an_archive_error() {
        // Starts with the zip magic but is not a valid archive.
        let dir = std::env::temp_dir().join("fmi-model-test-garbage");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.fmu");
        fs::write(&path, [b'P', b'K', 0x03, 0x04, 0xff, 0xff]).unwrap();

        let err = read_model_description(&path).unwrap_err();
        assert!(matches!(err, Error::Archive { .. }));
    }

    #[test]
    fn invalid_utf8_descriptor_is_an_encoding_error() {
        let dir = std::env::temp_dir().join("fmi-model-test-encoding");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("modelDescription.xml");
        // Not zip-magic-prefixed, not valid UTF-8.
        fs::write(&path, [b'<', 0xff, 0xfe, b'>']).unwrap();

        let err = read_model_description(&path).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));
    }

    #[test]
    fn bare_xml_file_is_parsed_directly() {
        let dir = std::env::temp_dir().join("fmi-model-test-xml");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("modelDescription.xml");
        fs::write(
            &path,
            r#"<fmiModelDescription fmiVersion="2.0" modelName="m" guid="g"/>"#,
        )
        .unwrap();

        let md = read_model_description(&path).unwrap();
        assert_eq!(md.model_name, "m");
        assert!(md.model_variables.is_empty());
    }
}
