//! Reading files handed over by the browser.
//!
//! The uploader state machine only sees a [`PickedFile`] handle; the
//! bytes are read afterwards, once the file has been accepted.

use dioxus::html::FileData;
use dropwell_core::{NamedFile, SelectedFile};

/// A browser file handle from a drop or a file input.
pub struct PickedFile(pub FileData);

impl NamedFile for PickedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

/// A fully read file, ready for the embedding view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// Display name (final path segment).
    pub name: String,
}

impl UploadedFile {
    /// Name without its final extension, e.g. `"photo"` for `"photo.png"`.
    #[must_use]
    pub fn stem(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(base, _)| base)
    }
}

/// Errors that can occur while reading a selected file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The browser refused or failed to read the file contents.
    #[error("failed to read {name}: {reason}")]
    Read {
        /// Display name of the file.
        name: String,
        /// Browser-reported reason.
        reason: String,
    },
}

/// Read the contents of a file the uploader has accepted.
///
/// # Errors
///
/// Returns [`ReadError::Read`] if the browser cannot read the file (for
/// example it was deleted or its permissions changed after selection).
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn read_selected(selected: SelectedFile<PickedFile>) -> Result<UploadedFile, ReadError> {
    let SelectedFile { file, filename } = selected;
    match file.0.read_bytes().await {
        Ok(bytes) => Ok(UploadedFile {
            bytes: bytes.to_vec(),
            name: filename,
        }),
        Err(e) => Err(ReadError::Read {
            name: filename,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded(name: &str) -> UploadedFile {
        UploadedFile {
            bytes: Vec::new(),
            name: name.to_owned(),
        }
    }

    #[test]
    fn stem_strips_last_extension() {
        assert_eq!(uploaded("photo.png").stem(), "photo");
        assert_eq!(uploaded("archive.tar.gz").stem(), "archive.tar");
    }

    #[test]
    fn stem_of_extensionless_name_is_name() {
        assert_eq!(uploaded("README").stem(), "README");
    }

    #[test]
    fn read_error_mentions_file() {
        let err = ReadError::Read {
            name: "cat.jpg".into(),
            reason: "NotReadableError".into(),
        };
        assert_eq!(err.to_string(), "failed to read cat.jpg: NotReadableError");
    }
}
