//! Uploader configuration.

use serde::{Deserialize, Serialize};

/// CSS class applied to the upload target while a drag is over it.
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";

/// What to do when a drop arrives that carries no files (for example a
/// dragged text selection or a link).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDropPolicy {
    /// Reset the drag state and do nothing else.
    #[default]
    Ignore,
    /// Reset the drag state and report [`UploadError::EmptyPayload`](crate::UploadError::EmptyPayload).
    Reject,
}

/// Configuration for an [`Uploader`](crate::Uploader).
///
/// `height` and `width` are display hints for the drop zone and have no
/// effect on behavior. An empty `accept` list accepts every file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    /// Drop zone height as a CSS length (e.g. `"200px"`).
    pub height: Option<String>,
    /// Drop zone width as a CSS length.
    pub width: Option<String>,
    /// Allowed filename extensions without the leading dot, matched
    /// case-insensitively.
    pub accept: Vec<String>,
    /// Behavior for drops without files.
    pub empty_drop: EmptyDropPolicy,
    /// CSS class toggled while a drag is over the target.
    pub active_class: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            height: None,
            width: None,
            accept: Vec::new(),
            empty_drop: EmptyDropPolicy::default(),
            active_class: DEFAULT_ACTIVE_CLASS.to_owned(),
        }
    }
}

impl UploaderConfig {
    /// Config restricted to common raster image formats.
    #[must_use]
    pub fn images() -> Self {
        Self {
            accept: ["png", "jpg", "jpeg", "gif", "bmp", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            ..Self::default()
        }
    }

    /// Check whether `name` has an extension in the accept list.
    ///
    /// Always true when the list is empty.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        if self.accept.is_empty() {
            return true;
        }
        name.rsplit_once('.').is_some_and(|(_, ext)| {
            self.accept
                .iter()
                .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
    }

    /// Value for the file input's `accept` attribute, e.g. `".png,.jpg"`.
    ///
    /// Empty when every file type is accepted.
    #[must_use]
    pub fn accept_attribute(&self) -> String {
        self.accept
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(",")
    }
}
