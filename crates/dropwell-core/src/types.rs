//! Shared types for the uploader state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual drag state of an upload target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragState {
    /// Nothing is being dragged over the target.
    #[default]
    Idle,
    /// A drag carrying data is currently over the target.
    DragOver,
}

impl DragState {
    /// Whether the target should render its active (drag-over) styling.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::DragOver)
    }
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::DragOver => "drag-over",
        })
    }
}

/// A file that arrived at an upload target, paired with its display name.
///
/// `F` is the host's file handle (a browser `File`, a path, raw bytes in
/// tests). The uploader never retains it: ownership moves to the
/// `on_file_changed` callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile<F> {
    /// The opaque file handle.
    pub file: F,
    /// Name to display for the file (final path segment, no directories).
    pub filename: String,
}

/// Errors reported by [`Uploader`](crate::Uploader) when a file cannot be
/// delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// A drop arrived without any files and the policy is
    /// [`EmptyDropPolicy::Reject`](crate::EmptyDropPolicy::Reject).
    #[error("the dropped item did not contain any files")]
    EmptyPayload,

    /// The file's extension is not in the configured accept list.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_drag_over_is_active() {
        assert!(!DragState::Idle.is_active());
        assert!(DragState::DragOver.is_active());
        assert_eq!(DragState::default(), DragState::Idle);
    }

    #[test]
    fn errors_render_the_offending_name() {
        let err = UploadError::UnsupportedType("notes.txt".into());
        assert_eq!(err.to_string(), "unsupported file type: notes.txt");
    }
}
