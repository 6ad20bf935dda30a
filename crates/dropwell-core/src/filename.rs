//! Display-name extraction for manually selected files.
//!
//! Browsers report a file input's value as a (often fake) path such as
//! `C:\fakepath\cat.jpg`. Only the final segment is meaningful.

/// Return the final segment of `path` after the last `/` or `\`.
///
/// Falls back to the whole input when it contains no separator.
#[must_use]
pub fn filename_from_path(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
