//! Text inputs that commit their value on blur instead of per keystroke.

/// A draft value that only becomes the committed value on blur.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitOnBlur {
    draft: String,
    committed: String,
}

impl CommitOnBlur {
    /// Start with `value` as both draft and committed value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            draft: value.clone(),
            committed: value,
        }
    }

    /// Text currently shown in the input.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Last committed value.
    #[must_use]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Record a keystroke. Does not commit.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// Input lost focus. Returns the new value if it differs from the
    /// previously committed one.
    pub fn blur(&mut self) -> Option<&str> {
        if self.draft == self.committed {
            return None;
        }
        self.committed.clone_from(&self.draft);
        Some(&self.committed)
    }

    /// Replace both values from outside (e.g. the model changed).
    pub fn reset(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }
}

/// Whether an `<input type=...>` should be wrapped with commit-on-blur.
///
/// Radio buttons and checkboxes commit on change.
#[must_use]
pub fn commits_on_blur(input_type: &str) -> bool {
    !matches!(
        input_type.to_ascii_lowercase().as_str(),
        "radio" | "checkbox"
    )
}

/// Value a radio button or checkbox reports when it changes.
///
/// A checkbox reports its checked state as `"true"` or `"false"`; the
/// browser's `value` is `"on"` regardless of state. A radio button only
/// fires when it becomes checked and reports its own `value`.
#[must_use]
pub fn toggle_value(input_type: &str, value: &str, checked: bool) -> String {
    if input_type.eq_ignore_ascii_case("checkbox") {
        checked.to_string()
    } else {
        value.to_owned()
    }
}
