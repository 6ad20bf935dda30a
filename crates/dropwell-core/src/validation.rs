//! Entity-name validation with a temporary invalid marker.
//!
//! A rejected keystroke reverts the input to the last valid model value
//! and flags the field invalid for [`INVALID_CHAR_RESET`], after which the
//! flag clears on its own.

use std::time::Duration;

/// How long the invalid marker stays up after a rejected edit.
pub const INVALID_CHAR_RESET: Duration = Duration::from_secs(2);

/// Characters that may not appear in entity names.
pub const INVALID_NAME_CHARS: &[char] = &[
    '#', ':', '/', '|', '_', '%', '<', '>', '[', ']', '{', '}', '\\', '\u{fffd}',
];

/// Collapse runs of whitespace into single spaces and trim the ends.
#[must_use]
pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `name` is acceptable as an entity name.
///
/// Names are checked after whitespace normalisation. An empty name is
/// valid only when `allow_empty` is set.
#[must_use]
pub fn is_valid_entity_name(name: &str, allow_empty: bool) -> bool {
    let normalized = normalize_whitespace(name);
    if normalized.is_empty() {
        return allow_empty;
    }
    !normalized.contains(INVALID_NAME_CHARS)
}

/// Result of proposing a new view value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The value is valid and is now the model value.
    Accepted(String),
    /// The value was refused; the input should show `model` again and
    /// schedule [`ValidatedField::reset`] with `generation` after
    /// [`INVALID_CHAR_RESET`].
    Reverted {
        /// The unchanged model value to restore into the input.
        model: String,
        /// Token identifying this rejection.
        generation: u64,
    },
}

/// A name input that refuses invalid edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedField {
    model: String,
    invalid: bool,
    generation: u64,
    allow_empty: bool,
}

impl ValidatedField {
    /// Start from a model value. Empty values are refused unless
    /// `allow_empty` is set.
    #[must_use]
    pub fn new(model: impl Into<String>, allow_empty: bool) -> Self {
        Self {
            model: model.into(),
            allow_empty,
            ..Self::default()
        }
    }

    /// Current model value.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the invalid-character marker is currently raised.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Validate a new view value.
    pub fn propose(&mut self, view: &str) -> Validation {
        if is_valid_entity_name(view, self.allow_empty) {
            view.clone_into(&mut self.model);
            self.invalid = false;
            return Validation::Accepted(self.model.clone());
        }
        self.invalid = true;
        self.generation += 1;
        Validation::Reverted {
            model: self.model.clone(),
            generation: self.generation,
        }
    }

    /// Clear the invalid marker raised by the rejection `generation`.
    ///
    /// Ignored when a newer rejection has happened since, so a stale timer
    /// does not cut the newer marker short.
    pub const fn reset(&mut self, generation: u64) {
        if generation == self.generation {
            self.invalid = false;
        }
    }
}
