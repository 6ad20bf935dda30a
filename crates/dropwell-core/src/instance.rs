//! Per-instance identifiers for uploaders mounted on the same page.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for one upload target.
///
/// Used to give each instance's file input a distinct DOM `id` so its
/// `<label for=...>` never points at another uploader's input. Event
/// routing itself does not depend on it: every instance listens on its
/// own input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate the next identifier.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// DOM id for this instance's fallback file input.
    #[must_use]
    pub fn input_id(self) -> String {
        format!("dropwell-file-input-{}", self.0)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_ids_are_distinct_and_increasing() {
        let a = InstanceId::next();
        let b = InstanceId::next();
        assert_ne!(a, b);
        assert!(b > a);
        assert_ne!(a.input_id(), b.input_id());
    }

    #[test]
    fn input_id_embeds_counter() {
        let id = InstanceId::next();
        assert_eq!(id.input_id(), format!("dropwell-file-input-{}", id.get()));
    }
}
