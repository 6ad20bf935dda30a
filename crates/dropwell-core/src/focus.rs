//! Named focus requests broadcast to every listening input.

/// One request to focus the element registered under `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    /// Name the receiving element was registered with.
    pub target: String,
    /// Sequence number, distinct for every broadcast.
    pub seq: u64,
}

impl FocusRequest {
    /// Whether an element registered as `name` should take focus.
    #[must_use]
    pub fn targets(&self, name: &str) -> bool {
        self.target == name
    }
}

/// Holds the most recent focus request.
///
/// Elements compare the request's `seq` against the last one they handled
/// so broadcasting the same name twice focuses twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusBus {
    latest: Option<FocusRequest>,
    next_seq: u64,
}

impl FocusBus {
    /// Ask the element registered as `target` to take focus.
    pub fn broadcast(&mut self, target: impl Into<String>) -> &FocusRequest {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest.insert(FocusRequest {
            target: target.into(),
            seq,
        })
    }

    /// The most recent request, if any.
    #[must_use]
    pub const fn latest(&self) -> Option<&FocusRequest> {
        self.latest.as_ref()
    }

    /// The latest request if it targets `name` and is newer than
    /// `handled` (the last sequence number this element acted on).
    #[must_use]
    pub fn pending_for(&self, name: &str, handled: Option<u64>) -> Option<&FocusRequest> {
        self.latest
            .as_ref()
            .filter(|req| req.targets(name) && handled.is_none_or(|seen| req.seq > seen))
    }
}
