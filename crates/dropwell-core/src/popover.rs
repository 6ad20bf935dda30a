//! Hover/click popover visibility.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side of the label the popover body opens on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Above the label.
    Top,
    /// Below the label.
    Bottom,
    /// To the left of the label.
    Left,
    /// To the right of the label.
    #[default]
    Right,
}

impl Placement {
    /// Lowercase name, also used as a CSS modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown placement name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown popover placement: {0:?}")]
pub struct ParsePlacementError(String);

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParsePlacementError(s.to_owned())),
        }
    }
}

/// Visibility of a popover that opens on hover and on click.
///
/// Clicking an already open popover does nothing, so a click during a
/// hover does not toggle it closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Popover {
    shown: bool,
}

impl Popover {
    /// Whether the popover body is visible.
    #[must_use]
    pub const fn is_shown(self) -> bool {
        self.shown
    }

    /// Pointer entered the label.
    pub const fn hover_start(&mut self) {
        self.shown = true;
    }

    /// Pointer left the label.
    pub const fn hover_end(&mut self) {
        self.shown = false;
    }

    /// Label was clicked. Returns `true` if this opened the popover.
    pub const fn click(&mut self) -> bool {
        if self.shown {
            return false;
        }
        self.shown = true;
        true
    }

    /// Focus moved away from the label.
    pub const fn dismiss(&mut self) {
        self.shown = false;
    }
}
